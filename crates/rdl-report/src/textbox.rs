//! Textbox elements shared by the title and the table cells.

use rdl_model::Expression;

use crate::document::{Element, Namespace};
use crate::template::CellStyle;

/// Text run styling. Absent properties are not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub format: Option<String>,
}

impl RunStyle {
    pub fn font(family: impl Into<String>) -> Self {
        Self {
            font_family: Some(family.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Option<&str>) -> Self {
        self.format = format.filter(|value| !value.is_empty()).map(str::to_string);
        self
    }

    fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.format.is_none()
    }

    fn to_element(&self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        let properties = [
            ("FontFamily", &self.font_family),
            ("FontSize", &self.font_size),
            ("FontWeight", &self.font_weight),
            ("Format", &self.format),
        ];
        let mut style = Element::new("Style");
        for (name, value) in properties {
            if let Some(value) = value {
                style.push(Element::text_element(name, value.as_str()));
            }
        }
        Some(style)
    }
}

/// One table cell: its unique item name, bound value and run style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSpec {
    pub name: String,
    pub value: Expression,
    pub style: RunStyle,
}

/// Border and padding block appended to every textbox.
pub fn common_style(style: &CellStyle) -> Element {
    Element::new("Style")
        .with_child(
            Element::new("Border")
                .with_child(Element::text_element("Color", style.border_color.as_str()))
                .with_child(Element::text_element("Style", style.border_style.as_str())),
        )
        .with_child(Element::text_element("PaddingLeft", style.padding.as_str()))
        .with_child(Element::text_element("PaddingRight", style.padding.as_str()))
        .with_child(Element::text_element("PaddingTop", style.padding.as_str()))
        .with_child(Element::text_element("PaddingBottom", style.padding.as_str()))
}

/// `<Style><Border><Style>None</Style></Border></Style>`
pub fn borderless_style() -> Element {
    Element::new("Style")
        .with_child(Element::new("Border").with_child(Element::text_element("Style", "None")))
}

/// Textbox head: name, grow flags and the single paragraph holding `value`.
pub fn textbox(name: &str, value: &Expression, run_style: &RunStyle) -> Element {
    let mut run = Element::new("TextRun").with_child(Element::text_element("Value", value.to_string()));
    if let Some(style) = run_style.to_element() {
        run.push(style);
    }
    Element::new("Textbox")
        .with_attribute("Name", name)
        .with_child(Element::text_element("CanGrow", "true"))
        .with_child(Element::text_element("KeepTogether", "true"))
        .with_child(
            Element::new("Paragraphs").with_child(
                Element::new("Paragraph").with_child(Element::new("TextRuns").with_child(run)),
            ),
        )
}

/// A complete table cell wrapping its textbox.
pub fn tablix_cell(cell: &CellSpec, style: &CellStyle) -> Element {
    let textbox = textbox(&cell.name, &cell.value, &cell.style)
        .with_child(
            Element::in_namespace(Namespace::Designer, "DefaultName").with_text(cell.name.as_str()),
        )
        .with_child(common_style(style));
    Element::new("TablixCell").with_child(Element::new("CellContents").with_child(textbox))
}
