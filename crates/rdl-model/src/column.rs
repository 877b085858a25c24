use serde::{Deserialize, Serialize};

fn default_visible() -> bool {
    true
}

/// One reportable attribute bound to a data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Stable identifier; used to derive textbox names.
    pub name: String,
    /// Static header text for columns rendered outside a group.
    pub display_name: String,
    /// Data field this column binds to.
    pub data_field: String,
    /// Linear measurement such as `1in`, written through verbatim.
    pub width: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    /// Rendered through a group's nested columns instead of the flat pass.
    #[serde(default)]
    pub is_grouped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl ColumnDefinition {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        data_field: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            data_field: data_field.into(),
            width: width.into(),
            display_order: 0,
            is_visible: true,
            is_grouped: false,
            format: None,
            font_family: None,
        }
    }

    #[must_use]
    pub fn with_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    #[must_use]
    pub fn grouped(mut self) -> Self {
        self.is_grouped = true;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }
}

/// A single-level grouping of rows by one data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub group_name: String,
    /// Field the group buckets and sorts rows by.
    pub column_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    /// Data-field names of the columns rendered inside this group, in order.
    #[serde(default)]
    pub nested_columns: Vec<String>,
}

impl GroupDefinition {
    pub fn new(group_name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            column_name: column_name.into(),
            display_field: None,
            display_order: 0,
            nested_columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_display_field(mut self, field: impl Into<String>) -> Self {
        self.display_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    #[must_use]
    pub fn with_nested<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nested_columns.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Field shown in the group's summary cell.
    pub fn display_field(&self) -> &str {
        self.display_field
            .as_deref()
            .unwrap_or(self.column_name.as_str())
    }
}
