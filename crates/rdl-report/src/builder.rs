//! Report-definition document assembly.

use rdl_model::{ColumnDefinition, Expression, GroupDefinition, ReportModel};
use tracing::{debug, info_span};

use crate::document::{Document, Element, Namespace};
use crate::error::Result;
use crate::naming::NameRegistry;
use crate::tablix::{TablixPlan, build_tablix};
use crate::template::ReportTemplate;
use crate::textbox::{RunStyle, borderless_style, common_style, textbox};

/// Item name of the title textbox.
pub const TITLE_TEXTBOX_NAME: &str = "ReportTitle";

/// Builds report definitions from a fixed template.
///
/// The builder holds no per-build state, so one instance can serve many
/// reports, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    template: ReportTemplate,
}

impl ReportBuilder {
    pub fn new(template: ReportTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &ReportTemplate {
        &self.template
    }

    /// Build the full document for `columns` and `groups`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReportError::Model`] when the model fails validation,
    /// e.g. a group lists a data field no column binds to.
    pub fn build(
        &self,
        columns: &[ColumnDefinition],
        groups: &[GroupDefinition],
        dataset_name: &str,
    ) -> Result<Document> {
        self.build_model(&ReportModel::new(columns, groups), dataset_name)
    }

    pub fn build_model(&self, model: &ReportModel<'_>, dataset_name: &str) -> Result<Document> {
        let span = info_span!(
            "build_report",
            dataset = dataset_name,
            columns = model.columns().len(),
            groups = model.groups().len()
        );
        let _guard = span.enter();

        model.validate()?;
        let plan = TablixPlan::new(model)?;

        let mut names = NameRegistry::new();
        names.reserve(TITLE_TEXTBOX_NAME);
        names.reserve(&self.template.tablix.name);

        let template = &self.template;
        let namespaces = &template.namespaces;
        let root = Element::new("Report")
            .with_attribute("MustUnderstand", namespaces.must_understand.as_str())
            .with_child(self.authoring_metadata())
            .with_child(
                Element::in_namespace(Namespace::FontFamily, "DefaultFontFamily")
                    .with_text(template.default_font_family.as_str()),
            )
            .with_child(Element::text_element(
                "AutoRefresh",
                template.auto_refresh.to_string(),
            ))
            .with_child(self.data_sources())
            .with_child(self.data_sets(model, dataset_name))
            .with_child(self.report_sections(&plan, dataset_name, &mut names))
            .with_child(self.parameters_layout())
            .with_child(
                Element::in_namespace(Namespace::Designer, "ReportUnitType")
                    .with_text(template.report_unit_type.as_str()),
            )
            .with_child(
                Element::in_namespace(Namespace::Designer, "ReportID")
                    .with_text(template.report_id.as_str()),
            );

        debug!("report document assembled");
        Ok(Document::new(namespaces.clone(), root))
    }

    fn authoring_metadata(&self) -> Element {
        let meta = &self.template.authoring;
        let am = |name: &'static str| Element::in_namespace(Namespace::Authoring, name);
        am("AuthoringMetadata")
            .with_child(
                am("CreatedBy")
                    .with_child(am("Name").with_text(meta.created_by.as_str()))
                    .with_child(am("Version").with_text(meta.created_version.as_str())),
            )
            .with_child(
                am("UpdatedBy")
                    .with_child(am("Name").with_text(meta.updated_by.as_str()))
                    .with_child(am("Version").with_text(meta.updated_version.as_str())),
            )
            .with_child(am("LastModifiedTimestamp").with_text(meta.last_modified.as_str()))
    }

    fn data_sources(&self) -> Element {
        let source = &self.template.data_source;
        Element::new("DataSources").with_child(
            Element::new("DataSource")
                .with_attribute("Name", source.name.as_str())
                .with_child(
                    Element::new("ConnectionProperties")
                        .with_child(Element::text_element("DataProvider", source.provider.as_str()))
                        .with_child(Element::text_element(
                            "ConnectString",
                            source.connect_string.as_str(),
                        ))
                        .with_child(Element::text_element("Prompt", source.prompt.as_str())),
                )
                .with_child(
                    Element::in_namespace(Namespace::Designer, "SecurityType")
                        .with_text(source.security_type.as_str()),
                )
                .with_child(
                    Element::in_namespace(Namespace::Designer, "DataSourceID")
                        .with_text(source.data_source_id.as_str()),
                ),
        )
    }

    fn data_sets(&self, model: &ReportModel<'_>, dataset_name: &str) -> Element {
        let template = &self.template;
        let fields = Element::new("Fields").with_children(model.columns().iter().map(|column| {
            Element::new("Field")
                .with_attribute("Name", column.data_field.as_str())
                .with_child(Element::text_element("DataField", column.data_field.as_str()))
                .with_child(
                    Element::in_namespace(Namespace::Designer, "TypeName")
                        .with_text(template.field_types.resolve(&column.data_field)),
                )
        }));
        Element::new("DataSets").with_child(
            Element::new("DataSet")
                .with_attribute("Name", dataset_name)
                .with_child(
                    Element::new("Query")
                        .with_child(Element::text_element(
                            "DataSourceName",
                            template.data_source.name.as_str(),
                        ))
                        .with_child(Element::text_element(
                            "CommandText",
                            template.query_text.as_str(),
                        ))
                        .with_child(
                            Element::in_namespace(Namespace::Designer, "UseGenericDesigner")
                                .with_text("true"),
                        ),
                )
                .with_child(fields),
        )
    }

    fn report_sections(
        &self,
        plan: &TablixPlan<'_>,
        dataset_name: &str,
        names: &mut NameRegistry,
    ) -> Element {
        let page = &self.template.page;
        let body = Element::new("Body")
            .with_child(
                Element::new("ReportItems")
                    .with_child(self.title_textbox())
                    .with_child(build_tablix(plan, &self.template, dataset_name, names)),
            )
            .with_child(Element::text_element("Height", page.body_height.as_str()))
            .with_child(borderless_style());
        Element::new("ReportSections").with_child(
            Element::new("ReportSection")
                .with_child(body)
                .with_child(Element::text_element("Width", page.section_width.as_str()))
                .with_child(self.page()),
        )
    }

    fn title_textbox(&self) -> Element {
        let title = &self.template.title;
        let style = RunStyle::font(title.font_family.as_str()).with_size(title.font_size.as_str());
        textbox(
            TITLE_TEXTBOX_NAME,
            &Expression::literal(title.caption.as_str()),
            &style,
        )
        .with_child(Element::in_namespace(Namespace::Designer, "WatermarkTextbox").with_text("Title"))
        .with_child(
            Element::in_namespace(Namespace::Designer, "DefaultName").with_text(TITLE_TEXTBOX_NAME),
        )
        .with_child(Element::text_element("Top", title.top.as_str()))
        .with_child(Element::text_element("Left", title.left.as_str()))
        .with_child(Element::text_element("Height", title.height.as_str()))
        .with_child(Element::text_element("Width", title.width.as_str()))
        .with_child(common_style(&self.template.cell_style))
    }

    fn page(&self) -> Element {
        let page = &self.template.page;
        Element::new("Page")
            .with_child(
                Element::new("PageFooter")
                    .with_child(Element::text_element("Height", page.footer_height.as_str()))
                    .with_child(Element::text_element(
                        "PrintOnFirstPage",
                        page.print_footer_on_first_page.to_string(),
                    ))
                    .with_child(Element::text_element(
                        "PrintOnLastPage",
                        page.print_footer_on_last_page.to_string(),
                    ))
                    .with_child(borderless_style()),
            )
            .with_child(Element::text_element("LeftMargin", page.left_margin.as_str()))
            .with_child(Element::text_element("RightMargin", page.right_margin.as_str()))
            .with_child(Element::text_element("TopMargin", page.top_margin.as_str()))
            .with_child(Element::text_element("BottomMargin", page.bottom_margin.as_str()))
    }

    fn parameters_layout(&self) -> Element {
        Element::new("ReportParametersLayout").with_child(
            Element::new("GridLayoutDefinition")
                .with_child(Element::text_element(
                    "NumberOfColumns",
                    self.template.parameter_grid_columns.to_string(),
                ))
                .with_child(Element::text_element(
                    "NumberOfRows",
                    self.template.parameter_grid_rows.to_string(),
                )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_builds_minimal_document() {
        let document = ReportBuilder::default()
            .build(&[], &[], "DataSet1")
            .expect("build");
        let tablix = document.tablix().expect("tablix");
        let columns = tablix
            .path(&["TablixBody", "TablixColumns"])
            .expect("columns");
        assert_eq!(columns.elements().count(), 0);
        assert_eq!(document.textbox_names(), vec![TITLE_TEXTBOX_NAME]);
        assert_eq!(
            document
                .root
                .path(&["DataSets", "DataSet"])
                .and_then(|set| set.attribute("Name")),
            Some("DataSet1")
        );
    }

    #[test]
    fn root_sections_keep_schema_order() {
        let document = ReportBuilder::default()
            .build(&[], &[], "DataSet1")
            .expect("build");
        let names: Vec<String> = document
            .root
            .elements()
            .map(Element::qualified_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "am:AuthoringMetadata",
                "df:DefaultFontFamily",
                "AutoRefresh",
                "DataSources",
                "DataSets",
                "ReportSections",
                "ReportParametersLayout",
                "rd:ReportUnitType",
                "rd:ReportID",
            ]
        );
        assert_eq!(document.root.attribute("MustUnderstand"), Some("df"));
    }
}
