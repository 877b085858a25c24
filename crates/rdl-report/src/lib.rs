//! Report-definition (RDL) generation.
//!
//! [`ReportBuilder`] turns a list of [`rdl_model::ColumnDefinition`]s and
//! [`rdl_model::GroupDefinition`]s into a [`Document`]:
//!
//! - **Template** ([`ReportTemplate`]): static scaffolding such as namespaces,
//!   the data source, title and page margins
//! - **Tablix** ([`TablixPlan`]): column widths, column hierarchy, header
//!   row and data row, all derived from the same ordering pass
//! - **Writer** ([`write_document`], [`save_document`]): XML serialization

mod builder;
mod document;
mod error;
mod field_types;
mod naming;
mod tablix;
mod template;
mod textbox;
mod writer;

pub use builder::{ReportBuilder, TITLE_TEXTBOX_NAME};
pub use document::{Document, Element, Namespace, Node};
pub use error::{ReportError, Result};
pub use field_types::{DEFAULT_FIELD_TYPE, FieldTypeMap};
pub use naming::{CellRole, NameRegistry, cell_name, sanitize_identifier};
pub use tablix::TablixPlan;
pub use template::{
    AUTHORING_METADATA_NS, AuthoringMetadata, CellStyle, DEFAULT_FONT_FAMILY_NS,
    DataSourceConfig, FALLBACK_FONT_FAMILY, Namespaces, PageConfig, REPORT_DEFINITION_NS,
    REPORT_DESIGNER_NS, ReportTemplate, TablixLayout, TitleConfig,
};
pub use textbox::{CellSpec, RunStyle};
pub use writer::{save_document, to_xml_string, write_document};
