//! Static scaffolding of a report-definition document.
//!
//! Everything here is independent of the column/group model: namespaces,
//! authoring metadata, the data source, the title, page margins. Defaults
//! reproduce the values the employee report templates were authored with.
//! Every struct is `#[serde(default)]`, so a TOML file only needs to list the
//! values it overrides.

use serde::{Deserialize, Serialize};

use crate::field_types::FieldTypeMap;

/// Report-definition schema namespace.
pub const REPORT_DEFINITION_NS: &str =
    "http://schemas.microsoft.com/sqlserver/reporting/2016/01/reportdefinition";

/// Report designer extension namespace.
pub const REPORT_DESIGNER_NS: &str =
    "http://schemas.microsoft.com/SQLServer/reporting/reportdesigner";

/// Default font family extension namespace.
pub const DEFAULT_FONT_FAMILY_NS: &str =
    "http://schemas.microsoft.com/sqlserver/reporting/2016/01/reportdefinition/defaultfontfamily";

/// Authoring metadata extension namespace.
pub const AUTHORING_METADATA_NS: &str =
    "http://schemas.microsoft.com/sqlserver/reporting/authoringmetadata";

/// Font used for header and data cells without an explicit family.
pub const FALLBACK_FONT_FAMILY: &str = "Arial";

/// Namespace URIs attached to the root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespaces {
    pub report: String,
    pub designer: String,
    pub font_family: String,
    pub authoring: String,
    /// Prefix listed in the root `MustUnderstand` attribute.
    pub must_understand: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            report: REPORT_DEFINITION_NS.to_string(),
            designer: REPORT_DESIGNER_NS.to_string(),
            font_family: DEFAULT_FONT_FAMILY_NS.to_string(),
            authoring: AUTHORING_METADATA_NS.to_string(),
            must_understand: "df".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthoringMetadata {
    pub created_by: String,
    pub created_version: String,
    pub updated_by: String,
    pub updated_version: String,
    pub last_modified: String,
}

impl Default for AuthoringMetadata {
    fn default() -> Self {
        Self {
            created_by: "xxxx".to_string(),
            created_version: "15.0.20283.0".to_string(),
            updated_by: "xxx".to_string(),
            updated_version: "15.0.20283.0".to_string(),
            last_modified: "2025-01-30T19:18:16.1397756Z".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    pub name: String,
    pub provider: String,
    pub connect_string: String,
    /// Credential prompt shown by the host.
    pub prompt: String,
    pub security_type: String,
    pub data_source_id: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            name: "DataSGetEmployeeReport".to_string(),
            provider: "SQL".to_string(),
            connect_string: "Data Source=xx.xxx.xxx.221;Initial Catalog=zxxxxx".to_string(),
            prompt: "Specify a user name and password for data source DataSource1:".to_string(),
            security_type: "DataBase".to_string(),
            data_source_id: "da61d9fe-c960-4375-9c49-2992e9f9d4fd".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub caption: String,
    pub font_family: String,
    pub font_size: String,
    pub top: String,
    pub left: String,
    pub height: String,
    pub width: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            caption: "Employee Salary by Date".to_string(),
            font_family: "Segoe UI Light".to_string(),
            font_size: "14pt".to_string(),
            top: "0.175in".to_string(),
            left: "0.625in".to_string(),
            height: "0.325in".to_string(),
            width: "5.5in".to_string(),
        }
    }
}

/// Placement of the generated table. Measurements are passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablixLayout {
    pub name: String,
    pub top: String,
    pub left: String,
    pub height: String,
    pub width: String,
    pub z_index: String,
    pub header_row_height: String,
    pub data_row_height: String,
    /// Font of the group header and group summary cells.
    pub group_font_family: String,
    pub group_header_font_size: String,
    pub group_header_font_weight: String,
}

impl Default for TablixLayout {
    fn default() -> Self {
        Self {
            name: "Tablix1".to_string(),
            top: "0.91194in".to_string(),
            left: "0.37722in".to_string(),
            height: "0.99167in".to_string(),
            width: "6.45834in".to_string(),
            z_index: "1".to_string(),
            header_row_height: "0.37084in".to_string(),
            data_row_height: "0.37084in".to_string(),
            group_font_family: FALLBACK_FONT_FAMILY.to_string(),
            group_header_font_size: "10pt".to_string(),
            group_header_font_weight: "Bold".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub body_height: String,
    pub section_width: String,
    pub footer_height: String,
    pub print_footer_on_first_page: bool,
    pub print_footer_on_last_page: bool,
    pub left_margin: String,
    pub right_margin: String,
    pub top_margin: String,
    pub bottom_margin: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            body_height: "2.25in".to_string(),
            section_width: "7.08556in".to_string(),
            footer_height: "0.45in".to_string(),
            print_footer_on_first_page: true,
            print_footer_on_last_page: true,
            left_margin: "1in".to_string(),
            right_margin: "1in".to_string(),
            top_margin: "1in".to_string(),
            bottom_margin: "1in".to_string(),
        }
    }
}

/// Cell border and padding shared by every textbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub border_color: String,
    pub border_style: String,
    pub padding: String,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            border_color: "LightGrey".to_string(),
            border_style: "Solid".to_string(),
            padding: "2pt".to_string(),
        }
    }
}

/// All configuration the builder needs besides the model itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTemplate {
    pub namespaces: Namespaces,
    pub authoring: AuthoringMetadata,
    pub data_source: DataSourceConfig,
    pub query_text: String,
    pub title: TitleConfig,
    pub tablix: TablixLayout,
    pub page: PageConfig,
    pub cell_style: CellStyle,
    pub field_types: FieldTypeMap,
    pub default_font_family: String,
    pub auto_refresh: u32,
    pub parameter_grid_columns: u32,
    pub parameter_grid_rows: u32,
    pub report_unit_type: String,
    pub report_id: String,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            namespaces: Namespaces::default(),
            authoring: AuthoringMetadata::default(),
            data_source: DataSourceConfig::default(),
            query_text: "SELECT [LastName],[Department],[Position],[Salary],[HireDate],[FirstName] FROM EmployeeData365".to_string(),
            title: TitleConfig::default(),
            tablix: TablixLayout::default(),
            page: PageConfig::default(),
            cell_style: CellStyle::default(),
            field_types: FieldTypeMap::default(),
            default_font_family: "Segoe UI".to_string(),
            auto_refresh: 0,
            parameter_grid_columns: 4,
            parameter_grid_rows: 2,
            report_unit_type: "Inch".to_string(),
            report_id: "30199e74-3fe5-461f-b6b6-f68d97e172df".to_string(),
        }
    }
}

impl ReportTemplate {
    #[must_use]
    pub fn with_title(mut self, caption: impl Into<String>) -> Self {
        self.title.caption = caption.into();
        self
    }

    #[must_use]
    pub fn with_query_text(mut self, query: impl Into<String>) -> Self {
        self.query_text = query.into();
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, timestamp: impl Into<String>) -> Self {
        self.authoring.last_modified = timestamp.into();
        self
    }
}
