//! Report definition and template files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rdl_model::{ColumnDefinition, GroupDefinition, ReportModel};
use rdl_report::{Document, ReportBuilder, ReportTemplate};

/// Extension given to generated report files.
pub const REPORT_EXTENSION: &str = "rdl";

/// One report to generate: its columns, groups and target dataset.
///
/// ```toml
/// dataset_name = "DataSetGetEmployeeReport"
/// output = "User1Report.rdl"
///
/// [[columns]]
/// name = "FirstName"
/// display_name = "First Name"
/// data_field = "FirstName"
/// width = "1.15278in"
/// display_order = 1
///
/// [[groups]]
/// group_name = "DateGroup"
/// column_name = "HireDate"
/// nested_columns = ["Salary"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub dataset_name: String,
    /// Output file; relative paths resolve against the definition file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Overrides the template's title caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub groups: Vec<GroupDefinition>,
}

impl ReportDefinition {
    pub fn model(&self) -> ReportModel<'_> {
        ReportModel::new(&self.columns, &self.groups)
    }

    /// Build the document, applying the title override to `template`.
    pub fn build(&self, template: &ReportTemplate) -> rdl_report::Result<Document> {
        let template = match &self.title {
            Some(title) => template.clone().with_title(title.as_str()),
            None => template.clone(),
        };
        ReportBuilder::new(template).build_model(&self.model(), &self.dataset_name)
    }

    /// Where the report is written when no explicit path is given.
    ///
    /// `output` is taken relative to `base_dir`; without it the file is named
    /// after `fallback_stem`.
    pub fn output_path(&self, base_dir: &Path, fallback_stem: &str) -> PathBuf {
        match &self.output {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => base_dir.join(format!("{fallback_stem}.{REPORT_EXTENSION}")),
        }
    }
}

/// Load a report definition from a TOML file.
pub fn load_definition(path: &Path) -> Result<ReportDefinition> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read definition {}", path.display()))?;
    let definition: ReportDefinition =
        toml::from_str(&text).with_context(|| format!("parse definition {}", path.display()))?;
    debug!(
        path = %path.display(),
        columns = definition.columns.len(),
        groups = definition.groups.len(),
        "loaded report definition"
    );
    Ok(definition)
}

/// Load a template overlay, or the built-in template when `path` is `None`.
///
/// Keys missing from the file keep their built-in values.
pub fn load_template(path: Option<&Path>) -> Result<ReportTemplate> {
    let Some(path) = path else {
        return Ok(ReportTemplate::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read template {}", path.display()))?;
    let template =
        toml::from_str(&text).with_context(|| format!("parse template {}", path.display()))?;
    debug!(path = %path.display(), "loaded report template");
    Ok(template)
}
