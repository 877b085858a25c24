use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use comfy_table::Table;
use tracing::{info, info_span};

use rdl_cli::definition::{ReportDefinition, load_definition, load_template};
use rdl_cli::samples::sample_reports;
use rdl_report::{NameRegistry, ReportTemplate, TITLE_TEXTBOX_NAME, TablixPlan, save_document};

use crate::cli::{GenerateArgs, InspectArgs, SamplesArgs, TemplateArgs};
use crate::summary::{apply_table_style, cell_rows};
use crate::types::ReportSummary;

pub fn run_generate(args: &GenerateArgs) -> Result<ReportSummary> {
    let span = info_span!("generate", definition = %args.definition.display());
    let _guard = span.enter();

    let definition = load_definition(&args.definition)?;
    let template = resolve_template(&args.template)?;
    let path = match &args.output {
        Some(path) => path.clone(),
        None => {
            let base_dir = args.definition.parent().unwrap_or(Path::new(""));
            let stem = args
                .definition
                .file_stem()
                .and_then(std::ffi::OsStr::to_str)
                .unwrap_or("report");
            definition.output_path(base_dir, stem)
        }
    };
    write_report(&definition, &template, &path)
}

pub fn run_samples(args: &SamplesArgs) -> Result<Vec<ReportSummary>> {
    let span = info_span!("samples", output_dir = %args.output_dir.display());
    let _guard = span.enter();

    let template = resolve_template(&args.template)?;
    sample_reports()
        .iter()
        .map(|definition| {
            let path = definition.output_path(&args.output_dir, "sample");
            write_report(definition, &template, &path)
        })
        .collect()
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let definition = load_definition(&args.definition)?;
    let template = ReportTemplate::default();
    let model = definition.model();
    model
        .validate()
        .with_context(|| format!("validate {}", args.definition.display()))?;
    let plan = TablixPlan::new(&model)
        .with_context(|| format!("plan {}", args.definition.display()))?;

    let mut names = NameRegistry::new();
    names.reserve(TITLE_TEXTBOX_NAME);
    names.reserve(&template.tablix.name);
    let header = plan.header_cells(&template.tablix, &mut names);
    let data = plan.data_cells(&template.tablix, &mut names);

    let mut widths = Table::new();
    widths.set_header(vec!["#", "Width"]);
    apply_table_style(&mut widths);
    for (index, width) in plan.column_widths().iter().enumerate() {
        widths.add_row(vec![(index + 1).to_string(), (*width).to_string()]);
    }
    println!("Dataset: {}", definition.dataset_name);
    println!("{widths}");

    let mut cells = Table::new();
    cells.set_header(vec!["Row", "Textbox", "Text", "Field", "Font", "Format"]);
    apply_table_style(&mut cells);
    for row in cell_rows("header", &header).chain(cell_rows("data", &data)) {
        cells.add_row(row);
    }
    println!("{cells}");
    Ok(())
}

fn resolve_template(args: &TemplateArgs) -> Result<ReportTemplate> {
    let template = load_template(args.template.as_deref())?;
    if args.stamp_now {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        return Ok(template.with_last_modified(now));
    }
    Ok(template)
}

fn write_report(
    definition: &ReportDefinition,
    template: &ReportTemplate,
    path: &Path,
) -> Result<ReportSummary> {
    let document = definition
        .build(template)
        .with_context(|| format!("build {}", path.display()))?;
    save_document(&document, path)?;
    info!(path = %path.display(), "report written");
    let report = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ReportSummary {
        report,
        dataset: definition.dataset_name.clone(),
        columns: definition.columns.len(),
        groups: definition.groups.len(),
        textboxes: document.textbox_names().len(),
        path: path.to_path_buf(),
    })
}
