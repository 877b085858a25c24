use std::path::PathBuf;

/// Outcome of writing one report.
#[derive(Debug)]
pub struct ReportSummary {
    pub report: String,
    pub dataset: String,
    pub columns: usize,
    pub groups: usize,
    pub textboxes: usize,
    pub path: PathBuf,
}
