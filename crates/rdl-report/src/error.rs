//! Error types for report-definition generation.

use std::path::PathBuf;

use rdl_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The column/group model is inconsistent; no document is produced.
    #[error("invalid report model: {0}")]
    Model(#[from] ModelError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("serialized document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
