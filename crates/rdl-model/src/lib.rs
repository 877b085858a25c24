//! Schema model for report-definition generation.
//!
//! The types here describe *what* a report shows: the columns bound to data
//! fields and the groups that bucket rows by one field. They carry no
//! rendering behavior; `rdl-report` turns them into a document.

pub mod column;
pub mod error;
pub mod expression;
pub mod model;

pub use column::{ColumnDefinition, GroupDefinition};
pub use error::{ModelError, Result};
pub use expression::Expression;
pub use model::{ReportModel, ResolvedGroup};
