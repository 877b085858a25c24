//! CLI library components for the report-definition generator.

pub mod definition;
pub mod logging;
pub mod samples;
