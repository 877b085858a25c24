use thiserror::Error;

/// Configuration errors detected in a column/group model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A group lists a data field that no column binds to.
    #[error("group '{group}' references unknown data field '{data_field}'")]
    UnknownNestedColumn { group: String, data_field: String },

    /// More than one column binds to the same data field, so a nested
    /// reference cannot resolve to exactly one column.
    #[error("data field '{data_field}' is bound by {count} columns")]
    AmbiguousDataField { data_field: String, count: usize },

    #[error("duplicate column name '{name}'")]
    DuplicateColumnName { name: String },

    #[error("duplicate group name '{name}'")]
    DuplicateGroupName { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
