//! Cell and group values evaluated by the rendering host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a textbox run, a group expression or a sort expression.
///
/// Field references render as `=Fields!<name>.Value`, which the host
/// evaluates per row at render time. Literals are written as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expression {
    Literal(String),
    Field(String),
}

impl Expression {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// The bound field name, if this is a field reference.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Field(name) => write!(f, "=Fields!{name}.Value"),
        }
    }
}
