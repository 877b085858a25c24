//! Report item names.
//!
//! Every report item shares one name scope, so textbox names are claimed
//! through a registry that rejects repeats by suffixing `_2`, `_3`, ...

use std::collections::HashSet;

/// Role of a generated textbox; selects the name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    ColumnHeader,
    GroupHeader,
    ColumnData,
    GroupSummary,
    NestedData,
}

impl CellRole {
    pub fn prefix(self) -> &'static str {
        match self {
            CellRole::ColumnHeader => "Header",
            CellRole::GroupHeader => "GroupHeader",
            CellRole::ColumnData | CellRole::NestedData => "Data",
            CellRole::GroupSummary => "Group",
        }
    }
}

/// Replace characters that are not allowed in item names with `_`.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect()
}

/// Base name for a cell: the role prefix joined with its source identifiers.
pub fn cell_name(role: CellRole, parts: &[&str]) -> String {
    let mut name = role.prefix().to_string();
    for part in parts {
        name.push('_');
        name.push_str(&sanitize_identifier(part));
    }
    name
}

#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve fixed names (title, table) before generating cells.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    /// Claim `base`, or the first free `base_N` when it is already taken.
    pub fn claim(&mut self, base: String) -> String {
        if !self.taken.contains(&base) {
            self.taken.insert(base.clone());
            return base;
        }
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{base}_{suffix}");
            if !self.taken.contains(&candidate) {
                self.taken.insert(candidate.clone());
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_names_join_parts() {
        assert_eq!(cell_name(CellRole::ColumnHeader, &["FirstName"]), "Header_FirstName");
        assert_eq!(
            cell_name(CellRole::NestedData, &["DateGroup", "Salary"]),
            "Data_DateGroup_Salary"
        );
    }

    #[test]
    fn identifiers_are_sanitized() {
        assert_eq!(sanitize_identifier("Hire Date-2"), "Hire_Date_2");
    }

    #[test]
    fn repeated_claims_get_suffixes() {
        let mut names = NameRegistry::new();
        names.reserve("ReportTitle");
        assert_eq!(names.claim("Data_A".to_string()), "Data_A");
        assert_eq!(names.claim("Data_A".to_string()), "Data_A_2");
        assert_eq!(names.claim("Data_A".to_string()), "Data_A_3");
        assert_eq!(names.claim("ReportTitle".to_string()), "ReportTitle_2");
        assert_eq!(names.claim("Data_A_2".to_string()), "Data_A_2_2");
    }
}
