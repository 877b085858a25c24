//! Ordering and lookup over a borrowed column/group model.

use std::collections::HashSet;

use crate::column::{ColumnDefinition, GroupDefinition};
use crate::error::{ModelError, Result};

/// Read-only view over the columns and groups of one report.
///
/// All orderings are stable: entries sharing a `display_order` keep the
/// sequence in which the caller supplied them.
#[derive(Debug, Clone, Copy)]
pub struct ReportModel<'a> {
    columns: &'a [ColumnDefinition],
    groups: &'a [GroupDefinition],
}

/// A group together with the columns its nested entries resolve to.
#[derive(Debug, Clone)]
pub struct ResolvedGroup<'a> {
    pub group: &'a GroupDefinition,
    /// One entry per `nested_columns` item, in listed order.
    pub nested: Vec<&'a ColumnDefinition>,
}

impl<'a> ResolvedGroup<'a> {
    /// Nested columns that render cells; hidden ones are skipped.
    pub fn visible_nested(&self) -> impl Iterator<Item = &'a ColumnDefinition> + '_ {
        self.nested.iter().copied().filter(|column| column.is_visible)
    }
}

impl<'a> ReportModel<'a> {
    pub fn new(columns: &'a [ColumnDefinition], groups: &'a [GroupDefinition]) -> Self {
        Self { columns, groups }
    }

    pub fn columns(&self) -> &'a [ColumnDefinition] {
        self.columns
    }

    pub fn groups(&self) -> &'a [GroupDefinition] {
        self.groups
    }

    /// Non-grouped visible columns in ascending display order.
    pub fn flat_columns(&self) -> Vec<&'a ColumnDefinition> {
        let mut ordered: Vec<&ColumnDefinition> = self
            .columns
            .iter()
            .filter(|column| !column.is_grouped && column.is_visible)
            .collect();
        ordered.sort_by_key(|column| column.display_order);
        ordered
    }

    /// Every non-grouped column in the order supplied, hidden ones included.
    pub fn hierarchy_columns(&self) -> impl Iterator<Item = &'a ColumnDefinition> {
        self.columns.iter().filter(|column| !column.is_grouped)
    }

    /// Groups in ascending display order.
    pub fn ordered_groups(&self) -> Vec<&'a GroupDefinition> {
        let mut ordered: Vec<&GroupDefinition> = self.groups.iter().collect();
        ordered.sort_by_key(|group| group.display_order);
        ordered
    }

    /// Find the single column bound to `data_field` on behalf of `group`.
    pub fn column_by_data_field(
        &self,
        group: &GroupDefinition,
        data_field: &str,
    ) -> Result<&'a ColumnDefinition> {
        let mut matches = self
            .columns
            .iter()
            .filter(|column| column.data_field == data_field);
        let first = matches.next().ok_or_else(|| ModelError::UnknownNestedColumn {
            group: group.group_name.clone(),
            data_field: data_field.to_string(),
        })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(ModelError::AmbiguousDataField {
                data_field: data_field.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }

    /// Resolve every nested entry of `group`.
    pub fn resolve_nested(&self, group: &'a GroupDefinition) -> Result<ResolvedGroup<'a>> {
        let nested = group
            .nested_columns
            .iter()
            .map(|field| self.column_by_data_field(group, field))
            .collect::<Result<Vec<_>>>()?;
        Ok(ResolvedGroup { group, nested })
    }

    /// Groups in display order with their nested columns resolved.
    pub fn resolved_groups(&self) -> Result<Vec<ResolvedGroup<'a>>> {
        self.ordered_groups()
            .into_iter()
            .map(|group| self.resolve_nested(group))
            .collect()
    }

    /// Check name uniqueness and that every nested reference resolves.
    pub fn validate(&self) -> Result<()> {
        let mut column_names = HashSet::new();
        for column in self.columns {
            if !column_names.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumnName {
                    name: column.name.clone(),
                });
            }
        }
        let mut group_names = HashSet::new();
        for group in self.groups {
            if !group_names.insert(group.group_name.as_str()) {
                return Err(ModelError::DuplicateGroupName {
                    name: group.group_name.clone(),
                });
            }
            for field in &group.nested_columns {
                self.column_by_data_field(group, field)?;
            }
        }
        Ok(())
    }
}
