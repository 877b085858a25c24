//! Tablix generation.
//!
//! The column width list, the column hierarchy and both rows are all derived
//! from one [`TablixPlan`]. Non-grouped columns come first, then each group
//! with its nested columns, so cells stay aligned with their columns.
//!
//! The column hierarchy keeps every non-grouped column, hidden ones included,
//! and one member per nested entry regardless of visibility. The other three
//! structures skip hidden columns, so with hidden columns present the member
//! count and the width count differ.

use rdl_model::{ColumnDefinition, Expression, ReportModel, ResolvedGroup};
use tracing::debug;

use crate::document::Element;
use crate::error::Result;
use crate::naming::{CellRole, NameRegistry, cell_name};
use crate::template::{FALLBACK_FONT_FAMILY, ReportTemplate, TablixLayout};
use crate::textbox::{CellSpec, RunStyle, borderless_style, tablix_cell};

/// Ordered view of the model that every table structure is generated from.
#[derive(Debug, Clone)]
pub struct TablixPlan<'a> {
    /// Non-grouped visible columns by display order.
    pub flat: Vec<&'a ColumnDefinition>,
    /// Non-grouped columns in supplied order, hidden ones included.
    pub hierarchy: Vec<&'a ColumnDefinition>,
    /// Groups by display order with resolved nested columns.
    pub groups: Vec<ResolvedGroup<'a>>,
}

impl<'a> TablixPlan<'a> {
    /// Order the model. Fails when a nested column does not resolve.
    pub fn new(model: &ReportModel<'a>) -> Result<Self> {
        Ok(Self {
            flat: model.flat_columns(),
            hierarchy: model.hierarchy_columns().collect(),
            groups: model.resolved_groups()?,
        })
    }

    /// Width of every rendered column, in column order.
    pub fn column_widths(&self) -> Vec<&'a str> {
        let flat = self.flat.iter().map(|column| column.width.as_str());
        let nested = self
            .groups
            .iter()
            .flat_map(|group| group.visible_nested())
            .map(|column| column.width.as_str());
        flat.chain(nested).collect()
    }

    pub fn header_cells(&self, layout: &TablixLayout, names: &mut NameRegistry) -> Vec<CellSpec> {
        let mut cells = Vec::with_capacity(self.flat.len() + self.groups.len());
        for column in &self.flat {
            cells.push(CellSpec {
                name: names.claim(cell_name(CellRole::ColumnHeader, &[column.name.as_str()])),
                value: Expression::literal(column.display_name.as_str()),
                style: RunStyle::font(column_font(column)),
            });
        }
        for resolved in &self.groups {
            let group = resolved.group;
            cells.push(CellSpec {
                name: names.claim(cell_name(CellRole::GroupHeader, &[group.group_name.as_str()])),
                value: Expression::field(group.column_name.as_str()),
                style: RunStyle::font(layout.group_font_family.as_str())
                    .with_size(layout.group_header_font_size.as_str())
                    .with_weight(layout.group_header_font_weight.as_str()),
            });
        }
        cells
    }

    pub fn data_cells(&self, layout: &TablixLayout, names: &mut NameRegistry) -> Vec<CellSpec> {
        let mut cells = Vec::new();
        for column in &self.flat {
            let name = names.claim(cell_name(CellRole::ColumnData, &[column.name.as_str()]));
            cells.push(data_cell(name, column));
        }
        for resolved in &self.groups {
            let group = resolved.group;
            cells.push(CellSpec {
                name: names.claim(cell_name(CellRole::GroupSummary, &[group.group_name.as_str()])),
                value: Expression::field(group.display_field()),
                style: RunStyle::font(layout.group_font_family.as_str()),
            });
            for column in resolved.visible_nested() {
                let name = names.claim(cell_name(
                    CellRole::NestedData,
                    &[group.group_name.as_str(), column.data_field.as_str()],
                ));
                cells.push(data_cell(name, column));
            }
        }
        cells
    }
}

fn column_font(column: &ColumnDefinition) -> &str {
    column
        .font_family
        .as_deref()
        .filter(|family| !family.is_empty())
        .unwrap_or(FALLBACK_FONT_FAMILY)
}

fn data_cell(name: String, column: &ColumnDefinition) -> CellSpec {
    CellSpec {
        name,
        value: Expression::field(column.data_field.as_str()),
        style: RunStyle::font(column_font(column)).with_format(column.format.as_deref()),
    }
}

/// Build the `Tablix` report item.
pub fn build_tablix(
    plan: &TablixPlan<'_>,
    template: &ReportTemplate,
    dataset_name: &str,
    names: &mut NameRegistry,
) -> Element {
    let layout = &template.tablix;
    let header = plan.header_cells(layout, names);
    let data = plan.data_cells(layout, names);
    debug!(
        widths = plan.column_widths().len(),
        header_cells = header.len(),
        data_cells = data.len(),
        groups = plan.groups.len(),
        "planned tablix"
    );

    let columns = Element::new("TablixColumns").with_children(
        plan.column_widths()
            .into_iter()
            .map(|width| Element::new("TablixColumn").with_child(Element::text_element("Width", width))),
    );
    let rows = Element::new("TablixRows")
        .with_child(tablix_row(&layout.header_row_height, &header, template))
        .with_child(tablix_row(&layout.data_row_height, &data, template));

    Element::new("Tablix")
        .with_attribute("Name", layout.name.as_str())
        .with_child(Element::new("TablixBody").with_child(columns).with_child(rows))
        .with_child(column_hierarchy(plan))
        .with_child(row_hierarchy())
        .with_child(Element::text_element("DataSetName", dataset_name))
        .with_child(Element::text_element("Top", layout.top.as_str()))
        .with_child(Element::text_element("Left", layout.left.as_str()))
        .with_child(Element::text_element("Height", layout.height.as_str()))
        .with_child(Element::text_element("Width", layout.width.as_str()))
        .with_child(Element::text_element("ZIndex", layout.z_index.as_str()))
        .with_child(borderless_style())
}

fn tablix_row(height: &str, cells: &[CellSpec], template: &ReportTemplate) -> Element {
    Element::new("TablixRow")
        .with_child(Element::text_element("Height", height))
        .with_child(
            Element::new("TablixCells").with_children(
                cells
                    .iter()
                    .map(|cell| tablix_cell(cell, &template.cell_style)),
            ),
        )
}

fn column_hierarchy(plan: &TablixPlan<'_>) -> Element {
    let mut members = Element::new("TablixMembers");
    for _ in &plan.hierarchy {
        members.push(Element::new("TablixMember"));
    }
    for resolved in &plan.groups {
        members.push(group_member(resolved));
    }
    Element::new("TablixColumnHierarchy").with_child(members)
}

fn group_member(resolved: &ResolvedGroup<'_>) -> Element {
    let group = resolved.group;
    let key = Expression::field(group.column_name.as_str()).to_string();
    Element::new("TablixMember")
        .with_child(
            Element::new("Group")
                .with_attribute("Name", group.group_name.as_str())
                .with_child(
                    Element::new("GroupExpressions")
                        .with_child(Element::text_element("GroupExpression", key.as_str())),
                ),
        )
        .with_child(
            Element::new("SortExpressions").with_child(
                Element::new("SortExpression").with_child(Element::text_element("Value", key)),
            ),
        )
        .with_child(
            Element::new("TablixMembers").with_children(
                group
                    .nested_columns
                    .iter()
                    .map(|_| Element::new("TablixMember")),
            ),
        )
}

fn row_hierarchy() -> Element {
    Element::new("TablixRowHierarchy").with_child(
        Element::new("TablixMembers")
            .with_child(
                Element::new("TablixMember")
                    .with_child(Element::text_element("KeepWithGroup", "After")),
            )
            .with_child(
                Element::new("TablixMember")
                    .with_child(Element::new("Group").with_attribute("Name", "Details")),
            ),
    )
}
