//! Built-in employee reports.
//!
//! Four variations over the same employee dataset, grouped by hire date with
//! the salary nested inside the group.

use std::path::PathBuf;

use rdl_model::{ColumnDefinition, GroupDefinition};

use crate::definition::ReportDefinition;

/// Dataset every sample report reads from.
pub const SAMPLE_DATASET_NAME: &str = "DataSetGetEmployeeReport";

const NAME_WIDTH: &str = "1.15278in";
const VALUE_WIDTH: &str = "1in";
const VALUE_FONT: &str = "Arial";

fn text_column(name: &str, display_name: &str, order: i32) -> ColumnDefinition {
    ColumnDefinition::new(name, display_name, name, NAME_WIDTH).with_order(order)
}

fn position(order: i32) -> ColumnDefinition {
    ColumnDefinition::new("Position", "Position", "Position", VALUE_WIDTH)
        .with_font_family(VALUE_FONT)
        .with_order(order)
}

fn salary(order: i32) -> ColumnDefinition {
    ColumnDefinition::new("Salary", "Salary", "Salary", VALUE_WIDTH)
        .with_font_family(VALUE_FONT)
        .with_format("C2")
        .with_order(order)
}

fn hire_date(order: i32) -> ColumnDefinition {
    ColumnDefinition::new("HireDate", "Hire Date", "HireDate", VALUE_WIDTH)
        .with_font_family(VALUE_FONT)
        .grouped()
        .with_order(order)
}

fn date_group(display_field: &str) -> GroupDefinition {
    GroupDefinition::new("DateGroup", "HireDate")
        .with_display_field(display_field)
        .with_nested(["Salary"])
        .with_order(1)
}

fn sample(number: u8, columns: Vec<ColumnDefinition>, display_field: &str) -> ReportDefinition {
    ReportDefinition {
        dataset_name: SAMPLE_DATASET_NAME.to_string(),
        output: Some(PathBuf::from(format!("User{number}Report.rdl"))),
        title: None,
        columns,
        groups: vec![date_group(display_field)],
    }
}

/// The four sample reports, in generation order.
pub fn sample_reports() -> Vec<ReportDefinition> {
    vec![
        sample(
            1,
            vec![
                text_column("FirstName", "First Name", 1),
                text_column("LastName", "Last Name", 2),
                text_column("Department", "Department", 3),
                position(4),
                salary(5),
                hire_date(6),
            ],
            "Salary",
        ),
        // Last name first
        sample(
            2,
            vec![
                text_column("FirstName", "First Name", 2),
                text_column("LastName", "Last Name", 1),
                text_column("Department", "Department", 3),
                position(4),
                salary(5),
                hire_date(6),
            ],
            "Salary",
        ),
        // Hire date before salary
        sample(
            3,
            vec![
                text_column("LastName", "Last Name", 1),
                text_column("FirstName", "First Name", 2),
                text_column("Department", "Department", 3),
                position(4),
                hire_date(5),
                salary(6),
            ],
            "HireDate",
        ),
        // Position hidden
        sample(
            4,
            vec![
                text_column("LastName", "Last Name", 1),
                text_column("FirstName", "First Name", 2),
                text_column("Department", "Department", 3),
                hire_date(4),
                salary(5),
                position(0).hidden(),
            ],
            "HireDate",
        ),
    ]
}
