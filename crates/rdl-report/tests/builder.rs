//! Integration tests for report document assembly.

use std::collections::HashSet;

use proptest::prelude::*;

use rdl_model::{ColumnDefinition, GroupDefinition, ModelError};
use rdl_report::{
    Document, Element, Namespace, ReportBuilder, ReportError, ReportTemplate, to_xml_string,
};

const DATASET: &str = "DataSetGetEmployeeReport";

struct Cell {
    name: String,
    value: String,
    font: Option<String>,
    weight: Option<String>,
    format: Option<String>,
}

fn tablix(document: &Document) -> &Element {
    document.tablix().expect("tablix present")
}

fn widths(document: &Document) -> Vec<String> {
    tablix(document)
        .path(&["TablixBody", "TablixColumns"])
        .expect("tablix columns")
        .children_named("TablixColumn")
        .filter_map(|column| column.child("Width").and_then(Element::text))
        .collect()
}

fn row(document: &Document, index: usize) -> Vec<Cell> {
    let rows = tablix(document)
        .path(&["TablixBody", "TablixRows"])
        .expect("tablix rows");
    let row = rows.children_named("TablixRow").nth(index).expect("row");
    row.child("TablixCells")
        .expect("cells")
        .children_named("TablixCell")
        .map(|cell| {
            let textbox = cell.path(&["CellContents", "Textbox"]).expect("textbox");
            let run = textbox
                .path(&["Paragraphs", "Paragraph", "TextRuns", "TextRun"])
                .expect("text run");
            let style = run.child("Style");
            let prop = |name: &str| style.and_then(|s| s.child(name)).and_then(Element::text);
            Cell {
                name: textbox.attribute("Name").unwrap_or_default().to_string(),
                value: run.child("Value").and_then(Element::text).unwrap_or_default(),
                font: prop("FontFamily"),
                weight: prop("FontWeight"),
                format: prop("Format"),
            }
        })
        .collect()
}

fn header_row(document: &Document) -> Vec<Cell> {
    row(document, 0)
}

fn data_row(document: &Document) -> Vec<Cell> {
    row(document, 1)
}

fn hierarchy_members(document: &Document) -> Vec<&Element> {
    tablix(document)
        .path(&["TablixColumnHierarchy", "TablixMembers"])
        .expect("column hierarchy")
        .children_named("TablixMember")
        .collect()
}

fn values(cells: &[Cell]) -> Vec<&str> {
    cells.iter().map(|cell| cell.value.as_str()).collect()
}

fn scenario_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("FirstName", "First Name", "FirstName", "1.15278in").with_order(1),
        ColumnDefinition::new("LastName", "Last Name", "LastName", "1.15278in").with_order(2),
        ColumnDefinition::new("HireDate", "Hire Date", "HireDate", "1in")
            .with_order(3)
            .grouped(),
        ColumnDefinition::new("Salary", "Salary", "Salary", "1in")
            .with_order(4)
            .grouped()
            .with_format("C2"),
    ]
}

fn date_group() -> GroupDefinition {
    GroupDefinition::new("DateGroup", "HireDate")
        .with_order(1)
        .with_nested(["Salary"])
}

#[test]
fn grouped_scenario_builds_aligned_structures() {
    let document = ReportBuilder::default()
        .build(&scenario_columns(), &[date_group()], DATASET)
        .expect("build");

    assert_eq!(widths(&document), vec!["1.15278in", "1.15278in", "1in"]);

    let header = header_row(&document);
    assert_eq!(
        values(&header),
        vec!["First Name", "Last Name", "=Fields!HireDate.Value"]
    );

    let data = data_row(&document);
    assert_eq!(
        values(&data),
        vec![
            "=Fields!FirstName.Value",
            "=Fields!LastName.Value",
            "=Fields!HireDate.Value",
            "=Fields!Salary.Value",
        ]
    );
    assert_eq!(data[3].format.as_deref(), Some("C2"));

    insta::assert_debug_snapshot!(document.textbox_names(), @r###"
    [
        "ReportTitle",
        "Header_FirstName",
        "Header_LastName",
        "GroupHeader_DateGroup",
        "Data_FirstName",
        "Data_LastName",
        "Group_DateGroup",
        "Data_DateGroup_Salary",
    ]
    "###);
}

#[test]
fn missing_nested_column_fails_the_build() {
    let columns = vec![
        ColumnDefinition::new("FirstName", "First Name", "FirstName", "1in").with_order(1),
        ColumnDefinition::new("LastName", "Last Name", "LastName", "1in").with_order(2),
        ColumnDefinition::new("HireDate", "Hire Date", "HireDate", "1in")
            .with_order(3)
            .grouped(),
    ];
    let result = ReportBuilder::default().build(&columns, &[date_group()], DATASET);

    match result {
        Err(ReportError::Model(ModelError::UnknownNestedColumn { group, data_field })) => {
            assert_eq!(group, "DateGroup");
            assert_eq!(data_field, "Salary");
        }
        other => panic!("expected unknown nested column, got {other:?}"),
    }
}

#[test]
fn hidden_columns_stay_in_hierarchy_only() {
    let mut columns = scenario_columns();
    columns.push(ColumnDefinition::new("Position", "Position", "Position", "3in").hidden());
    let document = ReportBuilder::default()
        .build(&columns, &[date_group()], DATASET)
        .expect("build");

    assert!(!widths(&document).contains(&"3in".to_string()));
    assert!(header_row(&document).iter().all(|c| c.value != "Position"));
    assert!(
        data_row(&document)
            .iter()
            .all(|c| c.value != "=Fields!Position.Value")
    );

    // FirstName, LastName, Position, then the group member.
    let members = hierarchy_members(&document);
    assert_eq!(members.len(), 4);
    assert!(members[..3].iter().all(|m| m.children.is_empty()));
    assert!(members[3].child("Group").is_some());
}

#[test]
fn hidden_nested_columns_keep_their_hierarchy_member() {
    let mut columns = scenario_columns();
    columns[3].is_visible = false;
    let document = ReportBuilder::default()
        .build(&columns, &[date_group()], DATASET)
        .expect("build");

    assert_eq!(widths(&document).len(), 2);
    assert_eq!(data_row(&document).len(), 3);
    let group = hierarchy_members(&document)[2];
    assert_eq!(
        group
            .child("TablixMembers")
            .expect("nested members")
            .children_named("TablixMember")
            .count(),
        1
    );
}

#[test]
fn group_member_carries_group_and_sort_expressions() {
    let document = ReportBuilder::default()
        .build(&scenario_columns(), &[date_group()], DATASET)
        .expect("build");
    let member = hierarchy_members(&document)[2];
    let group = member.child("Group").expect("group");
    assert_eq!(group.attribute("Name"), Some("DateGroup"));
    assert_eq!(
        group
            .path(&["GroupExpressions", "GroupExpression"])
            .and_then(Element::text)
            .as_deref(),
        Some("=Fields!HireDate.Value")
    );
    assert_eq!(
        member
            .path(&["SortExpressions", "SortExpression", "Value"])
            .and_then(Element::text)
            .as_deref(),
        Some("=Fields!HireDate.Value")
    );
}

#[test]
fn group_summary_binds_display_field_when_set() {
    let columns = scenario_columns();
    let unset = ReportBuilder::default()
        .build(&columns, &[date_group()], DATASET)
        .expect("build");
    assert_eq!(data_row(&unset)[2].value, "=Fields!HireDate.Value");

    let with_display = date_group().with_display_field("Salary");
    let set = ReportBuilder::default()
        .build(&columns, &[with_display], DATASET)
        .expect("build");
    assert_eq!(data_row(&set)[2].value, "=Fields!Salary.Value");
    // The group header still shows the grouping field.
    assert_eq!(header_row(&set)[2].value, "=Fields!HireDate.Value");
}

#[test]
fn group_header_style_ignores_column_font() {
    let mut columns = scenario_columns();
    columns[2].font_family = Some("Tahoma".to_string());
    columns[0].font_family = Some("Verdana".to_string());
    let document = ReportBuilder::default()
        .build(&columns, &[date_group()], DATASET)
        .expect("build");

    let header = header_row(&document);
    assert_eq!(header[0].font.as_deref(), Some("Verdana"));
    assert_eq!(header[0].weight, None);
    assert_eq!(header[1].font.as_deref(), Some("Arial"));
    assert_eq!(header[2].font.as_deref(), Some("Arial"));
    assert_eq!(header[2].weight.as_deref(), Some("Bold"));

    let data = data_row(&document);
    assert_eq!(data[0].font.as_deref(), Some("Verdana"));
    assert_eq!(data[1].font.as_deref(), Some("Arial"));
}

#[test]
fn rows_follow_display_order_then_groups() {
    let columns = vec![
        ColumnDefinition::new("C", "C", "C", "1in").with_order(3),
        ColumnDefinition::new("A", "A", "A", "1in").with_order(1),
        ColumnDefinition::new("B", "B", "B", "1in").with_order(2),
        ColumnDefinition::new("X", "X", "X", "1in").grouped(),
        ColumnDefinition::new("Y", "Y", "Y", "1in").grouped(),
    ];
    let groups = vec![
        GroupDefinition::new("Late", "Y").with_order(2).with_nested(["Y"]),
        GroupDefinition::new("Early", "X").with_order(1).with_nested(["X"]),
    ];
    let document = ReportBuilder::default()
        .build(&columns, &groups, DATASET)
        .expect("build");

    assert_eq!(
        values(&header_row(&document)),
        vec!["A", "B", "C", "=Fields!X.Value", "=Fields!Y.Value"]
    );
    let names: Vec<String> = data_row(&document).into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Data_A",
            "Data_B",
            "Data_C",
            "Group_Early",
            "Data_Early_X",
            "Group_Late",
            "Data_Late_Y",
        ]
    );

    let groups_in_hierarchy: Vec<&str> = hierarchy_members(&document)
        .iter()
        .filter_map(|m| m.child("Group").and_then(|g| g.attribute("Name")))
        .collect();
    assert_eq!(groups_in_hierarchy, vec!["Early", "Late"]);
}

#[test]
fn column_shared_by_flat_pass_and_group_gets_distinct_names() {
    let columns = vec![
        ColumnDefinition::new("Salary", "Salary", "Salary", "1in"),
        ColumnDefinition::new("HireDate", "Hire Date", "HireDate", "1in").grouped(),
    ];
    let groups = vec![GroupDefinition::new("Salary", "HireDate").with_nested(["Salary"])];
    let document = ReportBuilder::default()
        .build(&columns, &groups, DATASET)
        .expect("build");

    let names = document.textbox_names();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
    assert!(names.contains(&"Data_Salary"));
    assert!(names.contains(&"Data_Salary_Salary"));
}

#[test]
fn colliding_names_are_suffixed() {
    let columns = vec![
        ColumnDefinition::new("A_B", "x", "F1", "1in"),
        ColumnDefinition::new("Z", "z", "B", "1in").grouped(),
    ];
    let groups = vec![GroupDefinition::new("A", "F1").with_nested(["B"])];
    let document = ReportBuilder::default()
        .build(&columns, &groups, DATASET)
        .expect("build");
    let names: Vec<String> = data_row(&document).into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Data_A_B", "Group_A", "Data_A_B_2"]);
}

#[test]
fn group_without_nested_columns_is_tolerated() {
    let columns = vec![ColumnDefinition::new("HireDate", "Hire Date", "HireDate", "1in").grouped()];
    let groups = vec![GroupDefinition::new("DateGroup", "HireDate")];
    let document = ReportBuilder::default()
        .build(&columns, &groups, DATASET)
        .expect("build");

    assert!(widths(&document).is_empty());
    assert_eq!(header_row(&document).len(), 1);
    assert_eq!(data_row(&document).len(), 1);
    let member = hierarchy_members(&document)[0];
    assert!(
        member
            .child("TablixMembers")
            .expect("nested members")
            .children
            .is_empty()
    );
}

#[test]
fn dataset_lists_every_column_with_resolved_types() {
    let mut columns = scenario_columns();
    columns.push(ColumnDefinition::new("Hidden", "Date", "Date", "1in").hidden());
    let document = ReportBuilder::default()
        .build(&columns, &[date_group()], DATASET)
        .expect("build");

    let data_set = document.root.path(&["DataSets", "DataSet"]).expect("data set");
    assert_eq!(data_set.attribute("Name"), Some(DATASET));
    let fields: Vec<(String, String)> = data_set
        .child("Fields")
        .expect("fields")
        .children_named("Field")
        .map(|field| {
            let type_name = field.child("TypeName").expect("type name");
            assert_eq!(type_name.namespace, Namespace::Designer);
            (
                field.attribute("Name").unwrap_or_default().to_string(),
                type_name.text().unwrap_or_default(),
            )
        })
        .collect();
    let expected: Vec<(String, String)> = [
        ("FirstName", "System.String"),
        ("LastName", "System.String"),
        ("HireDate", "System.String"),
        ("Salary", "System.Decimal"),
        ("Date", "System.DateTime"),
    ]
    .iter()
    .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
    .collect();
    assert_eq!(fields, expected);
    assert_eq!(
        data_set
            .path(&["Query", "DataSourceName"])
            .and_then(Element::text)
            .as_deref(),
        Some("DataSGetEmployeeReport")
    );
}

#[test]
fn configured_field_type_keeps_salary_decimal() {
    let template: ReportTemplate =
        toml::from_str("[field_types.types]\nFirstName = \"System.Char\"\n").expect("template");
    let document = ReportBuilder::new(template)
        .build(&scenario_columns(), &[date_group()], DATASET)
        .expect("build");

    let fields = document
        .root
        .path(&["DataSets", "DataSet", "Fields"])
        .expect("fields");
    let type_of = |name: &str| {
        fields
            .children_named("Field")
            .find(|field| field.attribute("Name") == Some(name))
            .and_then(|field| field.child("TypeName"))
            .and_then(Element::text)
    };
    assert_eq!(type_of("FirstName").as_deref(), Some("System.Char"));
    assert_eq!(type_of("Salary").as_deref(), Some("System.Decimal"));
    assert_eq!(type_of("LastName").as_deref(), Some("System.String"));
}

#[test]
fn template_values_flow_into_document() {
    let template = ReportTemplate::default()
        .with_title("Headcount")
        .with_query_text("SELECT 1");
    let document = ReportBuilder::new(template)
        .build(&scenario_columns(), &[date_group()], DATASET)
        .expect("build");

    let xml = to_xml_string(&document).expect("serialize");
    assert!(xml.contains("<Value>Headcount</Value>"));
    assert!(xml.contains("<CommandText>SELECT 1</CommandText>"));
    assert!(xml.contains("<DataSetName>DataSetGetEmployeeReport</DataSetName>"));
    assert!(xml.contains("<am:LastModifiedTimestamp>2025-01-30T19:18:16.1397756Z</am:LastModifiedTimestamp>"));
    assert!(xml.contains("<df:DefaultFontFamily>Segoe UI</df:DefaultFontFamily>"));
}

#[test]
fn builds_are_deterministic() {
    let builder = ReportBuilder::default();
    let columns = scenario_columns();
    let groups = vec![date_group()];
    let first = builder.build(&columns, &groups, DATASET).expect("build");
    let second = builder.build(&columns, &groups, DATASET).expect("build");
    assert_eq!(first, second);
    assert_eq!(
        to_xml_string(&first).expect("serialize"),
        to_xml_string(&second).expect("serialize")
    );
}

#[test]
fn builder_is_shareable_across_threads() {
    let builder = ReportBuilder::default();
    let columns = scenario_columns();
    let groups = vec![date_group()];
    let documents: Vec<Document> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| builder.build(&columns, &groups, DATASET).expect("build")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("join"))
            .collect()
    });
    assert!(documents.windows(2).all(|pair| pair[0] == pair[1]));
}

fn arb_report() -> impl Strategy<Value = (Vec<ColumnDefinition>, Vec<GroupDefinition>)> {
    let columns = prop::collection::vec((-3i32..3, any::<bool>(), any::<bool>()), 0..10);
    let groups = prop::collection::vec((-3i32..3, prop::collection::vec(0usize..10, 0..4)), 0..4);
    (columns, groups).prop_map(|(column_specs, group_specs)| {
        let columns: Vec<ColumnDefinition> = column_specs
            .iter()
            .enumerate()
            .map(|(idx, (order, visible, grouped))| {
                let name = format!("Col{idx}");
                let mut column =
                    ColumnDefinition::new(&name, &name, format!("F{idx}"), format!("{idx}in"))
                        .with_order(*order);
                column.is_visible = *visible;
                column.is_grouped = *grouped;
                column
            })
            .collect();
        let groups = group_specs
            .iter()
            .enumerate()
            .map(|(idx, (order, nested))| {
                let fields: Vec<String> = if columns.is_empty() {
                    Vec::new()
                } else {
                    nested
                        .iter()
                        .map(|n| format!("F{}", n % columns.len()))
                        .collect()
                };
                GroupDefinition::new(format!("G{idx}"), "F0")
                    .with_order(*order)
                    .with_nested(fields)
            })
            .collect();
        (columns, groups)
    })
}

proptest! {
    #[test]
    fn structure_counts_stay_consistent((columns, groups) in arb_report()) {
        let document = ReportBuilder::default()
            .build(&columns, &groups, DATASET)
            .expect("build");

        let flat = columns.iter().filter(|c| !c.is_grouped && c.is_visible).count();
        let visible_nested: usize = groups
            .iter()
            .flat_map(|g| g.nested_columns.iter())
            .filter(|field| {
                columns
                    .iter()
                    .find(|c| &c.data_field == *field)
                    .is_some_and(|c| c.is_visible)
            })
            .count();

        prop_assert_eq!(widths(&document).len(), flat + visible_nested);
        prop_assert_eq!(header_row(&document).len(), flat + groups.len());
        prop_assert_eq!(data_row(&document).len(), flat + groups.len() + visible_nested);
        prop_assert_eq!(
            hierarchy_members(&document).len(),
            columns.iter().filter(|c| !c.is_grouped).count() + groups.len()
        );

        let names = document.textbox_names();
        let unique: HashSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(unique.len(), names.len());
    }
}
