use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gate_cli::pipeline::VerifyReport;
use gate_model::{PASS_THRESHOLD, TestRecord};

pub fn print_summary(report: &VerifyReport) {
    println!("Model version: {}", report.version);
    println!("Project: {}", report.project_key);
    println!("Test suite: {}", report.suite_id);
    if let Some(path) = &report.results_path {
        println!("Results: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Test"), header_cell("Status")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, record) in report.records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(record_name(record)),
            status_cell(record),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} tests", report.verdict.total)).add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{}/{} passed",
            report.verdict.passed, report.verdict.total
        ))
        .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let percent = report.verdict.pass_percent();
    let threshold_percent = PASS_THRESHOLD * 100.0;
    if report.verdict.verified {
        println!("{percent}% > {threshold_percent}% of the tests passed. The model is verified!");
    } else {
        println!(
            "{percent}% of the tests passed, not above {threshold_percent}%. The model is not verified."
        );
    }
}

fn record_name(record: &TestRecord) -> String {
    record
        .extra
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or("(unnamed test)")
        .to_string()
}

fn status_cell(record: &TestRecord) -> Cell {
    let status = record.status.as_str();
    if record.status.is_passed() {
        Cell::new(status).fg(Color::Green)
    } else {
        Cell::new(status).fg(Color::Red)
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
