use analytics::{CircadianProfile, Summary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn number(value: String) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Headline metrics: readings, mean, GMI and %CV.
pub fn metrics_table(summary: &Summary) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table
        .add_row(vec![Cell::new("Total Readings"), number(summary.total_readings.to_string())])
        .add_row(vec![
            Cell::new("Mean Glucose"),
            number(format!("{:.1} mg/dL", summary.mean_glucose)),
        ])
        .add_row(vec![
            Cell::new("Glucose Management Indicator (GMI)"),
            number(format!("{:.1}%", summary.gmi())),
        ])
        .add_row(vec![
            Cell::new("Coefficient of Variation (%CV)"),
            number(format!("{:.1}%", summary.coefficient_of_variation)),
        ]);
    table
}

/// One row per glucose band with its share and the equivalent time per day.
pub fn time_in_range_table(summary: &Summary) -> Table {
    let mut table = new_table(vec!["Range", "Percent", "Time per Day"]);
    for segment in summary.range_segments() {
        table.add_row(vec![
            Cell::new(&segment.label),
            number(format!("{:.1}%", segment.percent)),
            number(segment.duration.to_string()),
        ]);
    }
    table
}

/// One row per time-of-day key present in the data.
pub fn profile_table(profile: &CircadianProfile) -> Table {
    let mut table = new_table(vec!["Time", "Readings", "P5", "P25", "Median", "P75", "P95"]);
    for point in &profile.points {
        table.add_row(vec![
            Cell::new(point.key.to_string()),
            number(point.readings.to_string()),
            number(format!("{:.1}", point.p5)),
            number(format!("{:.1}", point.p25)),
            number(format!("{:.1}", point.median)),
            number(format!("{:.1}", point.p75)),
            number(format!("{:.1}", point.p95)),
        ]);
    }
    table
}
