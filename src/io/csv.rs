//! CSV boundary for the cleaned input table and the scored output table.
//!
//! Upstream cleaning normalizes column names to underscore form; the reader
//! applies the same convention so both conventions of the same file load
//! identically. Cells are classified once at parse time: empty, numeric, or
//! opaque text.

use std::io::Write;
use std::path::Path;

use crate::core::errors::Result;
use crate::core::{Cell, Dataset};

/// Read a cleaned regional table from a CSV file.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut dataset = Dataset::new(columns);
    for record in reader.records() {
        let record = record?;
        dataset.push_row(record.iter().map(parse_cell).collect());
    }
    Ok(dataset)
}

/// Write a table as CSV, headers first.
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(row.iter().map(render_cell))?;
    }
    writer.flush()?;
    Ok(())
}

fn normalize_header(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Cell::Number(value),
        Err(_) => Cell::Text(trimmed.to_string()),
    }
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(value) => value.to_string(),
        Cell::Text(value) => value.clone(),
        Cell::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write as _;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_and_classifies_cells() {
        let file = write_temp(indoc! {"
            State,District,AQI,Beds per 1000
            Alpha,North,52,
            Alpha,South,n/a,1.5
        "});
        let dataset = read_dataset(file.path()).unwrap();
        assert_eq!(
            dataset.columns(),
            &["State", "District", "AQI", "Beds_per_1000"]
        );
        assert_eq!(dataset.cell(0, 2), &Cell::Number(52.0));
        assert_eq!(dataset.cell(0, 3), &Cell::Empty);
        assert_eq!(dataset.cell(1, 2), &Cell::Text("n/a".to_string()));
        assert_eq!(dataset.cell(1, 3), &Cell::Number(1.5));
    }

    #[test]
    fn header_whitespace_is_normalized() {
        let file = write_temp("  AQI , Wind Speed \n80,3\n");
        let dataset = read_dataset(file.path()).unwrap();
        assert_eq!(dataset.columns(), &["AQI", "Wind_Speed"]);
    }

    #[test]
    fn round_trip_preserves_values() {
        let original = Dataset::from_rows(
            ["District", "AQI", "Beds_per_1000"],
            vec![
                vec![Cell::from("North"), Cell::from(52.5), Cell::Empty],
                vec![Cell::from("South"), Cell::from(104.0), Cell::from(1.5)],
            ],
        );
        let mut buffer = Vec::new();
        write_dataset(&original, &mut buffer).unwrap();

        let file = write_temp(std::str::from_utf8(&buffer).unwrap());
        let reloaded = read_dataset(file.path()).unwrap();
        assert_eq!(reloaded, original);
    }
}
