use crate::core::{Cell, Dataset};
use crate::risk::{OVERALL_AVG_RISK, PHRS_COLUMNS};
use colored::*;
use std::cmp::Ordering;
use std::io::Write;

pub trait OutputWriter {
    fn write_dataset(&mut self, dataset: &Dataset) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dataset(&mut self, dataset: &Dataset) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(dataset)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_dataset(&mut self, dataset: &Dataset) -> anyhow::Result<()> {
        crate::io::csv::write_dataset(dataset, &mut self.writer)?;
        Ok(())
    }
}

/// Ranked terminal view over `Overall_Avg_Risk`, the same ordering the
/// downstream chart tooling consumes.
pub struct TerminalWriter {
    top: Option<usize>,
    tail: Option<usize>,
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self {
            top: None,
            tail: None,
        }
    }

    pub fn with_limits(top: Option<usize>, tail: Option<usize>) -> Self {
        Self { top, tail }
    }
}

impl OutputWriter for TerminalWriter {
    fn write_dataset(&mut self, dataset: &Dataset) -> anyhow::Result<()> {
        print_header();
        print_ranking(dataset, self.top, self.tail)?;
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Public Health Risk Ranking".bold().blue());
    println!("{}", "==========================".blue());
    println!();
}

fn print_ranking(dataset: &Dataset, top: Option<usize>, tail: Option<usize>) -> anyhow::Result<()> {
    let overall_index = dataset
        .column_index(OVERALL_AVG_RISK)
        .ok_or_else(|| anyhow::anyhow!("dataset has no {OVERALL_AVG_RISK} column"))?;
    let overall = dataset.numeric_column(overall_index)?;

    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.sort_by(|&a, &b| overall[b].partial_cmp(&overall[a]).unwrap_or(Ordering::Equal));
    let selected = select_rows(order, top, tail);

    let group_columns: Vec<Option<usize>> = PHRS_COLUMNS
        .iter()
        .map(|&name| dataset.column_index(name))
        .collect();

    for (position, &row) in selected.iter().enumerate() {
        let groups: Vec<String> = PHRS_COLUMNS
            .iter()
            .zip(&group_columns)
            .filter_map(|(&name, &index)| {
                index.map(|index| {
                    let value = dataset.cell(row, index).as_number().unwrap_or(f64::NAN);
                    format!("{}: {value:.1}", short_group_name(name))
                })
            })
            .collect();
        println!(
            "{:>4}. {:<32} {}  [{}]",
            position + 1,
            region_label(dataset, row),
            format_score(overall[row]),
            groups.join(", ")
        );
    }
    println!();
    Ok(())
}

/// Rows to show: highest-risk first, optionally limited to the head or the
/// tail of the ranking.
fn select_rows(order: Vec<usize>, top: Option<usize>, tail: Option<usize>) -> Vec<usize> {
    match (top, tail) {
        (Some(n), _) => order.into_iter().take(n).collect(),
        (None, Some(n)) => {
            let skip = order.len().saturating_sub(n);
            order.into_iter().skip(skip).collect()
        }
        (None, None) => order,
    }
}

fn short_group_name(column: &str) -> &'static str {
    match column {
        "PHRS_Male_NonSmoker" => "M",
        "PHRS_Female_NonSmoker" => "F",
        "PHRS_Male_Smoker" => "M-smk",
        "PHRS_Female_Smoker" => "F-smk",
        _ => "?",
    }
}

fn region_label(dataset: &Dataset, row: usize) -> String {
    let mut parts = Vec::new();
    for name in ["State", "District"] {
        if let Some(index) = dataset.column_index(name) {
            match dataset.cell(row, index) {
                Cell::Text(value) => parts.push(value.clone()),
                Cell::Number(value) => parts.push(value.to_string()),
                Cell::Empty => {}
            }
        }
    }
    if parts.is_empty() {
        format!("region {row}")
    } else {
        parts.join(" / ")
    }
}

fn format_score(score: f64) -> String {
    let text = format!("{score:.1}");
    if score >= 67.0 {
        text.red().to_string()
    } else if score >= 34.0 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}
