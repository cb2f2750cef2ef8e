use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use serde::Serialize;

use crate::AnalysisReport;
use crate::error::AnalysisError;

/// Output format for exported result tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Single human-readable summary file.
    Txt,
    Csv,
    Tsv,
    Json,
}

/// Neutralize cells that spreadsheets would interpret as formulas by
/// prefixing a single quote. Cells already carrying one are left alone.
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{cell}"),
        _ => cell,
    }
}

/// Write every result table to `out_dir` as
/// `<stem>_<YYYYmmdd_HHMMSS>_<table>.<ext>`; the txt format writes one
/// `_summary.txt` instead. Returns the paths written.
pub fn export_report(
    report: &AnalysisReport,
    summary: &str,
    stem: &str,
    out_dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, AnalysisError> {
    let local: DateTime<Local> = Local::now();
    let stamp = local.format("%Y%m%d_%H%M%S").to_string();
    let target = |table: &str, ext: &str| out_dir.join(format!("{stem}_{stamp}_{table}.{ext}"));

    let mut written = Vec::new();
    match format {
        ExportFormat::Txt => {
            let path = target("summary", "txt");
            write_text(&path, summary)?;
            written.push(path);
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let (delim, ext) = if format == ExportFormat::Csv {
                (b',', "csv")
            } else {
                (b'\t', "tsv")
            };
            for (table, header, rows) in tables(report) {
                let path = target(table, ext);
                write_delimited(&path, delim, &header, rows)?;
                written.push(path);
            }
        }
        ExportFormat::Json => {
            written.push(write_json(&target("network", "json"), &report.network)?);
            written.push(write_json(&target("mentions", "json"), &report.mentions)?);
            written.push(write_json(&target("terms", "json"), &report.terms)?);
            written.push(write_json(
                &target("categories", "json"),
                &report.categories.categories,
            )?);
            written.push(write_json(&target("numeric_split", "json"), &report.numeric)?);
            written.push(write_json(&target("length_hist", "json"), &report.lengths)?);
        }
    }
    Ok(written)
}

type Table = (&'static str, Vec<&'static str>, Vec<Vec<String>>);

fn tables(report: &AnalysisReport) -> Vec<Table> {
    let nodes = report
        .network
        .nodes
        .iter()
        .map(|n| vec![n.id.clone(), n.count.to_string()])
        .collect();
    let links = report
        .network
        .links
        .iter()
        .map(|l| vec![l.source.clone(), l.target.clone(), l.weight.to_string()])
        .collect();
    let ranked = |rows: &[crate::RankedItem]| {
        rows.iter()
            .map(|r| vec![r.item.clone(), r.count.to_string()])
            .collect::<Vec<_>>()
    };
    let categories = report
        .categories
        .categories
        .iter()
        .map(|c| {
            vec![
                c.label.to_string(),
                c.count.to_string(),
                format!("{:.2}", c.percentage),
            ]
        })
        .collect();
    let numeric = vec![
        vec![
            "With Numbers/Statistics".to_string(),
            report.numeric.with_numbers.to_string(),
        ],
        vec![
            "Without Numbers".to_string(),
            report.numeric.without_numbers.to_string(),
        ],
    ];
    let bins = report
        .lengths
        .bins
        .iter()
        .map(|b| {
            vec![
                format!("{}", b.lower),
                format!("{}", b.upper),
                b.count.to_string(),
            ]
        })
        .collect();

    vec![
        ("network_nodes", vec!["id", "count"], nodes),
        ("network_links", vec!["source", "target", "weight"], links),
        ("mentions", vec!["item", "count"], ranked(&report.mentions)),
        ("terms", vec!["item", "count"], ranked(&report.terms)),
        (
            "categories",
            vec!["label", "count", "percentage"],
            categories,
        ),
        ("numeric_split", vec!["category", "count"], numeric),
        ("length_hist", vec!["lower", "upper", "count"], bins),
    ]
}

fn write_text(path: &Path, content: &str) -> Result<(), AnalysisError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn write_delimited(
    path: &Path,
    delimiter: u8,
    header: &[&str],
    rows: Vec<Vec<String>>,
) -> Result<(), AnalysisError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row.into_iter().map(csv_safe_cell))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf, AnalysisError> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(path, &json)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_cells_are_neutralized() {
        assert_eq!(csv_safe_cell("=SUM(A1)".into()), "'=SUM(A1)");
        assert_eq!(csv_safe_cell("@cmd".into()), "'@cmd");
        assert_eq!(csv_safe_cell("+1".into()), "'+1");
        assert_eq!(csv_safe_cell("-1".into()), "'-1");
    }

    #[test]
    fn safe_cells_pass_through_unchanged() {
        assert_eq!(csv_safe_cell("normal".into()), "normal");
        assert_eq!(csv_safe_cell("'@already".into()), "'@already");
        assert_eq!(csv_safe_cell(String::new()), "");
    }
}
