use crate::domain::model::{Criterion, EvaluatedRecord, ReportFormat, CANONICAL_COLUMNS};
use crate::utils::error::{RankError, Result};

const SCORE_COLUMN: &str = "Criteria Met";

pub fn report_headers() -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = CANONICAL_COLUMNS.to_vec();
    headers.extend(Criterion::ALL.iter().map(|c| c.met_column()));
    headers.push(SCORE_COLUMN);
    headers
}

/// Formats a score the way the dashboard shows it, without float noise.
pub fn format_score(score: f64) -> String {
    let rounded = format!("{:.4}", score);
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn report_row(evaluated: &EvaluatedRecord) -> Vec<String> {
    let mut row: Vec<String> = evaluated.record.cells().to_vec();
    row.extend(
        Criterion::ALL
            .iter()
            .map(|c| evaluated.matches.get(*c).to_string()),
    );
    row.push(format_score(evaluated.criteria_met));
    row
}

fn render_delimited(ranked: &[EvaluatedRecord], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(report_headers())?;
    for evaluated in ranked {
        writer.write_record(report_row(evaluated))?;
    }

    let data = writer.into_inner().map_err(|e| RankError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| RankError::ConfigError {
        message: format!("Report is not valid UTF-8: {}", e),
    })
}

fn render_table(ranked: &[EvaluatedRecord]) -> String {
    let headers = report_headers();
    let rows: Vec<Vec<String>> = ranked.iter().map(report_row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.clone()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }

    lines.join("\n")
}

/// Renders a ranked view in the requested format.
pub fn render(ranked: &[EvaluatedRecord], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(ranked)),
        ReportFormat::Csv => render_delimited(ranked, b','),
        ReportFormat::Tsv => render_delimited(ranked, b'\t'),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(ranked)?),
    }
}

/// Expands `{timestamp}` in a filename pattern and appends the format's extension.
pub fn report_filename(pattern: &str, format: ReportFormat) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    format!(
        "{}.{}",
        pattern.replace("{timestamp}", &timestamp),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CriterionMatches, Metric, StartupRecord};

    fn ranked() -> Vec<EvaluatedRecord> {
        vec![
            EvaluatedRecord {
                record: StartupRecord {
                    name: "ByteBank".to_string(),
                    description: "Payments, cards".to_string(),
                    industry: "Fintech".to_string(),
                    stage: "Seed".to_string(),
                    arr: Metric::Value(1_200_000),
                    employees: Metric::Value(15),
                    location: "USA".to_string(),
                },
                matches: CriterionMatches {
                    industry: true,
                    stage: true,
                    arr: true,
                    employees: true,
                    location: true,
                },
                criteria_met: 0.5 + 1.0 + 1.5 + 1.0 + 0.2,
            },
            EvaluatedRecord {
                record: StartupRecord {
                    name: "PulsePredict".to_string(),
                    description: "Telehealth".to_string(),
                    industry: "Healthcare".to_string(),
                    stage: "Pre-Seed".to_string(),
                    arr: Metric::Value(9_000),
                    employees: Metric::Raw("one".to_string()),
                    location: "China".to_string(),
                },
                matches: CriterionMatches {
                    industry: true,
                    ..Default::default()
                },
                criteria_met: 0.5,
            },
        ]
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(4.2), "4.2");
        assert_eq!(format_score(0.1 + 0.2), "0.3");
        assert_eq!(format_score(4.0), "4");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_headers() {
        let headers = report_headers();
        assert_eq!(headers.len(), 13);
        assert_eq!(headers[0], "Startup Name");
        assert_eq!(headers[7], "Industry Met");
        assert_eq!(headers[12], "Criteria Met");
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&ranked(), ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Startup Name,Description,Industry"));
        assert_eq!(
            lines[1],
            "ByteBank,\"Payments, cards\",Fintech,Seed,1200000,15,USA,true,true,true,true,true,4.2"
        );
        assert!(lines[2].ends_with("one,China,true,false,false,false,false,0.5"));
    }

    #[test]
    fn test_render_tsv() {
        let tsv = render(&ranked(), ReportFormat::Tsv).unwrap();
        assert!(tsv.lines().next().unwrap().contains("Startup Name\tDescription"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&ranked(), ReportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["Startup Name"], "ByteBank");
        assert_eq!(parsed[1]["Number of Employees"], "one");
        assert_eq!(parsed[1]["Industry Met"], true);
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render(&ranked(), ReportFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Startup Name | "));
        assert!(lines[2].starts_with("ByteBank     | "));
        assert!(lines[3].starts_with("PulsePredict | "));
    }

    #[test]
    fn test_render_empty_table() {
        let table = render(&[], ReportFormat::Table).unwrap();
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_report_filename() {
        let name = report_filename("ranked_{timestamp}", ReportFormat::Csv);
        assert!(name.starts_with("ranked_"));
        assert!(name.ends_with(".csv"));
        assert!(!name.contains("{timestamp}"));

        assert_eq!(report_filename("latest", ReportFormat::Json), "latest.json");
    }
}
