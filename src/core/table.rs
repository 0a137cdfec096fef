use crate::domain::model::{Metric, StartupRecord, CANONICAL_COLUMNS};
use crate::utils::error::{RankError, Result};
use std::io::Read;

/// A columnar dataset as read from a spreadsheet export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Reads CSV with a header row. Short rows are padded with empty cells.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
            rows.push(row);
        }

        tracing::debug!("Read {} rows with columns {:?}", rows.len(), headers);
        Ok(Self { headers, rows })
    }

    pub fn from_csv_bytes(data: &[u8]) -> Result<Self> {
        // UTF-8 BOM from spreadsheet exports
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        Self::from_csv_reader(data)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn missing_columns(&self) -> Vec<String> {
        CANONICAL_COLUMNS
            .iter()
            .filter(|column| self.column_index(column).is_none())
            .map(|column| column.to_string())
            .collect()
    }

    /// Projects every row onto the canonical columns. Fails without producing
    /// any record when a canonical column is absent.
    pub fn to_records(&self) -> Result<Vec<StartupRecord>> {
        let missing = self.missing_columns();
        if !missing.is_empty() {
            return Err(RankError::MalformedImport {
                required: CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
                missing,
            });
        }

        let mut indices = [0usize; 7];
        for (slot, column) in indices.iter_mut().zip(CANONICAL_COLUMNS) {
            *slot = self.column_index(column).unwrap_or_default();
        }

        let records = self
            .rows
            .iter()
            .map(|row| {
                let cell = |i: usize| row.get(indices[i]).cloned().unwrap_or_default();
                StartupRecord {
                    name: cell(0),
                    description: cell(1),
                    industry: cell(2),
                    stage: cell(3),
                    arr: Metric::from_cell(&cell(4)),
                    employees: Metric::from_cell(&cell(5)),
                    location: cell(6),
                }
            })
            .collect();

        Ok(records)
    }
}
