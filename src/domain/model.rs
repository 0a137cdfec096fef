use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical column names, in canonical order, for import and report output.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    "Startup Name",
    "Description",
    "Industry",
    "Stage",
    "ARR",
    "Number of Employees",
    "Location",
];

/// An integer-valued field (ARR, employee count).
///
/// Imported rows may carry text that is not a number; it is kept verbatim so
/// reports show what was imported, and evaluation treats it as not matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Value(i64),
    Raw(String),
}

impl Metric {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().parse::<i64>() {
            Ok(value) => Metric::Value(value),
            Err(_) => Metric::Raw(cell.to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Metric::Value(value) => Some(*value),
            Metric::Raw(text) => text.trim().parse().ok(),
        }
    }
}

impl From<u64> for Metric {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Metric::Value)
            .unwrap_or_else(|_| Metric::Raw(value.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(value) => write!(f, "{}", value),
            Metric::Raw(text) => f.write_str(text),
        }
    }
}

/// One candidate company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupRecord {
    #[serde(rename = "Startup Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Stage")]
    pub stage: String,
    #[serde(rename = "ARR")]
    pub arr: Metric,
    #[serde(rename = "Number of Employees")]
    pub employees: Metric,
    #[serde(rename = "Location")]
    pub location: String,
}

impl StartupRecord {
    /// Cells in canonical column order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.description.clone(),
            self.industry.clone(),
            self.stage.clone(),
            self.arr.to_string(),
            self.employees.to_string(),
            self.location.clone(),
        ]
    }
}

/// A manual add-form submission. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub arr: Option<u64>,
    pub employees: Option<u64>,
    pub location: Option<String>,
}

impl StartupSubmission {
    /// Returns the record when every field is present and non-blank.
    pub fn into_record(self) -> Option<StartupRecord> {
        fn filled(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Some(StartupRecord {
            name: filled(self.name)?,
            description: filled(self.description)?,
            industry: filled(self.industry)?,
            stage: filled(self.stage)?,
            arr: Metric::from(self.arr?),
            employees: Metric::from(self.employees?),
            location: filled(self.location)?,
        })
    }
}

/// The five scored criteria, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    Industry,
    Stage,
    Arr,
    Employees,
    Location,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Industry,
        Criterion::Stage,
        Criterion::Arr,
        Criterion::Employees,
        Criterion::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Industry => "Industry",
            Criterion::Stage => "Stage",
            Criterion::Arr => "ARR",
            Criterion::Employees => "Number of Employees",
            Criterion::Location => "Location",
        }
    }

    /// Report column holding this criterion's match flag.
    pub fn met_column(&self) -> &'static str {
        match self {
            Criterion::Industry => "Industry Met",
            Criterion::Stage => "Stage Met",
            Criterion::Arr => "ARR Met",
            Criterion::Employees => "Number of Employees Met",
            Criterion::Location => "Location Met",
        }
    }

    /// Parses a command-line name such as `arr` or `Number of Employees`.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "industry" => Some(Criterion::Industry),
            "stage" => Some(Criterion::Stage),
            "arr" => Some(Criterion::Arr),
            "employees" | "number of employees" => Some(Criterion::Employees),
            "location" => Some(Criterion::Location),
            _ => None,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-criterion match flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionMatches {
    #[serde(rename = "Industry Met")]
    pub industry: bool,
    #[serde(rename = "Stage Met")]
    pub stage: bool,
    #[serde(rename = "ARR Met")]
    pub arr: bool,
    #[serde(rename = "Number of Employees Met")]
    pub employees: bool,
    #[serde(rename = "Location Met")]
    pub location: bool,
}

impl CriterionMatches {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Industry => self.industry,
            Criterion::Stage => self.stage,
            Criterion::Arr => self.arr,
            Criterion::Employees => self.employees,
            Criterion::Location => self.location,
        }
    }

    pub fn count(&self) -> usize {
        Criterion::ALL.iter().filter(|c| self.get(**c)).count()
    }
}

/// A record together with its derived match flags and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedRecord {
    #[serde(flatten)]
    pub record: StartupRecord,
    #[serde(flatten)]
    pub matches: CriterionMatches,
    #[serde(rename = "Criteria Met")]
    pub criteria_met: f64,
}

/// Output format for a ranked view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 4] = ["table", "csv", "tsv", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Table => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Tsv => "tsv",
            ReportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "txt" => Ok(ReportFormat::Table),
            "csv" => Ok(ReportFormat::Csv),
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!(
                "Unsupported format '{}'. Valid formats: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}
