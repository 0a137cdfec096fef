use crate::app::command::{Command, HELP};
use crate::core::catalog::{self, INDUSTRIES, LOCATIONS, STAGES};
use crate::core::registry::StartupRegistry;
use crate::core::report::{self, format_score};
use crate::core::table::TableData;
use crate::domain::criteria::{CriteriaConfig, WeightConfig};
use crate::domain::model::{Criterion, EvaluatedRecord, ReportFormat};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{RankError, Result};
use crate::utils::validation::{validate_file_extensions, validate_range};

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text to show the user.
    Message(String),
    /// The re-ranked view after a mutation or `show`, with a status line.
    Ranked {
        status: String,
        ranked: Vec<EvaluatedRecord>,
    },
    Quit,
}

/// One user's registry together with the criteria and weights it is ranked by.
pub struct Session<S: Storage> {
    storage: S,
    registry: StartupRegistry,
    criteria: CriteriaConfig,
    weights: WeightConfig,
    format: ReportFormat,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S, criteria: CriteriaConfig, weights: WeightConfig) -> Self {
        Self {
            storage,
            registry: StartupRegistry::new(),
            criteria,
            weights,
            format: ReportFormat::Table,
        }
    }

    /// Builds a session from configuration, seeding samples and importing the
    /// configured files in order. A file missing canonical columns is skipped.
    pub async fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Result<Self> {
        let mut session = Self::new(storage, config.criteria(), config.weights());
        session.format = config.output_format();

        if config.include_samples() {
            session.registry = StartupRegistry::with_records(catalog::sample_startups());
            tracing::debug!("Seeded {} sample startups", session.registry.len());
        }

        for path in config.import_files() {
            match session.import_file(path).await {
                Ok(_) => {}
                // 欄位不齊的檔案整批略過，其餘照常載入
                Err(e @ RankError::MalformedImport { .. }) => {
                    tracing::warn!("❌ Skipped import of {}: {}", path, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(session)
    }

    pub fn registry(&self) -> &StartupRegistry {
        &self.registry
    }

    pub fn criteria(&self) -> &CriteriaConfig {
        &self.criteria
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn ranked(&self) -> Vec<EvaluatedRecord> {
        self.registry.rank(&self.criteria, &self.weights)
    }

    pub async fn import_file(&mut self, path: &str) -> Result<usize> {
        validate_file_extensions("import", &[path.to_string()], &["csv"])?;

        tracing::info!("📁 Importing startups from: {}", path);
        let data = self.storage.read_file(path).await?;
        let table = TableData::from_csv_bytes(&data)?;
        self.registry.bulk_import(&table)
    }

    pub fn remove(&mut self, name: &str) -> usize {
        self.registry.remove(name)
    }

    /// Renders the current ranking and writes it through storage.
    pub async fn export(&self, path: &str, format: ReportFormat) -> Result<String> {
        let rendered = report::render(&self.ranked(), format)?;
        self.storage.write_file(path, rendered.as_bytes()).await?;
        tracing::info!("📁 Ranked table saved to: {}", path);
        Ok(path.to_string())
    }

    /// Runs one command. Mutations are followed by a full re-rank.
    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        let mutation = command.is_mutation();

        let status = match command {
            Command::Add(submission) => {
                let name = submission.name.clone().unwrap_or_default();
                if self.registry.add(submission) {
                    format!("Added '{}'", name)
                } else {
                    "Submission incomplete, nothing added".to_string()
                }
            }
            Command::Import(path) => {
                let count = self.import_file(&path).await?;
                format!("Imported {} startups from {}", count, path)
            }
            Command::Remove(name) => {
                let removed = self.registry.remove(&name);
                format!("Removed {} startup(s) named '{}'", removed, name)
            }
            Command::Weight(criterion, value) => {
                validate_range(
                    criterion.label(),
                    value,
                    catalog::WEIGHT_MIN,
                    catalog::WEIGHT_MAX,
                )?;
                self.weights.set(criterion, value);
                format!("{} weight set to {}", criterion, format_score(value))
            }
            Command::Industries(values) => {
                self.criteria.industries = values.into_iter().collect();
                "Acceptable industries updated".to_string()
            }
            Command::Stages(values) => {
                self.criteria.stages = values.into_iter().collect();
                "Acceptable stages updated".to_string()
            }
            Command::Locations(values) => {
                self.criteria.locations = values.into_iter().collect();
                "Acceptable locations updated".to_string()
            }
            Command::ArrRange(min, max) => {
                self.criteria = self.criteria.clone().with_arr(min, max);
                format!("ARR range set to {}..={}", min, max)
            }
            Command::EmployeeRange(min, max) => {
                self.criteria = self.criteria.clone().with_employees(min, max);
                format!("Employee range set to {}..={}", min, max)
            }
            Command::Show => format!("{} startups", self.registry.len()),
            Command::Names => return Ok(Outcome::Message(self.registry.names().join("\n"))),
            Command::Options => return Ok(Outcome::Message(options_text())),
            Command::Criteria => return Ok(Outcome::Message(self.criteria_text())),
            Command::Export(path) => {
                let format = export_format(&path)?;
                let written = self.export(&path, format).await?;
                return Ok(Outcome::Message(format!("Exported to {}", written)));
            }
            Command::Help => return Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        };

        if mutation {
            tracing::debug!("Re-ranking {} startups", self.registry.len());
        }

        Ok(Outcome::Ranked {
            status,
            ranked: self.ranked(),
        })
    }

    /// Parses and runs one input line.
    pub async fn execute_line(&mut self, line: &str) -> Result<Outcome> {
        let command = Command::parse(line)?;
        self.execute(command).await
    }

    fn criteria_text(&self) -> String {
        let join = |values: &std::collections::BTreeSet<String>| {
            values.iter().cloned().collect::<Vec<_>>().join(", ")
        };

        let mut lines = vec![
            format!("Industries: {}", join(&self.criteria.industries)),
            format!("Stages: {}", join(&self.criteria.stages)),
            format!(
                "ARR: {}..={}",
                self.criteria.arr.min, self.criteria.arr.max
            ),
            format!(
                "Employees: {}..={}",
                self.criteria.employees.min, self.criteria.employees.max
            ),
            format!("Locations: {}", join(&self.criteria.locations)),
            "Weights:".to_string(),
        ];
        lines.extend(
            Criterion::ALL
                .iter()
                .map(|c| format!("  {}: {}", c, format_score(self.weights.get(*c)))),
        );
        lines.join("\n")
    }
}

fn options_text() -> String {
    format!(
        "Industries: {}\nStages: {}\nLocations: {}",
        INDUSTRIES.join(", "),
        STAGES.join(", "),
        LOCATIONS.join(", ")
    )
}

fn export_format(path: &str) -> Result<ReportFormat> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    extension
        .parse::<ReportFormat>()
        .map_err(|reason| RankError::CommandError { message: reason })
}
