use crate::core::evaluator::evaluate_all;
use crate::core::table::TableData;
use crate::domain::criteria::{CriteriaConfig, WeightConfig};
use crate::domain::model::{EvaluatedRecord, StartupRecord, StartupSubmission};
use crate::utils::error::Result;

/// Insertion-ordered collection of startups for one session.
///
/// Names are not unique; the registry never deduplicates.
#[derive(Debug, Clone, Default)]
pub struct StartupRegistry {
    records: Vec<StartupRecord>,
}

impl StartupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<StartupRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StartupRecord] {
        &self.records
    }

    /// Distinct names in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.name.as_str()) {
                names.push(&record.name);
            }
        }
        names
    }

    /// Appends the submission when it is complete. An incomplete submission
    /// is dropped without an error; the return value says whether it was kept.
    pub fn add(&mut self, submission: StartupSubmission) -> bool {
        match submission.into_record() {
            Some(record) => {
                tracing::info!("Added startup '{}'", record.name);
                self.records.push(record);
                true
            }
            None => {
                tracing::warn!("Dropped incomplete startup submission");
                false
            }
        }
    }

    /// Appends every row of `table`. A table missing any canonical column is
    /// rejected as a whole and the registry is left untouched.
    pub fn bulk_import(&mut self, table: &TableData) -> Result<usize> {
        let imported = table.to_records()?;
        let count = imported.len();
        self.records.extend(imported);

        tracing::info!("Imported {} startups ({} total)", count, self.records.len());
        Ok(count)
    }

    /// Removes every record named exactly `name`. Returns how many went.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.name != name);
        let removed = before - self.records.len();

        if removed == 0 {
            tracing::debug!("No startup named '{}' to remove", name);
        } else {
            tracing::info!("Removed {} startup(s) named '{}'", removed, name);
        }
        removed
    }

    /// Evaluates every record and orders them by score, highest first.
    /// Equal scores keep insertion order.
    pub fn rank(&self, criteria: &CriteriaConfig, weights: &WeightConfig) -> Vec<EvaluatedRecord> {
        let mut ranked = evaluate_all(&self.records, criteria, weights);
        // sort_by 是穩定排序
        ranked.sort_by(|a, b| b.criteria_met.total_cmp(&a.criteria_met));
        ranked
    }
}
