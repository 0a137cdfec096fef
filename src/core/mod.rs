pub mod catalog;
pub mod evaluator;
pub mod registry;
pub mod report;
pub mod table;

pub use crate::domain::criteria::{CriteriaConfig, IntRange, WeightConfig};
pub use crate::domain::model::{
    Criterion, CriterionMatches, EvaluatedRecord, Metric, ReportFormat, StartupRecord,
    StartupSubmission,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
