pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::{Command, Outcome, Session};
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    evaluator::{evaluate, evaluate_all},
    registry::StartupRegistry,
    table::TableData,
    CriteriaConfig, EvaluatedRecord, StartupRecord, StartupSubmission, WeightConfig,
};
pub use crate::utils::error::{RankError, Result};
