pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::ConfigProvider;
    use crate::domain::criteria::{CriteriaConfig, WeightConfig};
    use crate::domain::model::ReportFormat;
    use crate::utils::error::{RankError, Result};
    use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "stack-rank")]
    #[command(about = "Rank startups against your investment criteria")]
    pub struct CliConfig {
        #[arg(short, long, help = "Path to a TOML configuration file")]
        pub config: Option<String>,

        #[arg(long, value_delimiter = ',', help = "CSV files to import")]
        pub import: Vec<String>,

        #[arg(long, help = "Remove every startup with this name (repeatable)")]
        pub remove: Vec<String>,

        #[arg(long, help = "Start without the sample startups")]
        pub no_samples: bool,

        #[arg(long, help = "Output format: table, csv, tsv or json")]
        pub format: Option<String>,

        #[arg(short, long, help = "Directory to write the ranked report to")]
        pub output: Option<String>,

        #[arg(short, long, help = "Start an interactive session")]
        pub interactive: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn report_format(&self) -> Result<ReportFormat> {
            match &self.format {
                Some(format) => format.parse().map_err(|reason| {
                    RankError::InvalidConfigValueError {
                        field: "format".to_string(),
                        value: format.clone(),
                        reason,
                    }
                }),
                None => Ok(ReportFormat::default()),
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn criteria(&self) -> CriteriaConfig {
            CriteriaConfig::default()
        }

        fn weights(&self) -> WeightConfig {
            WeightConfig::default()
        }

        fn import_files(&self) -> &[String] {
            &self.import
        }

        fn include_samples(&self) -> bool {
            !self.no_samples
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }

        fn output_format(&self) -> ReportFormat {
            self.report_format().unwrap_or_default()
        }

        fn filename_pattern(&self) -> &str {
            "ranked_{timestamp}"
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_file_extensions("import", &self.import, &["csv"])?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            self.report_format()?;
            Ok(())
        }
    }

}
