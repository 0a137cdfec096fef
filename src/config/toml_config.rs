use crate::core::catalog::{
    self, ARR_MAX, ARR_MIN, EMPLOYEES_MAX, EMPLOYEES_MIN, INDUSTRIES, LOCATIONS, STAGES,
    WEIGHT_MAX, WEIGHT_MIN,
};
use crate::core::ConfigProvider;
use crate::domain::criteria::{CriteriaConfig, WeightConfig};
use crate::domain::model::{Criterion, ReportFormat};
use crate::utils::error::{RankError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_ordered_bounds, validate_path,
    validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub criteria: CriteriaConfig,
    #[serde(default)]
    pub weights: WeightConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_include_samples() -> bool {
    true
}

fn default_filename_pattern() -> String {
    "ranked_{timestamp}".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_include_samples")]
    pub include_samples: bool,
    #[serde(default)]
    pub files: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            include_samples: default_include_samples(),
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_filename_pattern")]
    pub filename_pattern: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: ReportFormat::default(),
            filename_pattern: default_filename_pattern(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RankError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RankError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STARTUP_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RankError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        for criterion in Criterion::ALL {
            validate_range(
                &format!("weights.{}", criterion.label()),
                self.weights.get(criterion),
                WEIGHT_MIN,
                WEIGHT_MAX,
            )?;
        }

        let arr = &self.criteria.arr;
        validate_range("criteria.arr.min", arr.min, ARR_MIN, ARR_MAX)?;
        validate_range("criteria.arr.max", arr.max, ARR_MIN, ARR_MAX)?;
        validate_ordered_bounds("criteria.arr", arr.min, arr.max)?;

        let employees = &self.criteria.employees;
        validate_range("criteria.employees.min", employees.min, EMPLOYEES_MIN, EMPLOYEES_MAX)?;
        validate_range("criteria.employees.max", employees.max, EMPLOYEES_MIN, EMPLOYEES_MAX)?;
        validate_ordered_bounds("criteria.employees", employees.min, employees.max)?;

        validate_file_extensions("seed.files", &self.seed.files, &["csv"])?;

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        validate_non_empty_string("output.filename_pattern", &self.output.filename_pattern)?;

        // 不在選單中的值仍然接受，只提出警告
        for (field, selected, known) in [
            ("industries", &self.criteria.industries, &INDUSTRIES[..]),
            ("stages", &self.criteria.stages, &STAGES[..]),
            ("locations", &self.criteria.locations, &LOCATIONS[..]),
        ] {
            let unknown = catalog::unknown_values(selected, known);
            if !unknown.is_empty() {
                tracing::warn!("criteria.{} has values outside the catalog: {:?}", field, unknown);
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn criteria(&self) -> CriteriaConfig {
        self.criteria.clone()
    }

    fn weights(&self) -> WeightConfig {
        self.weights
    }

    fn import_files(&self) -> &[String] {
        &self.seed.files
    }

    fn include_samples(&self) -> bool {
        self.seed.include_samples
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn output_format(&self) -> ReportFormat {
        self.output.format
    }

    fn filename_pattern(&self) -> &str {
        &self.output.filename_pattern
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::IntRange;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[criteria]
industries = ["Fintech", "AI"]
stages = ["Seed"]
arr = { min = 50000, max = 5000000 }
employees = { min = 1, max = 100 }
locations = ["USA", "UK"]

[weights]
industry = 1.0
location = 2.5

[seed]
include_samples = false
files = ["startups.csv"]

[output]
path = "./reports"
format = "json"
filename_pattern = "weekly_{timestamp}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.criteria.industries.len(), 2);
        assert!(config.criteria.stages.contains("Seed"));
        assert_eq!(config.criteria.arr, IntRange::new(50_000, 5_000_000));
        assert_eq!(config.weights.industry, 1.0);
        assert_eq!(config.weights.stage, 1.0);
        assert_eq!(config.weights.location, 2.5);
        assert!(!config.include_samples());
        assert_eq!(config.import_files(), &["startups.csv".to_string()]);
        assert_eq!(config.output_path(), Some("./reports"));
        assert_eq!(config.output_format(), ReportFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.criteria, CriteriaConfig::default());
        assert_eq!(config.weights, WeightConfig::default());
        assert!(config.include_samples());
        assert_eq!(config.output_format(), ReportFormat::Table);
        assert_eq!(config.filename_pattern(), "ranked_{timestamp}");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_criteria_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("[criteria]\nlocations = [\"UK\"]\n").unwrap();

        assert!(config.criteria.locations.contains("UK"));
        assert!(config.criteria.industries.contains("Fintech"));
        assert_eq!(config.criteria.employees, IntRange::new(2, 25));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STACK_RANK_TEST_IMPORT", "fresh.csv");

        let toml_content = r#"
[seed]
files = ["${STACK_RANK_TEST_IMPORT}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.seed.files, vec!["fresh.csv".to_string()]);

        std::env::remove_var("STACK_RANK_TEST_IMPORT");
    }

    #[test]
    fn test_weight_out_of_range_fails_validation() {
        let config = TomlConfig::from_toml_str("[weights]\narr = 12.0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[weights]\nstage = -0.5\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_range_fails_validation() {
        let config =
            TomlConfig::from_toml_str("[criteria]\nemployees = { min = 30, max = 2 }\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_csv_seed_file_fails_validation() {
        let config = TomlConfig::from_toml_str("[seed]\nfiles = [\"startups.xlsx\"]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let result = TomlConfig::from_toml_str("[output]\nformat = \"xlsx\"\n");
        assert!(matches!(
            result,
            Err(RankError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[weights]\nlocation = 0.0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.weights.location, 0.0);
    }
}
