use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("The uploaded CSV file must have the following columns: {required:?} (missing: {missing:?})")]
    MalformedImport {
        required: Vec<String>,
        missing: Vec<String>,
    },

    #[error("Command error: {message}")]
    CommandError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RankError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RankError::IoError(_) => ErrorCategory::Io,
            RankError::CsvError(_)
            | RankError::SerializationError(_)
            | RankError::MalformedImport { .. } => ErrorCategory::Data,
            RankError::ConfigError { .. }
            | RankError::ConfigValidationError { .. }
            | RankError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RankError::CommandError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可以直接修正後重試
            RankError::CommandError { .. } => ErrorSeverity::Low,
            RankError::MalformedImport { .. }
            | RankError::CsvError(_)
            | RankError::SerializationError(_) => ErrorSeverity::Medium,
            RankError::ConfigError { .. }
            | RankError::ConfigValidationError { .. }
            | RankError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RankError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RankError::CsvError(_) => {
                "Check that the file is valid CSV with a single header row".to_string()
            }
            RankError::IoError(_) => "Check that the path exists and is readable".to_string(),
            RankError::SerializationError(_) => {
                "Report data could not be serialized; try a different output format".to_string()
            }
            RankError::ConfigError { .. } | RankError::ConfigValidationError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            RankError::InvalidConfigValueError { field, .. } => {
                format!("Adjust the value of '{}'", field)
            }
            RankError::MalformedImport { required, .. } => {
                format!("Add a header row with these columns: {}", required.join(", "))
            }
            RankError::CommandError { .. } => "Type 'help' to list the commands".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RankError::MalformedImport { missing, .. } => {
                format!("Import rejected, missing columns: {}", missing.join(", "))
            }
            RankError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            RankError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
