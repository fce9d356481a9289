use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid birth date '{value}': {reason}")]
    InvalidBirthDate { value: String, reason: String },

    #[error("Interpretation table error: {message}")]
    InterpretationTableError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::InvalidBirthDate { .. } => ErrorCategory::Input,
            Self::CsvError(_) | Self::InterpretationTableError { .. } => ErrorCategory::Data,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // interpretation text is optional, the numbers are still usable
            ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("Please provide a value for '{}'.", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("The value given for '{}' is not usable: {}", field, reason)
            }
            Self::ConfigValidationError { message, .. } => {
                format!("The configuration could not be read: {}", message)
            }
            Self::InvalidBirthDate { value, reason } => {
                format!("The birth date '{}' cannot be used: {}", value, reason)
            }
            Self::CsvError(_) | Self::InterpretationTableError { .. } => {
                "Interpretations could not be loaded.".to_string()
            }
            Self::IoError(e) => format!("A file could not be accessed: {}", e),
            Self::SerializationError(e) => format!("The report could not be written: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { .. } => {
                "Pass the value on the command line or set it in the TOML config file"
            }
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Check the command line flags and the TOML config file"
            }
            Self::InvalidBirthDate { .. } => "Use the YYYY-MM-DD format with a date that is not in the future",
            Self::CsvError(_) | Self::InterpretationTableError { .. } => {
                "Make sure the interpretation CSV exists and has 'key' and 'text' columns"
            }
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Try a different output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let missing = NumerologyError::MissingConfigError {
            field: "name".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.severity(), ErrorSeverity::High);

        let table = NumerologyError::InterpretationTableError {
            message: "no header".to_string(),
        };
        assert_eq!(table.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = NumerologyError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert!(err.user_friendly_message().contains("output.format"));
        assert_eq!(
            err.to_string(),
            "Invalid value 'xml' for 'output.format': Unsupported format"
        );
    }
}
