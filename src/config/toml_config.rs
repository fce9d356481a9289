use crate::core::render::OutputFormat;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub interpretations: Option<InterpretationsConfig>,
    pub output: Option<OutputConfig>,
    pub validation: Option<DateValidationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub name: Option<String>,
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpretationsConfig {
    pub path: Option<String>,
    pub placeholder_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub show_log: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateValidationConfig {
    pub min_birth_date: Option<NaiveDate>,
    pub allow_future_dates: Option<bool>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.name.as_deref())
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.birth_date.as_deref())
    }

    pub fn interpretations_path(&self) -> Option<&str> {
        self.interpretations.as_ref().and_then(|i| i.path.as_deref())
    }

    pub fn placeholder_prefix(&self) -> Option<&str> {
        self.interpretations
            .as_ref()
            .and_then(|i| i.placeholder_prefix.as_deref())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn show_log(&self) -> bool {
        self.output.as_ref().and_then(|o| o.show_log).unwrap_or(false)
    }

    pub fn min_birth_date(&self) -> Option<NaiveDate> {
        self.validation.as_ref().and_then(|v| v.min_birth_date)
    }

    pub fn allow_future_dates(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.allow_future_dates)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.interpretations_path() {
            validation::validate_path("interpretations.path", path)?;
            validation::validate_file_extension("interpretations.path", path, &["csv"])?;
        }

        if let Some(format) = self.output_format() {
            // same rule as resolving the format later
            format.parse::<OutputFormat>()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
name = "Jane Emily Doe"
birth_date = "1994-01-07"

[interpretations]
path = "interpretations.csv"
placeholder_prefix = "todo"

[output]
format = "json"
show_log = true

[validation]
min_birth_date = "1950-01-01"
allow_future_dates = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), Some("Jane Emily Doe"));
        assert_eq!(config.birth_date(), Some("1994-01-07"));
        assert_eq!(config.interpretations_path(), Some("interpretations.csv"));
        assert_eq!(config.placeholder_prefix(), Some("todo"));
        assert_eq!(config.output_format(), Some("json"));
        assert!(config.show_log());
        assert_eq!(config.min_birth_date(), NaiveDate::from_ymd_opt(1950, 1, 1));
        assert!(config.allow_future_dates());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.name(), None);
        assert!(!config.show_log());
        assert!(!config.allow_future_dates());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMEROLOGY_TEST_FULL_NAME", "Ada Lovelace");

        let toml_content = r#"
[input]
name = "${NUMEROLOGY_TEST_FULL_NAME}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.name(), Some("Ada Lovelace"));

        std::env::remove_var("NUMEROLOGY_TEST_FULL_NAME");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_table = TomlConfig::from_toml_str("[interpretations]\npath = \"texts.txt\"\n").unwrap();
        assert!(bad_table.validate().is_err());
    }

    #[test]
    fn test_output_format_is_case_insensitive() {
        let upper = TomlConfig::from_toml_str("[output]\nformat = \"JSON\"\n").unwrap();
        assert!(upper.validate().is_ok());
        assert_eq!(upper.output_format().unwrap().parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\nname = \"File Name\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), Some("File Name"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[input\nname = 1").unwrap_err();
        assert!(matches!(err, NumerologyError::ConfigValidationError { .. }));
    }
}
