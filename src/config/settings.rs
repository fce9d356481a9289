use crate::config::toml_config::TomlConfig;
use crate::core::calculators::parse_birth_date;
use crate::core::interpretation::DEFAULT_PLACEHOLDER_PREFIX;
use crate::core::render::OutputFormat;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;

/// Values given on the command line; they win over the TOML file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub interpretations: Option<String>,
    pub format: Option<OutputFormat>,
    pub show_log: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub name: String,
    pub birth_date: String,
    pub interpretations_path: Option<String>,
    pub placeholder_prefix: String,
    pub format: OutputFormat,
    pub show_log: bool,
    pub min_birth_date: NaiveDate,
    pub allow_future_dates: bool,
    pub today: NaiveDate,
}

pub fn default_min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: &TomlConfig, today: NaiveDate) -> Result<Self> {
        let name = overrides.name.or_else(|| file.name().map(str::to_string));
        let name = validation::validate_required_field("name", &name)?.clone();

        let birth_date = overrides
            .birth_date
            .or_else(|| file.birth_date().map(str::to_string));
        let birth_date = validation::validate_required_field("birth_date", &birth_date)?.clone();

        let format = match overrides.format {
            Some(format) => format,
            None => match file.output_format() {
                Some(format) => format.parse()?,
                None => OutputFormat::default(),
            },
        };

        Ok(Self {
            name,
            birth_date,
            interpretations_path: overrides
                .interpretations
                .or_else(|| file.interpretations_path().map(str::to_string)),
            placeholder_prefix: file
                .placeholder_prefix()
                .unwrap_or(DEFAULT_PLACEHOLDER_PREFIX)
                .to_string(),
            format,
            show_log: overrides.show_log || file.show_log(),
            min_birth_date: file.min_birth_date().unwrap_or_else(default_min_birth_date),
            allow_future_dates: file.allow_future_dates(),
            today,
        })
    }

    /// The birth date, if it parses. Unparseable text is left for Life Path to report.
    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        parse_birth_date(&self.birth_date).ok()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;

        if let Some(path) = &self.interpretations_path {
            validation::validate_path("interpretations", path)?;
            validation::validate_file_extension("interpretations", path, &["csv"])?;
        }

        if let Some(date) = self.parsed_birth_date() {
            let max = if self.allow_future_dates {
                NaiveDate::MAX
            } else {
                self.today
            };
            validation::validate_range("birth_date", date, self.min_birth_date, max).map_err(|e| {
                match e {
                    NumerologyError::InvalidConfigValueError { value, reason, .. } => {
                        NumerologyError::InvalidBirthDate { value, reason }
                    }
                    other => other,
                }
            })?;
        }

        Ok(())
    }
}
