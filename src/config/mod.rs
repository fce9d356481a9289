pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::render::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "numerology")]
#[command(about = "Calculate Life Path, Expression, Soul Urge and Personality numbers")]
pub struct CliConfig {
    /// Full name; anything that is not a Latin letter is ignored
    #[arg(short, long)]
    pub name: Option<String>,

    /// Birth date as YYYY-MM-DD
    #[arg(short, long)]
    pub birth_date: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// CSV file with `key` and `text` columns
    #[arg(short, long)]
    pub interpretations: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the calculation log under each number
    #[arg(long)]
    pub show_log: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> settings::Overrides {
        settings::Overrides {
            name: self.name.clone(),
            birth_date: self.birth_date.clone(),
            interpretations: self.interpretations.clone(),
            format: self.format,
            show_log: self.show_log,
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_flags() {
        let cli = CliConfig::parse_from([
            "numerology",
            "--name",
            "Jane Doe",
            "--birth-date",
            "1994-01-07",
            "--format",
            "json",
            "--show-log",
        ]);

        let overrides = cli.overrides();
        assert_eq!(overrides.name.as_deref(), Some("Jane Doe"));
        assert_eq!(overrides.birth_date.as_deref(), Some("1994-01-07"));
        assert_eq!(overrides.format, Some(OutputFormat::Json));
        assert!(overrides.show_log);
        assert!(!cli.verbose);
    }
}
