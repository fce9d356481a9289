use clap::Parser;
use numerology::core::render::render;
use numerology::utils::error::{ErrorSeverity, NumerologyError};
use numerology::utils::{logger, validation::Validate};
use numerology::{CliConfig, CsvInterpretations, NumerologyEngine, Settings, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting numerology CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Numerology run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn run(cli: &CliConfig) -> Result<String, NumerologyError> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => TomlConfig::default(),
    };

    let today = chrono::Local::now().date_naive();
    let settings = Settings::resolve(cli.overrides(), &file_config, today)?;
    settings.validate()?;

    if settings.parsed_birth_date().is_none() {
        tracing::warn!(
            "Birth date '{}' is not YYYY-MM-DD, Life Path will be reported as an error",
            settings.birth_date
        );
    }

    let interpretations = match &settings.interpretations_path {
        Some(path) => match CsvInterpretations::from_file(path) {
            Ok(table) => table,
            Err(e) => {
                // numbers are still worth showing without their texts
                tracing::warn!("Interpretations not loaded from '{}': {}", path, e);
                tracing::warn!("💡 {}", e.recovery_suggestion());
                CsvInterpretations::default()
            }
        },
        None => CsvInterpretations::default(),
    };

    let engine = NumerologyEngine::new(interpretations)
        .with_placeholder_prefix(settings.placeholder_prefix.clone());
    if settings.interpretations_path.is_some() && !engine.has_interpretations() {
        tracing::warn!("Interpretations will not be shown, the table could not be loaded or is empty");
    }

    tracing::info!("Calculating for: {} (DOB: {})", settings.name, settings.birth_date);
    let report = engine.run(&settings.name, settings.birth_date.as_str());
    tracing::info!("✅ Calculations complete");

    render(
        &report,
        settings.format,
        &settings.name,
        &settings.birth_date,
        settings.show_log,
    )
}
