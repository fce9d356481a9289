use crate::domain::model::{AnnotatedReport, InterpretationText};
use crate::utils::error::{NumerologyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(NumerologyError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", OUTPUT_FORMATS.join(", ")),
            }),
        }
    }
}

pub fn render(
    report: &AnnotatedReport,
    format: OutputFormat,
    name: &str,
    birth_date: &str,
    show_log: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, name, birth_date, show_log)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

/// Human-readable report, one section per number type.
pub fn render_text(report: &AnnotatedReport, name: &str, birth_date: &str, show_log: bool) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "Numerology report for: {} (DOB: {})", name, birth_date);

    for (number_type, entry) in report.iter() {
        let _ = writeln!(out, "\n---");
        let _ = writeln!(out, "{} Number: {}", number_type, entry.result.number);
        let _ = writeln!(out, "Initial Sum: {}", entry.result.sum);

        if let Some(interpretation) = &entry.interpretation {
            match &interpretation.final_text {
                InterpretationText::Found(text) => {
                    let _ = writeln!(out, "\n{}", text);
                }
                InterpretationText::Missing => {
                    let _ = writeln!(
                        out,
                        "\n[Text for aspect '{}' not found or is a placeholder in the interpretation table]",
                        interpretation.final_part
                    );
                }
            }

            if let Some(initial) = &interpretation.initial_component {
                let _ = writeln!(
                    out,
                    "\nRegarding the initial sum component ({}):\n{}",
                    initial.part, initial.text
                );
            }
        }

        if show_log {
            let _ = writeln!(out, "\nCalculation log:\n{}", entry.result.log);
        }
    }

    out
}

pub fn render_json(report: &AnnotatedReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// `type,number,sum` rows in display order.
pub fn render_csv(report: &AnnotatedReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["type", "number", "sum"])?;
    for (number_type, entry) in report.iter() {
        writer.write_record([
            number_type.name().to_string(),
            entry.result.number.to_string(),
            entry.result.sum.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NumerologyError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::NumerologyEngine;
    use crate::domain::ports::NoInterpretations;
    use std::collections::HashMap;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_csv_rows_in_display_order() {
        let report = NumerologyEngine::new(NoInterpretations).run("John Doe", "1994-01-07");
        let csv = render_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "type,number,sum",
                "Life Path,31/4,31",
                "Expression,35/8,35",
                "Soul Urge,17,17",
                "Personality,18,18",
            ]
        );
    }

    #[test]
    fn test_render_json_keys_by_type_name() {
        let report = NumerologyEngine::new(NoInterpretations).run("John Doe", "not a date");
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["Life Path"]["number"], "Error");
        assert_eq!(json["Life Path"]["sum"], 0);
        assert_eq!(json["Expression"]["number"], "35/8");
    }

    #[test]
    fn test_render_text_shows_interpretations_and_log() {
        let mut table = HashMap::new();
        table.insert("Numerology17".to_string(), "Seventeen text.".to_string());
        let report = NumerologyEngine::new(table).run("John Doe", "1994-01-07");

        let text = render_text(&report, "John Doe", "1994-01-07", true);
        assert!(text.starts_with("Numerology report for: John Doe (DOB: 1994-01-07)"));
        assert!(text.contains("Soul Urge Number: 17"));
        assert!(text.contains("Seventeen text."));
        assert!(text.contains("[Text for aspect '4' not found"));
        assert!(text.contains("Calculation log:\nCalculating Life Path for: 1994-01-07"));

        let quiet = render_text(&report, "John Doe", "1994-01-07", false);
        assert!(!quiet.contains("Calculation log:"));
    }
}
