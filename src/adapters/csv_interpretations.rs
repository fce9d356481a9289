use crate::domain::ports::InterpretationSource;
use crate::utils::error::{NumerologyError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct InterpretationRow {
    key: String,
    /// `None` for short rows.
    text: Option<String>,
}

/// Interpretation texts loaded from a CSV with `key` and `text` columns.
#[derive(Debug, Clone, Default)]
pub struct CsvInterpretations {
    texts: HashMap<String, String>,
}

impl CsvInterpretations {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading interpretations from: {}", path.display());
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;

        if table.is_empty() {
            tracing::warn!(
                "No data found in '{}', interpretations will not be shown",
                path.display()
            );
        } else {
            tracing::info!("Loaded {} interpretations from '{}'", table.len(), path.display());
        }
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for required in ["key", "text"] {
            if !headers.iter().any(|h| h == required) {
                return Err(NumerologyError::InterpretationTableError {
                    message: format!(
                        "CSV must contain 'key' and 'text' columns, missing '{}'",
                        required
                    ),
                });
            }
        }

        let mut texts = HashMap::new();
        for row in reader.deserialize::<InterpretationRow>() {
            let row = row?;
            match row.text {
                // later rows win, like a dict built row by row
                Some(text) => {
                    texts.insert(row.key, text);
                }
                None => {
                    tracing::debug!("Interpretation row '{}' has no text, treated as missing", row.key);
                    texts.remove(&row.key);
                }
            }
        }

        Ok(Self { texts })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }
}

impl InterpretationSource for CsvInterpretations {
    fn text_for(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
