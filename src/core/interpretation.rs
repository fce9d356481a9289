use crate::domain::model::{InitialComponentText, Interpretation, InterpretationText, NumerologyNumber};
use crate::domain::ports::InterpretationSource;

pub const KEY_PREFIX: &str = "Numerology";
/// Table rows whose text starts with this (any case) have not been written yet.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "interpr";

pub fn interpretation_key(part: u32) -> String {
    format!("{}{}", KEY_PREFIX, part)
}

fn is_placeholder(text: &str, placeholder_prefix: &str) -> bool {
    !placeholder_prefix.is_empty()
        && text
            .to_lowercase()
            .starts_with(&placeholder_prefix.to_lowercase())
}

/// Looks up texts for both sides of a number.
///
/// The final part needs a real (non-placeholder) text to count as found. The
/// initial part of a compound number is attached whenever its entry is
/// non-empty. Sentinel numbers get no interpretation.
pub fn interpret<S: InterpretationSource + ?Sized>(
    number: &NumerologyNumber,
    source: &S,
    placeholder_prefix: &str,
) -> Option<Interpretation> {
    let (initial_part, final_part) = number.parts()?;

    let final_text = match source.text_for(&interpretation_key(final_part)) {
        Some(text) if !text.is_empty() && !is_placeholder(text, placeholder_prefix) => {
            InterpretationText::Found(text.to_string())
        }
        _ => InterpretationText::Missing,
    };

    let initial_component = initial_part.and_then(|part| {
        source
            .text_for(&interpretation_key(part))
            .filter(|text| !text.is_empty())
            .map(|text| InitialComponentText {
                part,
                text: text.to_string(),
            })
    });

    Some(Interpretation {
        final_part,
        final_text,
        initial_component,
    })
}
