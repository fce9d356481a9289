use crate::core::letters::{clean_name, is_vowel_at, letter_value};
use crate::core::reducer::{reduce_number, sum_digits};
use crate::domain::model::{BirthDateInput, NumerologyNumber, NumerologyResult};
use crate::utils::error::{NumerologyError, Result};
use chrono::{Datelike, NaiveDate};

pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterSelection {
    All,
    Vowels,
    Consonants,
}

fn name_result(title: &str, name: &str, selection: LetterSelection) -> NumerologyResult {
    let cleaned = clean_name(name);
    let cleaned_str: String = cleaned.iter().collect();
    let mut log = vec![format!("Calculating {} for: {} -> {}", title, name, cleaned_str)];
    let mut total: u64 = 0;

    for (index, &letter) in cleaned.iter().enumerate() {
        let value = letter_value(letter);
        match selection {
            LetterSelection::All => {
                total += u64::from(value);
                log.push(format!("  '{}' = {}", letter, value));
            }
            LetterSelection::Vowels if is_vowel_at(&cleaned, index) => {
                total += u64::from(value);
                log.push(format!("  '{}' (Vowel) = {}", letter, value));
            }
            LetterSelection::Vowels => log.push(format!("  '{}' (Consonant) skipped", letter)),
            LetterSelection::Consonants if !is_vowel_at(&cleaned, index) => {
                total += u64::from(value);
                log.push(format!("  '{}' (Consonant) = {}", letter, value));
            }
            LetterSelection::Consonants => log.push(format!("  '{}' (Vowel) skipped", letter)),
        }
    }
    log.push(format!("  Total Sum = {}", total));

    let trace = reduce_number(u128::from(total));
    log.push(trace.log);
    tracing::debug!(kind = title, sum = total, number = %trace.final_number, "name number calculated");

    NumerologyResult {
        number: trace.final_number,
        sum: total,
        log: log.join("\n"),
    }
}

/// Sum of every letter in the name.
pub fn calculate_expression(name: &str) -> NumerologyResult {
    name_result("Expression", name, LetterSelection::All)
}

/// Sum of the vowels, `Y` included where it acts as one.
pub fn calculate_soul_urge(name: &str) -> NumerologyResult {
    name_result("Soul Urge", name, LetterSelection::Vowels)
}

/// Sum of the consonants; the complement of Soul Urge.
pub fn calculate_personality(name: &str) -> NumerologyResult {
    name_result("Personality", name, LetterSelection::Consonants)
}

/// Digit sums of year, month and day, each taken separately, then added.
pub fn life_path_sum(date: NaiveDate) -> u64 {
    let year = sum_digits(u128::from(date.year().unsigned_abs()));
    let month = sum_digits(u128::from(date.month()));
    let day = sum_digits(u128::from(date.day()));
    u64::from(year + month + day)
}

/// Strict `YYYY-MM-DD`: four-digit year, no whitespace or sign.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| NumerologyError::InvalidBirthDate {
        value: text.to_string(),
        reason,
    };

    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return Err(invalid("only digits and '-' are allowed".to_string()));
    }
    let year = text.split('-').next().unwrap_or_default();
    if year.len() != 4 {
        return Err(invalid("year must have exactly four digits".to_string()));
    }

    NaiveDate::parse_from_str(text, BIRTH_DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}

/// Life Path number. An unparseable date yields `"Error"` with sum 0.
pub fn calculate_life_path(birth_date: impl Into<BirthDateInput>) -> NumerologyResult {
    let birth_date = birth_date.into();
    let mut log = vec![format!("Calculating Life Path for: {}", birth_date)];

    let date = match &birth_date {
        BirthDateInput::Date(date) => *date,
        BirthDateInput::Text(text) => match parse_birth_date(text) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(input = %text, error = %e, "birth date not parseable");
                log.push("  Error: Invalid date format. Please use YYYY-MM-DD.".to_string());
                return NumerologyResult {
                    number: NumerologyNumber::Error,
                    sum: 0,
                    log: log.join("\n"),
                };
            }
        },
    };

    let (year, month, day) = (date.year(), date.month(), date.day());
    log.push(format!("  Date parsed: Year={}, Month={}, Day={}", year, month, day));

    let total = life_path_sum(date);
    log.push(format!("  Digits sum ({}+{}+{}): {}", year, month, day, total));

    let trace = reduce_number(u128::from(total));
    log.push(trace.log);
    tracing::debug!(kind = "Life Path", sum = total, number = %trace.final_number, "date number calculated");

    NumerologyResult {
        number: trace.final_number,
        sum: total,
        log: log.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_sums_all_letters() {
        // J1 O6 H8 N5 D4 O6 E5
        let result = calculate_expression("John Doe");
        assert_eq!(result.sum, 35);
        assert_eq!(result.number.to_string(), "35/8");
        assert!(result.log.starts_with("Calculating Expression for: John Doe -> JOHNDOE"));
    }

    #[test]
    fn test_soul_urge_and_personality_split_letters() {
        let soul = calculate_soul_urge("John Doe");
        let personality = calculate_personality("John Doe");
        assert_eq!(soul.sum, 17);
        assert_eq!(soul.number.to_string(), "17");
        assert_eq!(personality.sum, 18);
        assert_eq!(personality.number.to_string(), "18");
    }

    #[test]
    fn test_trailing_y_counts_as_vowel() {
        // M4 A1 R9 Y7
        assert_eq!(calculate_soul_urge("Mary").sum, 8);
        assert_eq!(calculate_personality("Mary").sum, 13);
        assert_eq!(calculate_expression("Mary").number.to_string(), "21/3");
    }

    #[test]
    fn test_empty_name_reduces_to_zero() {
        for result in [
            calculate_expression("123 !!"),
            calculate_soul_urge(""),
            calculate_personality(""),
        ] {
            assert_eq!(result.sum, 0);
            assert_eq!(result.number.to_string(), "0");
        }
    }

    #[test]
    fn test_life_path_sums_components_separately() {
        let date = NaiveDate::from_ymd_opt(1994, 1, 7).unwrap();
        assert_eq!(life_path_sum(date), 31);

        let result = calculate_life_path(date);
        assert_eq!(result.sum, 31);
        assert_eq!(result.number.to_string(), "31/4");
        assert!(result.log.contains("Date parsed: Year=1994, Month=1, Day=7"));
    }

    #[test]
    fn test_life_path_accepts_text() {
        let result = calculate_life_path("1994-01-07");
        assert_eq!(result.number.to_string(), "31/4");

        // two-digit month and day: 1+9+8+8 + 1+2 + 2+9 = 40 -> 4
        assert_eq!(calculate_life_path("1988-12-29").number.to_string(), "40/4");
    }

    #[test]
    fn test_parse_birth_date_is_strict() {
        assert_eq!(parse_birth_date("1994-01-07").ok(), NaiveDate::from_ymd_opt(1994, 1, 7));
        assert_eq!(parse_birth_date("1994-1-7").ok(), NaiveDate::from_ymd_opt(1994, 1, 7));
        assert!(matches!(
            parse_birth_date("94-01-07"),
            Err(NumerologyError::InvalidBirthDate { .. })
        ));
        assert!(parse_birth_date("+1994-01-07").is_err());
        assert!(parse_birth_date(" 1994-01-07").is_err());
    }

    #[test]
    fn test_life_path_bad_text_is_error() {
        for text in [
            "07/01/1994",
            "1994-13-01",
            "",
            "not a date",
            "94-01-07",
            " 1994-01-07",
            "1994-01-07 ",
            "+1994-01-07",
            "01994-01-07",
        ] {
            let result = calculate_life_path(text);
            assert_eq!(result.number, NumerologyNumber::Error);
            assert_eq!(result.sum, 0);
            assert!(result.log.contains("Invalid date format"));
        }
    }
}
