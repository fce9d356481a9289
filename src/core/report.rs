use crate::core::calculators::{
    calculate_expression, calculate_life_path, calculate_personality, calculate_soul_urge,
};
use crate::domain::model::{BirthDateInput, NumberType, NumerologyReport};

/// Runs all four calculators. Same inputs, same report.
pub fn calculate_all(name: &str, birth_date: impl Into<BirthDateInput>) -> NumerologyReport {
    let birth_date = birth_date.into();
    tracing::debug!(birth_date = %birth_date, "calculating numerology report");

    let mut report = NumerologyReport::new();
    report.insert(NumberType::Expression, calculate_expression(name));
    report.insert(NumberType::SoulUrge, calculate_soul_urge(name));
    report.insert(NumberType::Personality, calculate_personality(name));
    report.insert(NumberType::LifePath, calculate_life_path(birth_date));
    report
}
