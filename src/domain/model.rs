use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub const INVALID_INPUT: &str = "Invalid Input";
pub const CALCULATION_ERROR: &str = "Error";

/// Final displayed numerology code produced by a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumerologyNumber {
    /// Plain decimal value that needed no further reduction.
    Single(u32),
    /// One of 11, 22, ..., 99.
    Master(u32),
    /// `"A/B"`: an intermediate and a final stage, both meaningful.
    Compound { initial: u32, reduced: u32 },
    /// The reducer was handed a negative value.
    InvalidInput,
    /// The birth date could not be parsed.
    Error,
}

impl NumerologyNumber {
    /// Splits the number into `(initial_part, final_part)` for interpretation lookups.
    ///
    /// Sentinels have no parts and are never looked up.
    pub fn parts(&self) -> Option<(Option<u32>, u32)> {
        match *self {
            Self::Single(n) | Self::Master(n) => Some((None, n)),
            Self::Compound { initial, reduced } => Some((Some(initial), reduced)),
            Self::InvalidInput | Self::Error => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::Error)
    }
}

impl fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{}", n),
            Self::Master(n) => write!(f, "{}", n),
            Self::Compound { initial, reduced } => write!(f, "{}/{}", initial, reduced),
            Self::InvalidInput => f.write_str(INVALID_INPUT),
            Self::Error => f.write_str(CALCULATION_ERROR),
        }
    }
}

impl Serialize for NumerologyNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every step of one reduction call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionTrace {
    /// `None` only when the input was rejected.
    pub initial: Option<u128>,
    pub r1: Option<u32>,
    pub r2: Option<u32>,
    pub r3: Option<u32>,
    #[serde(rename = "final")]
    pub final_number: NumerologyNumber,
    pub log: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyResult {
    pub number: NumerologyNumber,
    /// Raw total before reduction.
    pub sum: u64,
    /// Diagnostic trace, not meant to be parsed.
    pub log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NumberType {
    #[serde(rename = "Life Path")]
    LifePath,
    #[serde(rename = "Expression")]
    Expression,
    #[serde(rename = "Soul Urge")]
    SoulUrge,
    #[serde(rename = "Personality")]
    Personality,
}

impl NumberType {
    /// Display order of a report.
    pub const ALL: [NumberType; 4] = [
        NumberType::LifePath,
        NumberType::Expression,
        NumberType::SoulUrge,
        NumberType::Personality,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NumberType::LifePath => "Life Path",
            NumberType::Expression => "Expression",
            NumberType::SoulUrge => "Soul Urge",
            NumberType::Personality => "Personality",
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One result per number type, iterated in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NumerologyReport {
    results: BTreeMap<NumberType, NumerologyResult>,
}

impl NumerologyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, number_type: NumberType, result: NumerologyResult) {
        self.results.insert(number_type, result);
    }

    pub fn get(&self, number_type: NumberType) -> Option<&NumerologyResult> {
        self.results.get(&number_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NumberType, &NumerologyResult)> {
        self.results.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Birth date as handed over by a caller: already structured, or still text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthDateInput {
    Date(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for BirthDateInput {
    fn from(date: NaiveDate) -> Self {
        BirthDateInput::Date(date)
    }
}

impl From<&str> for BirthDateInput {
    fn from(text: &str) -> Self {
        BirthDateInput::Text(text.to_string())
    }
}

impl From<String> for BirthDateInput {
    fn from(text: String) -> Self {
        BirthDateInput::Text(text)
    }
}

impl fmt::Display for BirthDateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthDateInput::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            BirthDateInput::Text(text) => f.write_str(text),
        }
    }
}

/// Text attached to one numerology number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum InterpretationText {
    Found(String),
    /// Absent from the table, or still a placeholder.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitialComponentText {
    pub part: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub final_part: u32,
    pub final_text: InterpretationText,
    /// Only for compound numbers whose initial part has a table entry.
    pub initial_component: Option<InitialComponentText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedResult {
    #[serde(flatten)]
    pub result: NumerologyResult,
    pub interpretation: Option<Interpretation>,
}

/// A report with whatever interpretation text was available.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AnnotatedReport {
    entries: BTreeMap<NumberType, AnnotatedResult>,
}

impl AnnotatedReport {
    pub fn insert(&mut self, number_type: NumberType, entry: AnnotatedResult) {
        self.entries.insert(number_type, entry);
    }

    pub fn get(&self, number_type: NumberType) -> Option<&AnnotatedResult> {
        self.entries.get(&number_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NumberType, &AnnotatedResult)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
