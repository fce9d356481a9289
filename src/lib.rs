pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::CsvInterpretations;
pub use config::{settings::Settings, toml_config::TomlConfig};
pub use core::calculators::{
    calculate_expression, calculate_life_path, calculate_personality, calculate_soul_urge,
};
pub use core::engine::NumerologyEngine;
pub use core::reducer::reduce_number;
pub use core::report::calculate_all;
pub use domain::model::{
    AnnotatedReport, BirthDateInput, NumberType, NumerologyNumber, NumerologyReport,
    NumerologyResult, ReductionTrace,
};
pub use utils::error::{NumerologyError, Result};
