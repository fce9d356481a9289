pub mod calculators;
pub mod engine;
pub mod interpretation;
pub mod letters;
pub mod reducer;
pub mod render;
pub mod report;

pub use crate::domain::model::{
    AnnotatedReport, BirthDateInput, NumberType, NumerologyNumber, NumerologyReport,
    NumerologyResult, ReductionTrace,
};
pub use crate::domain::ports::{InterpretationSource, NoInterpretations};
pub use crate::utils::error::Result;
