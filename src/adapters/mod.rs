// Adapters layer: concrete backends for the domain ports.

pub mod csv_interpretations;

pub use csv_interpretations::CsvInterpretations;
