// Domain layer: numerology records and the interpretation port. No I/O here.

pub mod model;
pub mod ports;
