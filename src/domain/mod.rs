// Domain layer: input/report models and the counting port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
