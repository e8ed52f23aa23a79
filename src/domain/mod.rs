// Domain layer: value types and ports (interfaces). No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
