// Domain layer: models and ports. No AWS types past this boundary.

pub mod model;
pub mod ports;
