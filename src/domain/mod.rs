// Domain layer: sequence models and ports (interfaces).

pub mod model;
pub mod ports;
