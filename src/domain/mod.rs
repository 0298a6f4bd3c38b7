// Domain layer: core models and ports (interfaces). No HTTP or XML knowledge here.

pub mod model;
pub mod ports;
