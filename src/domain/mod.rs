// Domain layer: response models and ports (interfaces) for pluggable analyzers.

pub mod model;
pub mod ports;
