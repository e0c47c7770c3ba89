// Domain layer: schedule models and ports. No external collaborators beyond serde.

pub mod model;
pub mod ports;
