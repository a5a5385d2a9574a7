// Domain layer: core models and ports (interfaces). No HTTP or config
// dependencies; adapters implement the ports.

pub mod model;
pub mod ports;
