// Domain layer: core models and ports (interfaces). No external collaborators
// beyond std; the adapters layer implements the ports.

pub mod model;
pub mod ports;
