// Domain layer: probe outcomes and the seams the detector is built on.

pub mod model;
pub mod ports;
