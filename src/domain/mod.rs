// Domain layer: records, criteria and the ports the core talks through.

pub mod criteria;
pub mod model;
pub mod ports;
