// Domain layer: payload records, dispatch outcomes and the ports the
// channel adapters implement.

pub mod model;
pub mod ports;
