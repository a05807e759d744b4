// Domain layer: backend records and the ports the client implements.

pub mod model;
pub mod ports;
