// Domain layer: the APOD entity and the ports the gateway is written against.

pub mod model;
pub mod ports;
