// Domain layer: request bodies, request/response contexts and the ports the client is built on.

pub mod http;
pub mod model;
pub mod ports;
