// Adapters layer: concrete implementations of the domain ports (transport, auth, middleware).

pub mod auth;
pub mod http;
pub mod middleware;
