// Adapters layer: concrete implementations of the domain ports (http, clock).

pub mod clock;
pub mod http;
