// Adapters layer: concrete implementations for external systems (http server).

#[cfg(feature = "server")]
pub mod http;
