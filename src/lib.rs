pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::ServerConfig;

#[cfg(feature = "server")]
pub use adapters::http::{build_router, AppState};
pub use core::arithmetic::{add, subtract, DecimalCalculator};
pub use core::engine::CalculationEngine;
pub use utils::error::{MathError, Result};
