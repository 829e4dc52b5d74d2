#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "math-ops")]
#[command(about = "Command line interface for math operations")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: cli::Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}
