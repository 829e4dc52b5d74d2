use crate::core::Operation;
use crate::utils::validation::parse_number;
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Add two numbers and display the result.
    ///
    /// Example: math-ops addition 2 3
    /// For negative numbers, use: math-ops addition -- -1 1
    Addition(Operands),

    /// Subtract two numbers and display the result.
    ///
    /// Example: math-ops subtraction 5 3
    /// For negative numbers, use: math-ops subtraction -- -5 -3
    Subtraction(Operands),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Args)]
pub struct Operands {
    #[arg(value_name = "A", allow_negative_numbers = true, value_parser = parse_operand)]
    pub a: f64,

    #[arg(value_name = "B", allow_negative_numbers = true, value_parser = parse_operand)]
    pub b: f64,
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::Addition(_) => Operation::Addition,
            Command::Subtraction(_) => Operation::Subtraction,
        }
    }

    pub fn operands(&self) -> Operands {
        match self {
            Command::Addition(operands) | Command::Subtraction(operands) => *operands,
        }
    }
}

fn parse_operand(raw: &str) -> Result<f64, String> {
    parse_number("operand", raw).map_err(|e| e.user_friendly_message())
}
