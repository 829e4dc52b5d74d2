pub mod arithmetic;
pub mod decimal;
pub mod engine;

pub use crate::domain::model::{CalculationRequest, CalculationResponse, Operation};
pub use crate::domain::ports::{Calculator, ServerSettings};
pub use crate::utils::error::Result;
