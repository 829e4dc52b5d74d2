use crate::domain::model::{CalculationResponse, Operation};
use crate::domain::ports::Calculator;
use crate::utils::error::Result;

pub struct CalculationEngine<C: Calculator> {
    calculator: C,
}

impl<C: Calculator> CalculationEngine<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn run(&self, operation: Operation, a: f64, b: f64) -> Result<CalculationResponse> {
        tracing::debug!("Calculating {} of {} and {}", operation, a, b);

        match self.calculator.apply(operation, a, b) {
            Ok(result) => {
                tracing::info!(%operation, a, b, result, "✅ Calculation completed");
                Ok(CalculationResponse {
                    operation,
                    a,
                    b,
                    result,
                })
            }
            Err(e) => {
                tracing::warn!(%operation, a, b, "❌ Calculation rejected: {}", e);
                Err(e)
            }
        }
    }
}
