use bigdecimal::{BigDecimal, Zero};

use crate::core::decimal::{to_exact_decimal, to_float};
use crate::domain::model::Operation;
use crate::domain::ports::Calculator;
use crate::utils::error::Result;

fn compute(
    operation: Operation,
    a: f64,
    b: f64,
    op: impl FnOnce(&BigDecimal, &BigDecimal) -> BigDecimal,
) -> Result<f64> {
    let exact_a = to_exact_decimal(a)?;
    let exact_b = to_exact_decimal(b)?;
    let exact = op(&exact_a, &exact_b);

    tracing::trace!(%exact_a, %exact_b, %exact, "{} computed in exact decimal", operation);

    if exact.is_zero() {
        return Ok(signed_zero(operation, a, b));
    }
    to_float(&exact)
}

/// 十進位的零不帶正負號；依 IEEE 754 規則決定：只有 `-0 + -0` (含 `-0 - +0`) 得到 `-0.0`
fn signed_zero(operation: Operation, a: f64, b: f64) -> f64 {
    let b_negative = match operation {
        Operation::Addition => b.is_sign_negative(),
        Operation::Subtraction => b.is_sign_positive(),
    };
    if a == 0.0 && b == 0.0 && a.is_sign_negative() && b_negative {
        -0.0
    } else {
        0.0
    }
}

/// `a + b`，以精確十進位計算後只捨入一次
pub fn add(a: f64, b: f64) -> Result<f64> {
    compute(Operation::Addition, a, b, |x, y| x + y)
}

/// `a - b`，以精確十進位計算後只捨入一次
pub fn subtract(a: f64, b: f64) -> Result<f64> {
    compute(Operation::Subtraction, a, b, |x, y| x - y)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalCalculator;

impl DecimalCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for DecimalCalculator {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        subtract(a, b)
    }
}
