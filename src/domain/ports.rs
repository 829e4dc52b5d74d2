use crate::domain::model::Operation;
use crate::utils::error::Result;
use std::sync::Arc;

pub trait Calculator: Send + Sync {
    fn add(&self, a: f64, b: f64) -> Result<f64>;
    fn subtract(&self, a: f64, b: f64) -> Result<f64>;

    fn apply(&self, operation: Operation, a: f64, b: f64) -> Result<f64> {
        match operation {
            Operation::Addition => self.add(a, b),
            Operation::Subtraction => self.subtract(a, b),
        }
    }
}

impl<T: Calculator + ?Sized> Calculator for Arc<T> {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        (**self).add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        (**self).subtract(a, b)
    }
}

pub trait ServerSettings: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
