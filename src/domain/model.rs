use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Addition, Operation::Subtraction];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
        }
    }

    /// HTTP 路由片段 (`/add`, `/subtract`)
    pub fn route(&self) -> &'static str {
        match self {
            Operation::Addition => "add",
            Operation::Subtraction => "subtract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(deserialize_with = "deserialize_number")]
    pub a: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

/// 接受 JSON 數字或數字字串 (例如 `2.5` 或 `"2.5"`)
fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberVisitor;

    impl Visitor<'_> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            let trimmed = v.trim();
            trimmed
                .parse::<f64>()
                .map_err(|_| E::custom(format!("unable to parse '{}' as a number", trimmed)))
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}
