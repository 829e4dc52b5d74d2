use crate::utils::error::{MathError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析邊界輸入的數字字串 (CLI 參數、URL 路徑、JSON 字串值)
pub fn parse_number(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MathError::ValidationError {
            field: field_name.to_string(),
            message: "Input should be a valid number, got an empty value".to_string(),
        });
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| MathError::ValidationError {
            field: field_name.to_string(),
            message: format!("Input should be a valid number, unable to parse '{}'", trimmed),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.chars().any(char::is_whitespace) {
        return Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(MathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
