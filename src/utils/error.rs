use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Non-finite input: {value}")]
    NonFiniteInput { value: f64 },

    #[error("Conversion error: {message}")]
    ConversionError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MathError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MathError::NonFiniteInput { .. } | MathError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            MathError::ConversionError { .. } => ErrorCategory::Arithmetic,
            MathError::ConfigValidationError { .. }
            | MathError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MathError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Arithmetic | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MathError::NonFiniteInput { value } => {
                format!("Input {} is not a finite number", value)
            }
            MathError::ConversionError { message } => {
                format!("Could not convert the result: {}", message)
            }
            MathError::ValidationError { field, message } => {
                format!("Invalid value for '{}': {}", field, message)
            }
            MathError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            MathError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' for '{}' is invalid: {}", value, field, reason)
            }
            MathError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MathError::NonFiniteInput { .. } => "Use finite numbers; NaN and infinity are not accepted",
            MathError::ConversionError { .. } => "Retry with simpler decimal inputs",
            MathError::ValidationError { .. } => "Provide two numeric values",
            MathError::ConfigValidationError { .. }
            | MathError::InvalidConfigValueError { .. } => "Check the TOML configuration file",
            MathError::IoError(_) => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, MathError>;
