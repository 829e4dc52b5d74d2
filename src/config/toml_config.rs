use crate::core::ServerSettings;
use crate::utils::error::{MathError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub logging: LoggingConfig,
    pub api: ApiInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Math Operations API".to_string(),
            description: "API for performing basic math operations".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ServerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MathError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MathError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MATH_API_PORT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MathError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 環境變數 MATH_API_HOST / MATH_API_PORT 覆蓋檔案設定
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = env::var("MATH_API_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("MATH_API_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| MathError::InvalidConfigValueError {
                    field: "MATH_API_PORT".to_string(),
                    value: port.clone(),
                    reason: "Port must be an integer between 1 and 65535".to_string(),
                })?;
        }
        Ok(())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format == "json"
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_host("server.host", &self.server.host)?;
        crate::utils::validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        crate::utils::validation::validate_one_of(
            "logging.level",
            &self.logging.level,
            &["trace", "debug", "info", "warn", "error"],
        )?;
        crate::utils::validation::validate_one_of(
            "logging.format",
            &self.logging.format,
            &["compact", "json"],
        )?;
        crate::utils::validation::validate_non_empty_string("api.title", &self.api.title)?;
        Ok(())
    }
}

impl ServerSettings for ServerConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
