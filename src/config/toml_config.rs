use crate::config::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_READ_TIMEOUT_SECS,
    DEFAULT_RETRY_DELAY_MS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{validate_api_settings, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub retry: Option<RetryConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout_seconds: Option<u64>,
    pub read_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BotError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOLIDAY_API_BASE_URL})，找不到時保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn connect_timeout_secs(&self) -> u64 {
        self.api
            .connect_timeout_seconds
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS)
    }

    pub fn read_timeout_secs(&self) -> u64 {
        self.api
            .read_timeout_seconds
            .unwrap_or(DEFAULT_READ_TIMEOUT_SECS)
    }

    pub fn retry_delay_ms(&self) -> u64 {
        self.retry
            .as_ref()
            .and_then(|r| r.delay_ms)
            .unwrap_or(DEFAULT_RETRY_DELAY_MS)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn max_attempts(&self) -> u32 {
        self.retry
            .as_ref()
            .and_then(|r| r.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs())
    }

    fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs())
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_api_settings(
            &self.api.base_url,
            self.max_attempts(),
            self.connect_timeout_secs(),
            self.read_timeout_secs(),
            self.retry_delay_ms(),
        )
    }
}
