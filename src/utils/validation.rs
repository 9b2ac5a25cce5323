use crate::utils::error::{BotError, Result};
use url::Url;

/// 單次重試前的等待上限（毫秒）
pub const MAX_RETRY_DELAY_MS: u64 = 60_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BotError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
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
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// API 與重試設定的共同檢查，CLI 與 TOML 設定都會用到
pub fn validate_api_settings(
    base_url: &str,
    max_attempts: u32,
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
    retry_delay_ms: u64,
) -> Result<()> {
    validate_url("api_base_url", base_url)?;
    validate_range("max_attempts", max_attempts, 1, 10)?;
    validate_positive_number("connect_timeout_secs", connect_timeout_secs, 1)?;
    validate_positive_number("read_timeout_secs", read_timeout_secs, 1)?;
    // 0 代表不等待直接重試
    validate_range("retry_delay_ms", retry_delay_ms, 0, MAX_RETRY_DELAY_MS)?;
    Ok(())
}
