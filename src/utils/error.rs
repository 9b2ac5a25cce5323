use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: InvalidReason },

    #[error("Not found upstream: {resource}")]
    NotFound { resource: String },

    #[error("Upstream timed out after {attempts} attempt(s): {url}")]
    UpstreamTimeout { url: String, attempts: u32 },

    #[error("Upstream returned HTTP {status}: {url}")]
    UpstreamError { url: String, status: u16 },

    #[error("Upstream payload could not be processed: {message}")]
    ParseError { message: String },

    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 使用者輸入無效的原因，決定回覆的訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    NotHalfWidth,
    YearFormat,
    Malformed,
    UnknownCountry,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidReason::NotHalfWidth => "contains characters outside half-width alphanumerics",
            InvalidReason::YearFormat => "year token is not 4 digits",
            InvalidReason::Malformed => "does not match any command form",
            InvalidReason::UnknownCountry => "country name not in directory",
        };
        f.write_str(text)
    }
}

impl InvalidReason {
    pub fn user_message(&self) -> &'static str {
        match self {
            InvalidReason::NotHalfWidth => "Please use half-width alphanumerics.",
            InvalidReason::YearFormat => "The year must be 4 digits.",
            InvalidReason::Malformed => "Invalid input. Send \"help\" to see how to use this bot.",
            InvalidReason::UnknownCountry => {
                "Unknown country. Send \"all\" to see the list of countries."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    User,
    Upstream,
    Configuration,
    System,
}

impl BotError {
    /// 回覆給使用者的簡短訊息（詳細內容只寫入日誌）
    pub fn user_message(&self) -> String {
        match self {
            BotError::InvalidInput { reason } => reason.user_message().to_string(),
            BotError::NotFound { .. } => "No such country code.".to_string(),
            BotError::UpstreamTimeout { .. } => {
                "The request timed out. Please try again later.".to_string()
            }
            BotError::UpstreamError { .. } => {
                "The holiday service is having trouble. Please try again later.".to_string()
            }
            BotError::ParseError { .. } => "Invalid input.".to_string(),
            BotError::ApiError(_) | BotError::IoError(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
            BotError::ConfigError { message } => format!("Configuration error: {}", message),
            BotError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BotError::InvalidInput { .. } | BotError::NotFound { .. } => ErrorCategory::User,
            BotError::UpstreamTimeout { .. }
            | BotError::UpstreamError { .. }
            | BotError::ParseError { .. } => ErrorCategory::Upstream,
            BotError::ConfigError { .. } | BotError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BotError::ApiError(_) | BotError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn invalid(reason: InvalidReason) -> Self {
        BotError::InvalidInput { reason }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
