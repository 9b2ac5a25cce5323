use crate::domain::ports::{HttpTransport, TransportError};
use crate::utils::error::BotError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP 404 from {url}")]
    NotFound { url: String },

    #[error("HTTP {status} from {url}")]
    ServerError { url: String, status: u16 },

    #[error("{url} timed out on all {attempts} attempt(s)")]
    TimeoutExhausted { url: String, attempts: u32 },

    #[error("could not process response from {url}: {message}")]
    ParseError { url: String, message: String },
}

impl From<FetchError> for BotError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound { url } => BotError::NotFound { resource: url },
            FetchError::ServerError { url, status } => BotError::UpstreamError { url, status },
            FetchError::TimeoutExhausted { url, attempts } => {
                BotError::UpstreamTimeout { url, attempts }
            }
            FetchError::ParseError { url, message } => BotError::ParseError {
                message: format!("{}: {}", url, message),
            },
        }
    }
}

/// 只在逾時時重試的 GET
///
/// 404 與其他非 2xx 狀態碼不重試；逾時則在 `max_attempts` 次內重試，
/// 每次重試前等待 `retry_delay × 已嘗試次數`。
pub struct RetryingFetcher<T: HttpTransport> {
    transport: T,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<T: HttpTransport> RetryingFetcher<T> {
    pub fn new(transport: T, max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            transport,
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            tracing::debug!("📡 GET {} (attempt {}/{})", url, attempt, self.max_attempts);

            match self.transport.get(url).await {
                Ok(response) if (200..300).contains(&response.status) => {
                    tracing::debug!("API response status: {}", response.status);
                    return Ok(response.body);
                }
                Ok(response) if response.status == 404 => {
                    tracing::debug!("API response status: 404, not retrying");
                    return Err(FetchError::NotFound {
                        url: url.to_string(),
                    });
                }
                Ok(response) => {
                    tracing::warn!("⚠️ {} returned HTTP {}", url, response.status);
                    return Err(FetchError::ServerError {
                        url: url.to_string(),
                        status: response.status,
                    });
                }
                Err(TransportError::Timeout(detail)) => {
                    tracing::warn!(
                        "⏱️ {} timed out (attempt {}/{}): {}",
                        url,
                        attempt,
                        self.max_attempts,
                        detail
                    );
                    if attempt >= self.max_attempts {
                        return Err(FetchError::TimeoutExhausted {
                            url: url.to_string(),
                            attempts: attempt,
                        });
                    }
                    if !self.retry_delay.is_zero() {
                        tokio::time::sleep(self.retry_delay * attempt).await;
                    }
                }
                Err(TransportError::Other(detail)) => {
                    return Err(FetchError::ParseError {
                        url: url.to_string(),
                        message: detail,
                    });
                }
            }
        }
    }

    pub async fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        let body = self.fetch(url).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::ParseError {
            url: url.to_string(),
            message: format!("JSON decode failed: {}", e),
        })
    }
}
