use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 單次 HTTP 請求的結果，狀態碼的判斷交給 fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// 連線或讀取逾時，可以重試
    #[error("timeout: {0}")]
    Timeout(String),

    #[error("transport failure: {0}")]
    Other(String),
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn max_attempts(&self) -> u32;
    fn connect_timeout(&self) -> Duration;
    fn read_timeout(&self) -> Duration;
    fn retry_delay(&self) -> Duration;
}

pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}
