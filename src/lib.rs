pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{clock::SystemClock, http::ReqwestTransport};
pub use core::{
    fetch::RetryingFetcher, holiday_api::HolidayApiClient, parser::parse_command,
    service::HolidayService,
};
pub use utils::error::{BotError, Result};

use crate::core::ConfigProvider;

/// 依設定組出 reqwest transport、重試與系統時鐘
pub fn build_service<C: ConfigProvider>(
    config: &C,
) -> Result<HolidayService<ReqwestTransport, SystemClock>> {
    let transport = ReqwestTransport::from_config(config)?;
    let fetcher = RetryingFetcher::new(transport, config.max_attempts(), config.retry_delay());
    let api = HolidayApiClient::new(config.api_base_url(), fetcher);
    Ok(HolidayService::new(api, SystemClock))
}
