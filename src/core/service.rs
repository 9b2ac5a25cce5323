use crate::core::formatter::{format_directory, format_holidays, HELP_TEXT};
use crate::core::holiday_api::HolidayApiClient;
use crate::core::parser::parse_command;
use crate::core::resolver::{looks_like_country_code, resolve};
use crate::domain::model::ParsedCommand;
use crate::domain::ports::{Clock, HttpTransport};
use crate::utils::error::{BotError, ErrorCategory, InvalidReason, Result};

/// 一則訊息進來、一段文字回覆出去
///
/// 不保留任何跨訊息的狀態，國家對照表每次需要時重新取得。
pub struct HolidayService<T: HttpTransport, K: Clock> {
    api: HolidayApiClient<T>,
    clock: K,
}

impl<T: HttpTransport, K: Clock> HolidayService<T, K> {
    pub fn new(api: HolidayApiClient<T>, clock: K) -> Self {
        Self { api, clock }
    }

    pub fn api(&self) -> &HolidayApiClient<T> {
        &self.api
    }

    /// 處理一則訊息；所有錯誤都在這裡轉成回覆文字
    pub async fn reply(&self, raw_text: &str) -> String {
        let command = parse_command(raw_text, self.clock.current_year());
        tracing::info!("💬 Received {:?}, parsed as {:?}", raw_text, command);

        match self.execute(command).await {
            Ok(text) => text,
            Err(e) => {
                match e.category() {
                    ErrorCategory::User => {
                        tracing::warn!("⚠️ Rejected {:?}: {}", raw_text, e);
                    }
                    category => {
                        tracing::error!(
                            "❌ Failed to answer {:?}: {} (Category: {:?})",
                            raw_text,
                            e,
                            category
                        );
                    }
                }
                e.user_message()
            }
        }
    }

    pub async fn execute(&self, command: ParsedCommand) -> Result<String> {
        match command {
            ParsedCommand::Help => Ok(HELP_TEXT.to_string()),
            ParsedCommand::ListCountries => {
                let directory = self.api.fetch_country_directory().await?;
                Ok(format_directory(&directory))
            }
            ParsedCommand::Lookup {
                country_token,
                year,
            } => {
                let country_code = self.resolve_country_code(&country_token).await?;
                let holidays = self.api.fetch_holidays(&country_code, year).await?;
                Ok(format_holidays(&holidays, &country_code))
            }
            ParsedCommand::Invalid(reason) => Err(BotError::invalid(reason)),
        }
    }

    async fn resolve_country_code(&self, country_token: &str) -> Result<String> {
        if looks_like_country_code(country_token) {
            return Ok(country_token.to_ascii_uppercase());
        }

        let directory = self.api.fetch_country_directory().await?;
        match resolve(country_token, &directory) {
            Some(code) => {
                tracing::debug!("Resolved {:?} to {}", country_token, code);
                Ok(code.to_string())
            }
            None => Err(BotError::invalid(InvalidReason::UnknownCountry)),
        }
    }
}
