pub mod toml_config;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://date.nager.at/api";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;
pub use crate::core::fetch::DEFAULT_MAX_ATTEMPTS;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_api_settings, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "holiday-bot")]
    #[command(about = "Answer public holiday questions the way the chat bot does")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_API_BASE_URL)]
        pub api_base_url: String,

        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        pub max_attempts: u32,

        #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
        pub connect_timeout_secs: u64,

        #[arg(long, default_value_t = DEFAULT_READ_TIMEOUT_SECS)]
        pub read_timeout_secs: u64,

        #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
        pub retry_delay_ms: u64,

        /// Path to a TOML configuration file; replaces the API and retry flags
        #[arg(short, long)]
        pub config: Option<String>,

        /// Answer a single message and exit instead of reading stdin
        #[arg(short, long)]
        pub text: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn api_base_url(&self) -> &str {
            &self.api_base_url
        }

        fn max_attempts(&self) -> u32 {
            self.max_attempts
        }

        fn connect_timeout(&self) -> Duration {
            Duration::from_secs(self.connect_timeout_secs)
        }

        fn read_timeout(&self) -> Duration {
            Duration::from_secs(self.read_timeout_secs)
        }

        fn retry_delay(&self) -> Duration {
            Duration::from_millis(self.retry_delay_ms)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_api_settings(
                &self.api_base_url,
                self.max_attempts,
                self.connect_timeout_secs,
                self.read_timeout_secs,
                self.retry_delay_ms,
            )
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["holiday-bot"]);

            assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
            assert_eq!(config.max_attempts(), 3);
            assert_eq!(config.connect_timeout(), Duration::from_secs(5));
            assert_eq!(config.read_timeout(), Duration::from_secs(10));
            assert_eq!(config.retry_delay(), Duration::from_millis(500));
            assert!(config.text.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_flags_override_defaults() {
            let config = CliConfig::parse_from([
                "holiday-bot",
                "--api-base-url",
                "http://localhost:9000/api",
                "--max-attempts",
                "5",
                "--retry-delay-ms",
                "0",
                "--text",
                "JP 2020",
            ]);

            assert_eq!(config.api_base_url(), "http://localhost:9000/api");
            assert_eq!(config.max_attempts(), 5);
            assert!(config.retry_delay().is_zero());
            assert_eq!(config.text.as_deref(), Some("JP 2020"));
        }

        #[test]
        fn test_zero_attempts_fails_validation() {
            let config = CliConfig::parse_from(["holiday-bot", "--max-attempts", "0"]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_excessive_retry_delay_fails_validation() {
            let config = CliConfig::parse_from(["holiday-bot", "--retry-delay-ms", "120000"]);
            assert!(config.validate().is_err());
        }
    }
}
