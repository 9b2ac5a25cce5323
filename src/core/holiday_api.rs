use crate::core::fetch::{FetchError, RetryingFetcher};
use crate::domain::model::{CountryDirectory, CountryEntry, HolidayRecord};
use crate::domain::ports::HttpTransport;

/// 假日 API 與國家對照表 API 的用戶端，兩者共用同一個 base URL
pub struct HolidayApiClient<T: HttpTransport> {
    base_url: String,
    fetcher: RetryingFetcher<T>,
}

impl<T: HttpTransport> HolidayApiClient<T> {
    pub fn new(base_url: &str, fetcher: RetryingFetcher<T>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn fetcher(&self) -> &RetryingFetcher<T> {
        &self.fetcher
    }

    pub fn holidays_url(&self, country_code: &str, year: i32) -> String {
        format!("{}/v1/Get/{}/{}", self.base_url, country_code, year)
    }

    pub fn countries_url(&self) -> String {
        format!("{}/v2/AvailableCountries", self.base_url)
    }

    pub async fn fetch_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, FetchError> {
        let url = self.holidays_url(country_code, year);
        tracing::info!("📅 Fetching holidays for {} {}", country_code, year);

        let holidays: Vec<HolidayRecord> = self.fetcher.fetch_json(&url).await?;
        tracing::debug!("Fetched {} holidays", holidays.len());
        Ok(holidays)
    }

    /// 404 代表對照表端點本身有問題，不是國家代碼不存在
    pub async fn fetch_country_directory(&self) -> Result<CountryDirectory, FetchError> {
        let url = self.countries_url();
        tracing::info!("🌏 Fetching country directory");

        let entries: Vec<CountryEntry> = self.fetcher.fetch_json(&url).await.map_err(|e| match e {
            FetchError::NotFound { url } => FetchError::ServerError { url, status: 404 },
            other => other,
        })?;
        let directory = CountryDirectory::new(entries);
        if directory.is_empty() {
            tracing::warn!("⚠️ Country directory is empty");
        }
        tracing::debug!("Fetched {} countries", directory.len());
        Ok(directory)
    }
}
