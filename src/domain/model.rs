use crate::utils::error::InvalidReason;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 解析後的指令，由 parser 產生、由 service 分派
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Help,
    ListCountries,
    Lookup { country_token: String, year: i32 },
    Invalid(InvalidReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    #[serde(rename = "localName")]
    pub local_name: String,
    pub name: String,
}

/// AvailableCountries 的一筆資料，v2 為 {key, value}，v3 為 {countryCode, name}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    #[serde(rename = "key", alias = "countryCode")]
    pub code: String,
    #[serde(rename = "value", alias = "name")]
    pub name: String,
}

impl CountryEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// 國家名稱與代碼的對照表，保留 API 回傳的順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDirectory {
    entries: Vec<CountryEntry>,
}

impl CountryDirectory {
    pub fn new(entries: Vec<CountryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
