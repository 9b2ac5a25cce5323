pub mod fetch;
pub mod formatter;
pub mod holiday_api;
pub mod parser;
pub mod resolver;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{CountryDirectory, CountryEntry, HolidayRecord, ParsedCommand};
pub use crate::domain::ports::{Clock, ConfigProvider, HttpResponse, HttpTransport, TransportError};
pub use crate::utils::error::Result;
