use holiday_bot::config::toml_config::TomlConfig;
use holiday_bot::core::Clock;
use holiday_bot::{
    build_service, HolidayApiClient, HolidayService, ReqwestTransport, RetryingFetcher,
};
use httpmock::prelude::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

struct FixedYear(i32);

impl Clock for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

fn service_for(
    server: &MockServer,
    max_attempts: u32,
    read_timeout: Duration,
) -> HolidayService<ReqwestTransport, FixedYear> {
    let transport = ReqwestTransport::new(Duration::from_secs(5), read_timeout).unwrap();
    let fetcher = RetryingFetcher::new(transport, max_attempts, Duration::ZERO);
    let api = HolidayApiClient::new(&server.url("/api"), fetcher);
    HolidayService::new(api, FixedYear(2020))
}

#[tokio::test]
async fn test_end_to_end_us_holidays() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/US/2021");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"date": "2021-01-01", "localName": "New Year's Day", "name": "New Year's Day", "countryCode": "US"},
                {"date": "2021-12-24", "localName": "Christmas Day", "name": "Christmas Day", "countryCode": "US"}
            ]));
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("US 2021").await;

    api_mock.assert();
    assert_eq!(reply, "2021-01-01:New Year's Day\n2021-12-24:Christmas Day");
}

#[tokio::test]
async fn test_japan_uses_local_names_and_caller_year() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/JP/2020");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"date": "2020-01-01", "localName": "元日", "name": "New Year's Day"},
                {"date": "2020-01-13", "localName": "成人の日", "name": "Coming of Age Day"}
            ]));
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("ｊｐ").await;

    api_mock.assert();
    assert_eq!(reply, "2020-01-01:元日\n2020-01-13:成人の日");
}

#[tokio::test]
async fn test_country_name_is_resolved_via_directory() {
    let server = MockServer::start();
    let directory_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/AvailableCountries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"key": "JP", "value": "Japan"},
                {"key": "US", "value": "United States"}
            ]));
    });
    let holidays_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/US/2022");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"date": "2022-07-04", "localName": "Independence Day", "name": "Independence Day"}
            ]));
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("United States 2022").await;

    directory_mock.assert();
    holidays_mock.assert();
    assert_eq!(reply, "2022-07-04:Independence Day");
}

#[tokio::test]
async fn test_list_countries() {
    let server = MockServer::start();
    let directory_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/AvailableCountries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"key": "JP", "value": "Japan"},
                {"key": "US", "value": "United States"}
            ]));
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("all").await;

    directory_mock.assert();
    assert_eq!(reply, "country:code\nJapan:JP\nUnited States:US");
}

#[tokio::test]
async fn test_unknown_code_is_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/ZZ/2020");
        then.status(404);
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("ZZ 2020").await;

    api_mock.assert_hits(1);
    assert_eq!(reply, "No such country code.");
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/JP/2020");
        then.status(503);
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("JP 2020").await;

    api_mock.assert_hits(1);
    assert_eq!(
        reply,
        "The holiday service is having trouble. Please try again later."
    );
}

#[tokio::test]
async fn test_slow_upstream_times_out_after_all_attempts() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/JP/2020");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(serde_json::json!([]));
    });

    let service = service_for(&server, 2, Duration::from_millis(200));
    let reply = service.reply("JP 2020").await;

    api_mock.assert_hits(2);
    assert_eq!(reply, "The request timed out. Please try again later.");
}

#[tokio::test]
async fn test_malformed_payload_is_generic_invalid_input() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/JP/2020");
        then.status(200).body("<html>maintenance</html>");
    });

    let service = service_for(&server, 3, Duration::from_secs(10));
    let reply = service.reply("JP 2020").await;

    api_mock.assert_hits(1);
    assert_eq!(reply, "Invalid input.");
}

#[tokio::test]
async fn test_build_service_from_toml_config() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/Get/US/2021");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"date": "2021-11-25", "localName": "Thanksgiving Day", "name": "Thanksgiving Day"}
            ]));
    });

    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = format!(
        "[api]\nbase_url = \"{}\"\n\n[retry]\nmax_attempts = 2\ndelay_ms = 0\n",
        server.url("/api")
    );
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    let service = build_service(&config).unwrap();
    let reply = service.reply("us 2021").await;

    api_mock.assert();
    assert_eq!(reply, "2021-11-25:Thanksgiving Day");
}
