use crate::domain::model::{CountryDirectory, HolidayRecord};

pub const DIRECTORY_HEADER: &str = "country:code";

pub const HELP_TEXT: &str = "How to use:\n\
all : list supported countries and their codes\n\
<code> <year> : holidays of a country in a year (e.g. JP 2020)\n\
<code> : holidays of a country this year (e.g. US)\n\
<country name> [year] : same, by country name (e.g. Japan 2021)";

/// 一行一筆 "{date}:{name}"；日本使用當地名稱，其餘使用英文名稱
pub fn format_holidays(holidays: &[HolidayRecord], country_code: &str) -> String {
    let use_local_name = country_code.eq_ignore_ascii_case("JP");

    holidays
        .iter()
        .map(|holiday| {
            let display_name = if use_local_name {
                &holiday.local_name
            } else {
                &holiday.name
            };
            format!("{}:{}", holiday.date, display_name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_directory(directory: &CountryDirectory) -> String {
    let mut lines = vec![DIRECTORY_HEADER.to_string()];
    lines.extend(
        directory
            .entries()
            .iter()
            .map(|entry| format!("{}:{}", entry.name, entry.code)),
    );
    lines.join("\n")
}
