use crate::domain::model::ParsedCommand;
use crate::utils::error::InvalidReason;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HALF_WIDTH_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]+$").unwrap());
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static COUNTRY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+( [A-Za-z]+)*$").unwrap());

/// 全形英數字與全形空白轉為半形，並去除前後空白
///
/// NFKC 只套用在 U+FF01..U+FF5E 與 U+3000，其他字元（上標、圈字等）保持原樣。
pub fn normalize(raw_text: &str) -> String {
    let mut folded = String::with_capacity(raw_text.len());
    for c in raw_text.chars() {
        if is_full_width(c) {
            folded.extend(std::iter::once(c).nfkc());
        } else {
            folded.push(c);
        }
    }
    folded.trim().to_string()
}

fn is_full_width(c: char) -> bool {
    matches!(c, '\u{FF01}'..='\u{FF5E}' | '\u{3000}')
}

/// 將使用者輸入解析為指令
///
/// `current_year` 由呼叫端的時鐘提供，只有在輸入沒有年份時使用。
pub fn parse_command(raw_text: &str, current_year: i32) -> ParsedCommand {
    let text = normalize(raw_text);

    if text.is_empty() {
        return ParsedCommand::Invalid(InvalidReason::Malformed);
    }

    if !HALF_WIDTH_ONLY.is_match(&text) {
        return ParsedCommand::Invalid(InvalidReason::NotHalfWidth);
    }

    if text.eq_ignore_ascii_case("help") {
        return ParsedCommand::Help;
    }

    if text.eq_ignore_ascii_case("all") {
        return ParsedCommand::ListCountries;
    }

    if text.chars().any(|c| c.is_ascii_digit()) {
        return parse_country_and_year(&text);
    }

    match collapse_whitespace(&text) {
        Some(country_token) => ParsedCommand::Lookup {
            country_token,
            year: current_year,
        },
        None => ParsedCommand::Invalid(InvalidReason::Malformed),
    }
}

// 「國家 年份」格式，以最後一段空白切開
fn parse_country_and_year(text: &str) -> ParsedCommand {
    let Some((country_part, year_token)) = text.rsplit_once(char::is_whitespace) else {
        return ParsedCommand::Invalid(InvalidReason::Malformed);
    };

    // 國家部分先檢查，"JP 2020 extra" 這類輸入不應回報年份錯誤
    let Some(country_token) = collapse_whitespace(country_part) else {
        return ParsedCommand::Invalid(InvalidReason::Malformed);
    };

    if !YEAR.is_match(year_token) {
        return ParsedCommand::Invalid(InvalidReason::YearFormat);
    }

    let year = match year_token.parse::<i32>() {
        Ok(year) => year,
        Err(_) => return ParsedCommand::Invalid(InvalidReason::YearFormat),
    };

    ParsedCommand::Lookup { country_token, year }
}

fn collapse_whitespace(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if COUNTRY_NAME.is_match(&collapsed) {
        Some(collapsed)
    } else {
        None
    }
}
