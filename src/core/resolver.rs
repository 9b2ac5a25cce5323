use crate::domain::model::CountryDirectory;
use regex::Regex;
use std::sync::LazyLock;

static COUNTRY_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").unwrap());

/// 兩個英文字母的 token 直接視為國家代碼，不需查詢對照表
pub fn looks_like_country_code(token: &str) -> bool {
    COUNTRY_CODE.is_match(token)
}

/// 以代碼或國名（不分大小寫、完全一致）查詢國家代碼，找到第一筆即回傳
pub fn resolve<'a>(token: &str, directory: &'a CountryDirectory) -> Option<&'a str> {
    directory
        .entries()
        .iter()
        .find(|entry| {
            entry.code.eq_ignore_ascii_case(token) || entry.name.eq_ignore_ascii_case(token)
        })
        .map(|entry| entry.code.as_str())
}
