use regex::Regex;
use std::sync::LazyLock;

static REGEX_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("Invalid regex"));

/// 名稱是否含有空白字元（只看一般空格）
#[must_use]
pub fn needs_sanitizing(name: &str) -> bool {
    name.contains(' ')
}

/// 將每一個空白字元各自換成底線，連續空白不合併
#[must_use]
pub fn replace_whitespace(name: &str) -> String {
    REGEX_WHITESPACE.replace_all(name, "_").into_owned()
}
