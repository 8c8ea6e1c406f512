//! Display locale selection

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en-US";

/// Pick the display locale.
///
/// A configured locale other than `en-US` always wins. With `en-US` (or nothing)
/// configured, the negotiated language decides between Chinese, Japanese and English.
pub fn resolve_locale(configured: Option<&str>, negotiated: &str) -> String {
    match configured {
        Some(lang) if lang != DEFAULT_LOCALE && !lang.is_empty() => lang.to_string(),
        _ => {
            if negotiated.contains("zh") {
                "zh-CN".to_string()
            } else if negotiated.contains("ja") {
                "ja".to_string()
            } else {
                DEFAULT_LOCALE.to_string()
            }
        }
    }
}
