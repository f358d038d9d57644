//! Date extraction for receipt text.

use super::patterns::DATE_PATTERN;
use super::FieldExtractor;

/// Date field extractor.
///
/// Takes the first date-like substring anywhere in the text and re-emits
/// it zero-padded as `YYYY/MM/DD`. Receipts that print more than one date
/// (expiry dates, loyalty-card dates) may yield the wrong one; callers get
/// whichever comes first.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let caps = DATE_PATTERN.captures(text)?;
        let year = &caps[1];
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        Some(format!("{year}/{month:02}/{day:02}"))
    }
}

/// Extract the transaction date in canonical `YYYY/MM/DD` form.
pub fn extract_date(text: &str) -> Option<String> {
    DateExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_slash() {
        assert_eq!(extract_date("2024/01/05"), Some("2024/01/05".to_string()));
    }

    #[test]
    fn test_extract_date_pads_short_month_and_day() {
        assert_eq!(extract_date("2024-1-5"), Some("2024/01/05".to_string()));
        assert_eq!(extract_date("2024.3.15"), Some("2024/03/15".to_string()));
    }

    #[test]
    fn test_extract_date_japanese_markers() {
        assert_eq!(
            extract_date("2024年1月5日"),
            Some("2024/01/05".to_string())
        );
        assert_eq!(
            extract_date("2024年12月31日"),
            Some("2024/12/31".to_string())
        );
    }

    #[test]
    fn test_extract_date_embedded_in_line() {
        let text = "お買上げ 2024/1/5 14:32 レジ01";
        assert_eq!(extract_date(text), Some("2024/01/05".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        // The transaction date precedes a loyalty-card expiry date here;
        // the extractor does not try to tell them apart.
        let text = "2024/01/05\nポイント有効期限 2025/01/31";
        assert_eq!(extract_date(text), Some("2024/01/05".to_string()));
    }

    #[test]
    fn test_no_date_returns_none() {
        assert_eq!(extract_date("合計 ¥1,500"), None);
        assert_eq!(extract_date(""), None);
        assert_eq!(extract_date("TEL 03-1234-5678"), None);
    }
}
