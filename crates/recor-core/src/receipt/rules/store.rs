//! Store-name extraction for receipt text.

use super::FieldExtractor;

/// Boilerplate substrings that disqualify a line from being the store
/// name: receipt/copy/credit-slip markers and phone, fax, and
/// store-number labels. ASCII entries are compared case-insensitively.
const DENYLIST: [&str; 10] = [
    "領収書",
    "領収証",
    "レシート",
    "クレジット",
    "売上票",
    "お客様控",
    "tel",
    "fax",
    "電話",
    "店番",
];

/// Store-name field extractor.
///
/// Returns the first non-empty trimmed line that is not boilerplate and
/// does not start with a digit (dates, phone numbers, and barcodes are
/// often printed above the merchant name).
pub struct StoreNameExtractor;

impl StoreNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StoreNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for StoreNameExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .find(|line| {
                !line.is_empty() && !starts_with_digit(line) && !is_boilerplate(line)
            })
            .map(str::to_string)
    }
}

/// Extract the merchant name from recognized receipt text.
pub fn extract_store_name(text: &str) -> Option<String> {
    StoreNameExtractor::new().extract(text)
}

fn is_boilerplate(line: &str) -> bool {
    let lowered = line.to_lowercase();
    DENYLIST.iter().any(|marker| lowered.contains(marker))
}

fn starts_with_digit(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || ('０'..='９').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_clean_line_is_store_name() {
        let text = "レシート\n2024/01/05\nTEL 03-1234-5678\n  コンビニよしだ  \n東京都新宿区1-2-3";
        assert_eq!(
            extract_store_name(text),
            Some("コンビニよしだ".to_string())
        );
    }

    #[test]
    fn test_skips_blank_lines() {
        assert_eq!(
            extract_store_name("\n\n  スーパーまるや\n"),
            Some("スーパーまるや".to_string())
        );
    }

    #[test]
    fn test_skips_digit_leading_lines() {
        let text = "0123456789012\n１２３店\nパン工房こむぎ";
        assert_eq!(extract_store_name(text), Some("パン工房こむぎ".to_string()));
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        let text = "Tel 03-1111-2222\nFAX 03-3333-4444\nカフェひだまり";
        assert_eq!(extract_store_name(text), Some("カフェひだまり".to_string()));
    }

    #[test]
    fn test_all_lines_filtered_returns_none() {
        let text = "領収書\n2024/01/05\nTEL 03-1234-5678";
        assert_eq!(extract_store_name(text), None);
        assert_eq!(extract_store_name(""), None);
    }
}
