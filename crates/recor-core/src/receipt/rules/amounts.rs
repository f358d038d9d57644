//! Total-amount extraction for receipt text.

use super::patterns::{AMOUNT_CANDIDATE, YEN_AMOUNT};
use super::FieldExtractor;

/// Total-label substrings in priority order. A grand-total label anywhere
/// in the text beats a subtotal label, so 合計 is tried before 小計.
/// ASCII keywords are matched case-insensitively; `total` also catches
/// `Subtotal` lines.
const TOTAL_KEYWORDS: [&str; 4] = ["合計", "総計", "total", "小計"];

/// Total-amount field extractor.
///
/// Decision chain, first success wins:
/// 1. for each keyword (priority order), the amount-candidate rule on
///    each matching line, then on the line immediately below it
/// 2. the largest currency-prefixed number anywhere in the text
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = u64;

    fn extract(&self, text: &str) -> Option<u64> {
        let lines: Vec<&str> = text.lines().collect();

        for keyword in TOTAL_KEYWORDS {
            for (idx, line) in lines.iter().enumerate() {
                if !contains_keyword(line, keyword) {
                    continue;
                }

                // Receipts commonly stack the label above the amount, so a
                // keyword line with no amount of its own defers to the
                // line below.
                if let Some(amount) = line_amount(line) {
                    return Some(amount);
                }
                if let Some(next) = lines.get(idx + 1) {
                    if let Some(amount) = line_amount(next) {
                        return Some(amount);
                    }
                }
            }
        }

        // No keyword anchored an amount anywhere: take the largest
        // currency-prefixed number in the whole text.
        YEN_AMOUNT
            .captures_iter(text)
            .filter_map(|caps| caps[1].replace(',', "").parse::<u64>().ok())
            .max()
    }
}

/// Extract the most likely total payment amount in whole currency units.
pub fn extract_total(text: &str) -> Option<u64> {
    AmountExtractor::new().extract(text)
}

fn contains_keyword(line: &str, keyword: &str) -> bool {
    if keyword.is_ascii() {
        line.to_lowercase().contains(keyword)
    } else {
        line.contains(keyword)
    }
}

/// Apply the amount-candidate rule to a single line.
///
/// Candidates containing an internal hyphen or starting with a zero are
/// rejected as phone numbers or codes. Of the survivors the last one on
/// the line wins: labels and running subtotals precede the final amount.
fn line_amount(line: &str) -> Option<u64> {
    AMOUNT_CANDIDATE
        .captures_iter(line)
        .map(|caps| caps[1].to_string())
        .filter(|candidate| !candidate.contains('-') && !candidate.starts_with('0'))
        .last()
        .and_then(|candidate| candidate.replace(',', "").parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_fallback() {
        assert_eq!(extract_total("合計\n¥1,234"), Some(1234));
    }

    #[test]
    fn test_grand_total_beats_subtotal_and_phone_number() {
        let text = "小計 500\n合計 ¥1,500\nTEL 03-1234-5678";
        assert_eq!(extract_total(text), Some(1500));
    }

    #[test]
    fn test_subtotal_used_when_no_grand_total() {
        assert_eq!(extract_total("小計 800\nお預り 1,000"), Some(800));
    }

    #[test]
    fn test_english_total_keyword() {
        assert_eq!(extract_total("TOTAL ¥2,480"), Some(2480));
        assert_eq!(extract_total("Subtotal 990"), Some(990));
    }

    #[test]
    fn test_yen_prefix_fallback_takes_maximum() {
        let text = "ドリンク ¥300\nベーカリー ¥950";
        assert_eq!(extract_total(text), Some(950));
    }

    #[test]
    fn test_last_candidate_on_line_wins() {
        assert_eq!(extract_total("小計 500 合計 1500"), Some(1500));
    }

    #[test]
    fn test_rejects_zero_leading_and_hyphenated_candidates() {
        // The only candidates on the keyword line look like a code and a
        // phone number; the amount is on the next line.
        assert_eq!(extract_total("合計 0123 03-1111-2222\n¥640"), Some(640));
    }

    #[test]
    fn test_strips_thousands_separators() {
        assert_eq!(extract_total("合計 ¥12,345円"), Some(12345));
    }

    #[test]
    fn test_no_amount_returns_none() {
        assert_eq!(extract_total("ようこそ\nまたお越しください"), None);
        assert_eq!(extract_total(""), None);
    }
}
