//! Heuristic receipt parser combining the three field-extraction passes.

use tracing::debug;

use crate::models::receipt::ReceiptRecord;

use super::rules::{extract_date, extract_store_name, extract_total};

/// Trait for receipt text parsing.
pub trait ReceiptParser {
    /// Parse a record from recognized text. Field misses are not errors;
    /// the record always carries the full input as `raw_text`.
    fn parse(&self, text: &str) -> ReceiptRecord;
}

/// Regex-driven parser for recognized receipt text.
///
/// Runs the date, total-amount, and store-name passes independently.
/// Pure and deterministic: identical text yields identical records.
pub struct HeuristicParser;

impl HeuristicParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for HeuristicParser {
    fn parse(&self, text: &str) -> ReceiptRecord {
        debug!("parsing {} characters of recognized text", text.len());

        let date = extract_date(text);
        let total_amount = extract_total(text);
        let store_name = extract_store_name(text);

        debug!(
            "heuristic passes finished: date={}, total={}, store={}",
            date.is_some(),
            total_amount.is_some(),
            store_name.is_some()
        );

        ReceiptRecord {
            store_name,
            date,
            total_amount,
            raw_text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "コンビニよしだ\n東京都新宿区1-2-3\nTEL 03-1234-5678\n2024/01/05 14:32\n小計 ¥1,380\n合計 ¥1,500\nお預り ¥2,000";

    #[test]
    fn test_parse_full_receipt() {
        let record = HeuristicParser::new().parse(SAMPLE);

        assert_eq!(record.store_name, Some("コンビニよしだ".to_string()));
        assert_eq!(record.date, Some("2024/01/05".to_string()));
        assert_eq!(record.total_amount, Some(1500));
        assert_eq!(record.raw_text, SAMPLE);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = HeuristicParser::new();
        assert_eq!(parser.parse(SAMPLE), parser.parse(SAMPLE));
    }

    #[test]
    fn test_field_misses_are_independent() {
        let parser = HeuristicParser::new();

        // Only a store name: no date-like substring, no amount anywhere.
        let record = parser.parse("コンビニよしだ\nまたお越しください");
        assert_eq!(record.store_name, Some("コンビニよしだ".to_string()));
        assert_eq!(record.date, None);
        assert_eq!(record.total_amount, None);

        // Only a date: every line starts with a digit, nothing is priced.
        let record = parser.parse("2024/01/05 14:32");
        assert_eq!(record.store_name, None);
        assert_eq!(record.date, Some("2024/01/05".to_string()));
        assert_eq!(record.total_amount, None);
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let record = HeuristicParser::new().parse("");
        assert_eq!(record.store_name, None);
        assert_eq!(record.date, None);
        assert_eq!(record.total_amount, None);
        assert_eq!(record.raw_text, "");
    }
}
