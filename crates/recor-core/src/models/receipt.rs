//! Receipt record model shared by both extraction strategies.

use serde::{Deserialize, Serialize};

use crate::receipt::rules::patterns::CANONICAL_DATE;

/// The structured result of one extraction attempt.
///
/// Every field except `raw_text` is independently optional: a pass that
/// finds nothing leaves its field `None` and never blocks the other
/// passes. Absence means "undetected", never zero or empty string.
///
/// A record is ephemeral. It is built once per attempt and handed to the
/// caller; the persistence collaborator assigns durable identity and a
/// creation timestamp when the user confirms it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Human-readable merchant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,

    /// Transaction date in canonical `YYYY/MM/DD` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Total payment amount in whole currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<u64>,

    /// Full text source used for extraction (recognized OCR text or the
    /// raw model response). Retained for audit even when every structured
    /// field is empty.
    pub raw_text: String,
}

impl ReceiptRecord {
    /// Create a record with no structured fields.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            store_name: None,
            date: None,
            total_amount: None,
            raw_text: raw_text.into(),
        }
    }

    /// Whether any structured field was detected.
    pub fn has_fields(&self) -> bool {
        self.store_name.is_some() || self.date.is_some() || self.total_amount.is_some()
    }

    /// Check the record and return any issues found.
    ///
    /// Advisory only. The presentation layer shows these to the user; they
    /// never block extraction or persistence.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(date) = &self.date {
            if !CANONICAL_DATE.is_match(date) {
                issues.push(format!("date is not in YYYY/MM/DD form: {date}"));
            }
        }

        if let Some(name) = &self.store_name {
            if name.trim().is_empty() {
                issues.push("store name is blank".to_string());
            }
        }

        if !self.has_fields() {
            issues.push("no fields could be extracted".to_string());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_keeps_raw_text() {
        let record = ReceiptRecord::empty("some text");
        assert_eq!(record.raw_text, "some text");
        assert!(!record.has_fields());
    }

    #[test]
    fn test_validate_flags_non_canonical_date() {
        let record = ReceiptRecord {
            store_name: Some("コンビニよしだ".to_string()),
            date: Some("2024-1-5".to_string()),
            total_amount: Some(1500),
            raw_text: String::new(),
        };
        let issues = record.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("2024-1-5"));
    }

    #[test]
    fn test_validate_accepts_canonical_record() {
        let record = ReceiptRecord {
            store_name: Some("コンビニよしだ".to_string()),
            date: Some("2024/01/05".to_string()),
            total_amount: Some(1500),
            raw_text: "raw".to_string(),
        };
        assert!(record.validate().is_empty());
    }

    #[test]
    fn test_validate_flags_all_fields_missing() {
        let record = ReceiptRecord::empty("");
        let issues = record.validate();
        assert_eq!(issues, vec!["no fields could be extracted".to_string()]);
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let record = ReceiptRecord::empty("text");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"raw_text":"text"}"#);
    }
}
