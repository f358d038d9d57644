//! Normalization of vision-model responses into receipt records.

use serde::Deserialize;
use serde_json::Value;

use crate::error::VisionError;
use crate::models::receipt::ReceiptRecord;
use crate::receipt::rules::extract_date;
use crate::receipt::rules::patterns::CANONICAL_DATE;

/// Wire shape of the JSON object the model is instructed to return.
#[derive(Debug, Deserialize)]
struct ModelFields {
    #[serde(default, rename = "storeName")]
    store_name: Option<String>,

    #[serde(default)]
    date: Option<String>,

    #[serde(default, rename = "totalAmount")]
    total_amount: Option<Value>,
}

/// Parse a raw model response into a receipt record.
///
/// The raw response text is always retained as `raw_text`. Fields that
/// are absent, null, blank, or fail numeric coercion come back as `None`,
/// never as zero or an empty string.
///
/// # Errors
///
/// [`VisionError::MalformedResponse`] if the text is not a JSON object
/// after fence stripping; the unparsed text rides along for diagnostics.
pub fn parse_model_response(raw: &str) -> Result<ReceiptRecord, VisionError> {
    let stripped = strip_fences(raw);
    let fields: ModelFields =
        serde_json::from_str(&stripped).map_err(|source| VisionError::MalformedResponse {
            raw: raw.to_string(),
            source,
        })?;

    Ok(ReceiptRecord {
        store_name: fields.store_name.filter(|name| !name.trim().is_empty()),
        date: fields.date.and_then(|date| normalize_date(&date)),
        total_amount: fields.total_amount.and_then(coerce_amount),
        raw_text: raw.to_string(),
    })
}

/// Strip the markdown code fences the model sometimes wraps around its
/// JSON despite being told not to.
fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn normalize_date(date: &str) -> Option<String> {
    let date = date.trim();
    if CANONICAL_DATE.is_match(date) {
        return Some(date.to_string());
    }
    // The model occasionally answers with a different separator or an
    // unpadded month; run it through the same normalization the OCR path
    // uses. If that fails too, the field is undetected.
    extract_date(date)
}

fn coerce_amount(value: Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}
