//! Vision-language extraction path.
//!
//! The normalized capture goes to a generative vision model together with
//! a fixed instruction prompt; the model answers with free-form text that
//! is expected to contain one JSON object. Response normalization lives in
//! [`response`], the HTTP client in [`client`].

mod client;
mod response;

pub use client::GeminiClient;
pub use response::parse_model_response;

use async_trait::async_trait;

use crate::error::VisionError;
use crate::normalize::EncodedImage;

/// Instruction prompt sent with every receipt capture.
pub const RECEIPT_PROMPT: &str = "\
Analyze this receipt image and extract the following information in JSON format:
- storeName: The name of the store.
- date: The date of the transaction (formatted as YYYY/MM/DD).
- totalAmount: The total amount paid (number only, remove currency symbols).

If any field is missing or illegible, set it to null.
Return ONLY the JSON object, no markdown formatting.";

/// Capability: call a vision model with an instruction prompt and an
/// image, returning the model's raw text response.
#[async_trait]
pub trait VisionModel {
    async fn generate(&self, prompt: &str, image: &EncodedImage) -> Result<String, VisionError>;
}
