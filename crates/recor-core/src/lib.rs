//! Core library for receipt capture processing.
//!
//! This crate provides:
//! - Image normalization for vision-model payloads
//! - Vision-language extraction via the Gemini `generateContent` API
//! - Heuristic receipt field extraction (date, total amount, store name)
//! - The receipt record model shared by both extraction strategies

pub mod error;
pub mod models;
pub mod normalize;
pub mod ocr;
pub mod pipeline;
pub mod receipt;
pub mod vision;

pub use error::{OcrError, RecorError, Result, VisionError};
pub use models::config::RecorConfig;
pub use models::receipt::ReceiptRecord;
pub use normalize::{EncodedImage, ImageNormalizer};
pub use ocr::{TextBlock, TextRecognizer};
pub use pipeline::{OcrExtractor, ReceiptExtractor, VisionExtractor};
pub use receipt::{HeuristicParser, ReceiptParser};
pub use vision::{parse_model_response, GeminiClient, VisionModel, RECEIPT_PROMPT};
