//! Text-recognition collaborator seam.
//!
//! The capture surface owns the actual OCR engine (on-device recognition
//! in the mobile app). The core only defines the contract: an ordered
//! sequence of recognized text blocks for an image reference. Block texts
//! are joined with newlines, preserving block order, before the heuristic
//! passes run.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// A recognized block of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Join block texts with newline separators, preserving block order.
pub fn join_blocks(blocks: &[TextBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Capability: recognize text blocks from an image reference.
#[async_trait]
pub trait TextRecognizer {
    async fn recognize(&self, image: &Path) -> Result<Vec<TextBlock>, OcrError>;
}
