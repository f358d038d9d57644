//! Extraction orchestrator: one image reference in, one record out.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::receipt::ReceiptRecord;
use crate::normalize::ImageNormalizer;
use crate::ocr::{join_blocks, TextRecognizer};
use crate::receipt::{HeuristicParser, ReceiptParser};
use crate::vision::{parse_model_response, VisionModel, RECEIPT_PROMPT};

/// A pluggable extraction strategy.
///
/// Every call completes with exactly one record (possibly with empty
/// fields, never with an empty `raw_text` slot) or one error. No retries
/// happen here; the capture surface decides whether to re-invoke, e.g.
/// for a retaken photo. A caller that loses interest simply drops the
/// future or its output; extractors hold no shared state between calls.
#[async_trait]
pub trait ReceiptExtractor {
    async fn extract(&self, image: &Path) -> Result<ReceiptRecord>;
}

/// Model-based strategy: normalize the capture, send it to the vision
/// model with the fixed instruction prompt, parse the JSON it returns.
pub struct VisionExtractor<M> {
    normalizer: ImageNormalizer,
    model: M,
}

impl<M: VisionModel> VisionExtractor<M> {
    pub fn new(model: M) -> Self {
        Self {
            normalizer: ImageNormalizer::new(),
            model,
        }
    }

    /// Replace the default image normalizer.
    pub fn with_normalizer(mut self, normalizer: ImageNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }
}

#[async_trait]
impl<M: VisionModel + Send + Sync> ReceiptExtractor for VisionExtractor<M> {
    async fn extract(&self, image: &Path) -> Result<ReceiptRecord> {
        let encoded = self.normalizer.normalize(image)?;
        debug!(
            "normalized capture to {}x{}, {} bytes",
            encoded.dimensions.0,
            encoded.dimensions.1,
            encoded.data.len()
        );

        let response = self.model.generate(RECEIPT_PROMPT, &encoded).await?;
        let record = parse_model_response(&response)?;

        info!(
            "vision extraction finished: date={}, total={}, store={}",
            record.date.is_some(),
            record.total_amount.is_some(),
            record.store_name.is_some()
        );
        Ok(record)
    }
}

/// On-device strategy: recognized text blocks through the heuristic
/// parser.
pub struct OcrExtractor<R> {
    recognizer: R,
    parser: HeuristicParser,
}

impl<R: TextRecognizer> OcrExtractor<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            parser: HeuristicParser::new(),
        }
    }
}

#[async_trait]
impl<R: TextRecognizer + Send + Sync> ReceiptExtractor for OcrExtractor<R> {
    async fn extract(&self, image: &Path) -> Result<ReceiptRecord> {
        let blocks = self.recognizer.recognize(image).await?;
        debug!("recognized {} text blocks", blocks.len());

        let text = join_blocks(&blocks);
        Ok(self.parser.parse(&text))
    }
}
