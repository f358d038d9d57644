//! Error types for the recor-core library.

use thiserror::Error;

/// Main error type for the recor library.
#[derive(Error, Debug)]
pub enum RecorError {
    /// Vision-model extraction error.
    #[error("vision error: {0}")]
    Vision(#[from] VisionError),

    /// Text-recognition collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the vision-language call and its response handling.
#[derive(Error, Debug)]
pub enum VisionError {
    /// The HTTP request itself failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service error: {0}")]
    Api(String),

    /// The service answered but produced no candidate text.
    #[error("model returned no candidates")]
    EmptyResponse,

    /// The candidate text was not a JSON object after fence stripping.
    ///
    /// The unparsed response rides along in `raw` for diagnostics.
    #[error("malformed model response: {source}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the external text-recognition collaborator.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the recor library.
pub type Result<T> = std::result::Result<T, RecorError>;
