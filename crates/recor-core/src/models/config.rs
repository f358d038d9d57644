//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the recor pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorConfig {
    /// Vision-model call configuration.
    pub vision: VisionConfig,

    /// Image normalization configuration.
    pub image: ImageConfig,
}

impl Default for RecorConfig {
    fn default() -> Self {
        Self {
            vision: VisionConfig::default(),
            image: ImageConfig::default(),
        }
    }
}

/// Vision-model call configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Model identifier passed to the generateContent endpoint.
    pub model: String,

    /// Base URL of the generative API.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Image normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Maximum pixel width for the vision payload. Wider captures are
    /// downscaled preserving aspect ratio.
    pub max_width: u32,

    /// JPEG re-encoding quality (1 - 100).
    pub jpeg_quality: u8,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_width: 1280,
            jpeg_quality: 80,
        }
    }
}

impl RecorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecorConfig::default();
        assert_eq!(config.vision.model, "gemini-2.0-flash");
        assert_eq!(config.image.max_width, 1280);
        assert_eq!(config.image.jpeg_quality, 80);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RecorConfig =
            serde_json::from_str(r#"{"image": {"max_width": 640}}"#).unwrap();
        assert_eq!(config.image.max_width, 640);
        assert_eq!(config.image.jpeg_quality, 80);
        assert_eq!(config.vision.timeout_secs, 30);
    }
}
