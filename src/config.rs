//! Configuration for the vision client.

use url::Url;

use crate::error::{Result, VisionError};

/// The default endpoint for the Vision REST API.
pub const DEFAULT_BASE_URL: &str = "https://vision.googleapis.com/v1";

/// The environment variable holding the Vision API key.
pub const API_KEY_ENV: &str = "GOOGLE_VISION_API_KEY";

const DEFAULT_MAX_LABELS: u32 = 10;
const DEFAULT_MAX_COLORS: u32 = 5;
const DEFAULT_MAX_WEB_ENTITIES: u32 = 10;

/// Configuration parameters for a [`VisionClient`](crate::VisionClient).
///
/// Holds the API key, the endpoint base URL and the `maxResults` caps
/// requested for each annotation feature. Construct one via
/// [`VisionConfig::builder()`] or the convenience constructors.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// API key passed as the `key` query parameter.
    pub api_key: String,
    /// Base URL of the annotate endpoint.
    pub base_url: Url,
    /// Maximum label detection results per image.
    pub max_labels: u32,
    /// Maximum dominant colors per image.
    pub max_colors: u32,
    /// Maximum web entities per image.
    pub max_web_entities: u32,
}

impl VisionConfig {
    /// Create a configuration with the given API key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a configuration from the `GOOGLE_VISION_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            VisionError::Config(format!("{API_KEY_ENV} environment variable not set"))
        })?;
        Self::new(api_key)
    }

    /// Create a new builder for constructing a [`VisionConfig`].
    pub fn builder() -> VisionConfigBuilder {
        VisionConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`VisionConfig`].
#[derive(Debug, Clone)]
pub struct VisionConfigBuilder {
    api_key: String,
    base_url: String,
    max_labels: u32,
    max_colors: u32,
    max_web_entities: u32,
}

impl Default for VisionConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_labels: DEFAULT_MAX_LABELS,
            max_colors: DEFAULT_MAX_COLORS,
            max_web_entities: DEFAULT_MAX_WEB_ENTITIES,
        }
    }
}

impl VisionConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the endpoint base URL (e.g. for a proxy or a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the maximum number of label detection results.
    pub fn max_labels(mut self, max_labels: u32) -> Self {
        self.max_labels = max_labels;
        self
    }

    /// Set the maximum number of dominant colors.
    pub fn max_colors(mut self, max_colors: u32) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Set the maximum number of web entities.
    pub fn max_web_entities(mut self, max_web_entities: u32) -> Self {
        self.max_web_entities = max_web_entities;
        self
    }

    /// Build the [`VisionConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Config`] if the API key is empty or any
    /// `maxResults` cap is zero, and [`VisionError::Url`] if the base URL
    /// does not parse.
    pub fn build(self) -> Result<VisionConfig> {
        if self.api_key.is_empty() {
            return Err(VisionError::Config("API key must not be empty".to_string()));
        }
        if self.max_labels == 0 || self.max_colors == 0 || self.max_web_entities == 0 {
            return Err(VisionError::Config(
                "feature maxResults must be greater than zero".to_string(),
            ));
        }
        let base_url =
            Url::parse(&self.base_url).map_err(|source| VisionError::Url { source })?;

        Ok(VisionConfig {
            api_key: self.api_key,
            base_url,
            max_labels: self.max_labels,
            max_colors: self.max_colors,
            max_web_entities: self.max_web_entities,
        })
    }
}
