//! HTTP client for the Vision `images:annotate` endpoint.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use crate::analysis::ClothingAnalysis;
use crate::annotation::{AnnotateResponse, ImageAnnotation};
use crate::batch;
use crate::config::VisionConfig;
use crate::error::{Result, VisionError};

/// Message used when the service reports a failure without one.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Encode raw image bytes into the base64 payload the annotate endpoint
/// expects.
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// A source of image annotations.
///
/// [`VisionClient`] is the production implementation; tests substitute
/// stubs. The batch layer depends on this trait rather than on the
/// concrete client.
#[async_trait]
pub trait ImageAnnotator: Send + Sync {
    /// Request annotations for a single base64-encoded image.
    async fn annotate(&self, image_base64: &str) -> Result<ImageAnnotation>;
}

// ── Annotate request body ──────────────────────────────────────────

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    requests: Vec<ImageRequest<'a>>,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    image: ImageContent<'a>,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent<'a> {
    content: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    max_results: u32,
}

// ── Client ─────────────────────────────────────────────────────────

/// A client for the Vision `images:annotate` endpoint.
///
/// Holds its configuration explicitly; construct one where the
/// application wires its dependencies and pass it down to callers.
///
/// # Example
///
/// ```rust,ignore
/// use stylescan::VisionClient;
///
/// let client = VisionClient::new("api-key")?;
/// let analysis = client.analyze(&image_base64).await?;
/// ```
pub struct VisionClient {
    http_client: reqwest::Client,
    config: VisionConfig,
}

impl VisionClient {
    /// Create a client with the given API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_config(VisionConfig::new(api_key)?))
    }

    /// Create a client from the `GOOGLE_VISION_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(VisionConfig::from_env()?))
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: VisionConfig) -> Self {
        Self { http_client: reqwest::Client::new(), config }
    }

    /// Replace the HTTP client, e.g. to impose timeouts or a proxy.
    ///
    /// The crate imposes no timeout of its own.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Return a reference to the client configuration.
    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Analyze a single base64-encoded clothing image.
    ///
    /// Issues one annotate request and aggregates the response into a
    /// [`ClothingAnalysis`].
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Transport`] when the service is
    /// unreachable and [`VisionError::Api`] when it responds with a
    /// failure. Neither is retried here; retry policy belongs to the
    /// caller.
    pub async fn analyze(&self, image_base64: &str) -> Result<ClothingAnalysis> {
        let annotation = self.annotate(image_base64).await?;
        Ok(ClothingAnalysis::from_annotation(&annotation))
    }

    /// Analyze a batch of base64-encoded images concurrently.
    ///
    /// Delegates to [`batch::analyze_batch`]: all-or-nothing, one result
    /// per image in input order.
    pub async fn analyze_batch(&self, images: &[String]) -> Result<Vec<ClothingAnalysis>> {
        batch::analyze_batch(self, images).await
    }

    fn annotate_url(&self) -> Result<Url> {
        // `Url::join` would treat the colon in "images:annotate" as a
        // scheme separator, so build the path by hand.
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/images:annotate"))
            .map_err(|source| VisionError::Url { source })?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }

    fn request_body<'a>(&self, image_base64: &'a str) -> AnnotateRequest<'a> {
        AnnotateRequest {
            requests: vec![ImageRequest {
                image: ImageContent { content: image_base64 },
                features: vec![
                    Feature { kind: "LABEL_DETECTION", max_results: self.config.max_labels },
                    Feature { kind: "IMAGE_PROPERTIES", max_results: self.config.max_colors },
                    Feature { kind: "WEB_DETECTION", max_results: self.config.max_web_entities },
                ],
            }],
        }
    }
}

#[async_trait]
impl ImageAnnotator for VisionClient {
    async fn annotate(&self, image_base64: &str) -> Result<ImageAnnotation> {
        let url = self.annotate_url()?;
        let body = self.request_body(image_base64);

        debug!(payload_len = image_base64.len(), "requesting image annotation");

        let response = self.http_client.post(url).json(&body).send().await.map_err(|source| {
            error!(error = %source, "annotate request failed");
            VisionError::Transport { source }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = service_error_message(&body);
            error!(%status, %detail, "Vision API returned an error");
            return Err(VisionError::Api { message: detail });
        }

        let annotate: AnnotateResponse = response.json().await.map_err(|source| {
            error!(error = %source, "failed to decode annotate response");
            VisionError::Decode { source }
        })?;

        // A success response with no entries degrades to an empty
        // annotation, which aggregates to an empty analysis.
        Ok(annotate.responses.into_iter().next().unwrap_or_default())
    }
}

/// Extract the service-reported message from an error response body.
///
/// Prefers the first per-image status, then the request-level status,
/// and falls back to a generic message when neither parses.
fn service_error_message(body: &str) -> String {
    serde_json::from_str::<AnnotateResponse>(body)
        .ok()
        .and_then(|response| {
            response
                .responses
                .into_iter()
                .next()
                .and_then(|annotation| annotation.error)
                .or(response.error)
                .map(|status| status.message)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
