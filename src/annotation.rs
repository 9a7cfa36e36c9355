//! Wire types for the Vision `images:annotate` response.
//!
//! Every sub-field of an annotation is optional on the wire: a partial
//! or degraded response deserializes into empty sequences instead of
//! failing, and the aggregation layer treats those the same as absent
//! detections.

use serde::{Deserialize, Serialize};

/// Top-level response envelope, one entry per image in the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotateResponse {
    /// Per-image annotation results, in request order.
    pub responses: Vec<ImageAnnotation>,
    /// Request-level failure reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiStatus>,
}

/// Annotations the service produced for a single image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageAnnotation {
    /// Generic image labels with detection scores.
    pub label_annotations: Vec<LabelAnnotation>,
    /// Dominant color information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_properties_annotation: Option<ImageProperties>,
    /// Entities derived from visually similar web images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_detection: Option<WebDetection>,
    /// Per-image failure status. Its presence does not abort parsing; the
    /// image simply yields no detections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiStatus>,
}

/// A single label detection result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelAnnotation {
    /// Human-readable label text.
    pub description: String,
    /// Detection confidence in `[0, 1]`.
    pub score: f32,
    /// Relevancy of the label to the image as a whole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topicality: Option<f32>,
}

/// Image properties, of which only the dominant colors are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProperties {
    /// The dominant color palette of the image.
    pub dominant_colors: DominantColors,
}

/// The dominant color palette of an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DominantColors {
    /// Palette entries, most prominent first.
    pub colors: Vec<ColorInfo>,
}

/// One entry of the dominant color palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorInfo {
    /// The RGB components of the color.
    pub color: RgbColor,
    /// Relevance score of this palette entry in `[0, 1]`.
    pub score: f32,
    /// Fraction of the image's pixels covered by this color.
    pub pixel_fraction: f32,
}

/// An RGB color with channels in `[0, 255]`.
///
/// Channels the service omits default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

/// Web detection results, of which only the entities are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebDetection {
    /// Free-text entities associated with the image.
    pub web_entities: Vec<WebEntity>,
}

/// A free-text entity derived from visually similar web content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebEntity {
    /// Entity description text.
    pub description: String,
    /// Relevance score; unlike label scores this is not bounded to `[0, 1]`.
    pub score: f32,
}

/// A `google.rpc.Status`-shaped failure reported by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiStatus {
    /// Numeric status code.
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
}
