//! Aggregation of raw image annotations into a clothing analysis.
//!
//! [`ClothingAnalysis::from_annotation`] is a pure function over the
//! wire types: it never fails, and absent annotation sub-fields degrade
//! to empty detection lists.

use serde::{Deserialize, Serialize};

use crate::annotation::ImageAnnotation;
use crate::color::color_name;

/// Labels are classified as items when their lower-cased description
/// contains one of these terms.
const FASHION_ITEM_KEYWORDS: [&str; 39] = [
    "shirt", "dress", "pants", "jacket", "coat", "skirt", "shorts",
    "t-shirt", "blouse", "sweater", "hoodie", "jeans", "trousers",
    "shoes", "sneakers", "boots", "sandals", "heels", "flats",
    "bag", "handbag", "backpack", "purse", "wallet",
    "hat", "cap", "beanie", "sunglasses", "glasses",
    "watch", "jewelry", "necklace", "earrings", "bracelet",
    "scarf", "belt", "gloves", "tie", "bow tie",
];

/// Labels whose lower-cased description contains one of these terms are
/// collected as style descriptors, independently of item matching.
const STYLE_KEYWORDS: [&str; 12] = [
    "fashion", "style", "casual", "formal", "elegant", "sport",
    "vintage", "modern", "classic", "trendy", "chic", "urban",
];

/// Web entities only contribute style context when they mention one of
/// these terms.
const WEB_STYLE_CONTEXT: [&str; 4] = ["fashion", "style", "clothing", "outfit"];

/// Palette entries at or below this score are ignored.
const MIN_COLOR_SCORE: f32 = 0.01;

/// Web entities at or below this score are ignored.
const MIN_WEB_ENTITY_SCORE: f32 = 0.5;

/// The structured fashion analysis derived from one image annotation.
///
/// Lists are deduplicated, preserving the casing and position of the
/// first occurrence. A `ClothingAnalysis` is constructed fresh per image
/// and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingAnalysis {
    /// Detected clothing and accessory names, original casing.
    pub items: Vec<String>,
    /// Named dominant colors.
    pub colors: Vec<String>,
    /// Style descriptors from labels and web entities.
    pub style: Vec<String>,
    /// Mean score of the item-matched labels, `0.0` when none matched.
    pub confidence: f32,
}

impl ClothingAnalysis {
    /// Derive a [`ClothingAnalysis`] from a raw image annotation.
    ///
    /// A label may land in both `items` and `style` when it matches both
    /// keyword sets. Every item-matched label contributes its score to
    /// `confidence`, including labels whose text later deduplicates away.
    pub fn from_annotation(annotation: &ImageAnnotation) -> Self {
        let mut items = Vec::new();
        let mut colors = Vec::new();
        let mut style = Vec::new();
        let mut total_confidence = 0.0;
        let mut valid_detections = 0u32;

        for label in &annotation.label_annotations {
            let description = label.description.to_lowercase();

            if FASHION_ITEM_KEYWORDS.iter().any(|keyword| description.contains(keyword)) {
                items.push(label.description.clone());
                total_confidence += label.score;
                valid_detections += 1;
            }

            if STYLE_KEYWORDS.iter().any(|keyword| description.contains(keyword)) {
                style.push(label.description.clone());
            }
        }

        if let Some(properties) = &annotation.image_properties_annotation {
            for entry in &properties.dominant_colors.colors {
                if entry.score > MIN_COLOR_SCORE {
                    let rgb = &entry.color;
                    colors.push(color_name(rgb.red, rgb.green, rgb.blue).to_string());
                }
            }
        }

        if let Some(web) = &annotation.web_detection {
            for entity in &web.web_entities {
                let description = entity.description.to_lowercase();
                if entity.score > MIN_WEB_ENTITY_SCORE
                    && WEB_STYLE_CONTEXT.iter().any(|keyword| description.contains(keyword))
                {
                    style.push(entity.description.clone());
                }
            }
        }

        let confidence = if valid_detections > 0 {
            total_confidence / valid_detections as f32
        } else {
            0.0
        };

        Self {
            items: dedup_first_seen(items),
            colors: dedup_first_seen(colors),
            style: dedup_first_seen(style),
            confidence,
        }
    }
}

/// Drop repeated strings, keeping the first occurrence in place.
fn dedup_first_seen(values: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}
