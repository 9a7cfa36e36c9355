//! Property tests for the color-name classifier and analysis invariants.

use proptest::prelude::*;
use stylescan::annotation::{
    ColorInfo, DominantColors, ImageAnnotation, ImageProperties, LabelAnnotation, RgbColor,
    WebDetection, WebEntity,
};
use stylescan::{color_name, ClothingAnalysis};

/// Every name the classifier can produce.
const COLOR_VOCABULARY: [&str; 29] = [
    "black", "white", "gray",
    "dark red", "dark orange", "dark yellow", "dark green", "dark blue", "dark purple",
    "dark pink",
    "light red", "light orange", "light yellow", "light green", "light blue", "light purple",
    "light pink",
    "red", "orange", "yellow", "lime", "green", "teal", "cyan", "blue", "indigo", "purple",
    "pink", "magenta",
];

fn arb_label() -> impl Strategy<Value = LabelAnnotation> {
    ("[A-Za-z][A-Za-z ]{0,23}", 0.0f32..=1.0).prop_map(|(description, score)| LabelAnnotation {
        description,
        score,
        topicality: None,
    })
}

fn arb_color() -> impl Strategy<Value = ColorInfo> {
    (0u16..=255, 0u16..=255, 0u16..=255, 0.0f32..=1.0).prop_map(|(r, g, b, score)| ColorInfo {
        color: RgbColor { red: r as f32, green: g as f32, blue: b as f32, alpha: None },
        score,
        pixel_fraction: 0.1,
    })
}

fn arb_entity() -> impl Strategy<Value = WebEntity> {
    ("[A-Za-z][A-Za-z ]{0,23}", 0.0f32..=1.0)
        .prop_map(|(description, score)| WebEntity { description, score })
}

fn arb_annotation() -> impl Strategy<Value = ImageAnnotation> {
    (
        proptest::collection::vec(arb_label(), 0..10),
        proptest::collection::vec(arb_color(), 0..5),
        proptest::collection::vec(arb_entity(), 0..10),
    )
        .prop_map(|(labels, colors, entities)| ImageAnnotation {
            label_annotations: labels,
            image_properties_annotation: Some(ImageProperties {
                dominant_colors: DominantColors { colors },
            }),
            web_detection: Some(WebDetection { web_entities: entities }),
            error: None,
        })
}

fn all_unique(values: &[String]) -> bool {
    values.iter().all(|v| values.iter().filter(|o| *o == v).count() == 1)
}

proptest! {
    /// The classifier is total over the channel cube and deterministic.
    #[test]
    fn color_name_is_total_and_deterministic(
        r in 0u16..=255,
        g in 0u16..=255,
        b in 0u16..=255,
    ) {
        let first = color_name(r as f32, g as f32, b as f32);
        let second = color_name(r as f32, g as f32, b as f32);
        prop_assert_eq!(first, second);
        prop_assert!(COLOR_VOCABULARY.contains(&first));
    }

    /// Grayscale inputs never produce a hue-banded name.
    #[test]
    fn grayscale_maps_to_achromatic_names(v in 0u16..=255) {
        let name = color_name(v as f32, v as f32, v as f32);
        prop_assert!(name == "black" || name == "white" || name == "gray");
    }

    /// Aggregation keeps confidence in the unit interval and all three
    /// lists free of duplicates, for any annotation shape.
    #[test]
    fn analysis_invariants_hold(annotation in arb_annotation()) {
        let analysis = ClothingAnalysis::from_annotation(&annotation);

        prop_assert!((0.0..=1.0).contains(&analysis.confidence));
        prop_assert!(all_unique(&analysis.items));
        prop_assert!(all_unique(&analysis.colors));
        prop_assert!(all_unique(&analysis.style));
    }

    /// Aggregation is deterministic over identical input.
    #[test]
    fn analysis_is_deterministic(annotation in arb_annotation()) {
        let first = ClothingAnalysis::from_annotation(&annotation);
        let second = ClothingAnalysis::from_annotation(&annotation);
        prop_assert_eq!(first, second);
    }
}
