//! Styling suggestions derived from a clothing analysis.

use crate::analysis::ClothingAnalysis;

/// Derive styling suggestions from an analysis.
///
/// Rules are evaluated in a fixed order (items, then colors, then
/// style), so the output order is deterministic. Membership tests are
/// exact and case-sensitive: detection preserves the casing the vision
/// service reports, so a label stored as `"Dress"` does not trigger the
/// `"dress"` rule.
pub fn suggestions(analysis: &ClothingAnalysis) -> Vec<&'static str> {
    let mut suggestions = Vec::new();

    if analysis.items.iter().any(|item| item == "dress") {
        suggestions.push("Pair with heels and a clutch for an elegant look");
        suggestions.push("Add a denim jacket for a casual vibe");
    }

    if analysis.items.iter().any(|item| item == "jeans") {
        suggestions.push("Perfect with a t-shirt for casual outings");
        suggestions.push("Dress up with a blazer for smart casual");
    }

    if analysis.colors.iter().any(|color| color == "black") {
        suggestions.push("Black goes with everything - add colorful accessories");
    }

    if analysis.colors.iter().any(|color| color == "white") {
        suggestions.push("White is versatile - pair with any color");
    }

    if analysis.style.iter().any(|style| style == "casual") {
        suggestions.push("Great for everyday wear - comfortable and stylish");
    }

    if analysis.style.iter().any(|style| style == "formal") {
        suggestions.push("Perfect for business meetings or formal events");
    }

    suggestions
}
