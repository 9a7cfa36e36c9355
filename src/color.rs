//! RGB to color-name classification.
//!
//! Buckets an RGB color into a small vocabulary of human-readable names
//! via hue, saturation and lightness. Near-grayscale colors resolve to
//! black/white/gray; very dark and very light colors use a coarse
//! seven-bucket hue table, mid-lightness colors a finer twelve-bucket
//! table.

/// Map an RGB color (channels in `[0, 255]`) to a coarse color name.
///
/// Total and deterministic: every input maps to exactly one name.
///
/// # Example
///
/// ```
/// use stylescan::color_name;
///
/// assert_eq!(color_name(0.0, 0.0, 0.0), "black");
/// assert_eq!(color_name(255.0, 0.0, 0.0), "red");
/// ```
pub fn color_name(r: f32, g: f32, b: f32) -> &'static str {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Hue in degrees, rounded to the nearest integer. The float `%`
    // preserves sign, so a negative result wraps into [300, 360).
    let mut hue = 0.0;
    if delta != 0.0 {
        hue = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
    }
    let mut hue = (hue * 60.0).round() as i32;
    if hue < 0 {
        hue += 360;
    }

    let lightness = (max + min) / 2.0;
    let saturation =
        if delta == 0.0 { 0.0 } else { delta / (1.0 - (2.0 * lightness - 1.0).abs()) };

    if saturation < 0.1 {
        if lightness < 0.2 {
            return "black";
        }
        if lightness > 0.8 {
            return "white";
        }
        return "gray";
    }

    if lightness < 0.2 {
        if hue < 20 || hue > 340 {
            return "dark red";
        }
        if hue < 40 {
            return "dark orange";
        }
        if hue < 60 {
            return "dark yellow";
        }
        if hue < 120 {
            return "dark green";
        }
        if hue < 240 {
            return "dark blue";
        }
        if hue < 280 {
            return "dark purple";
        }
        return "dark pink";
    }

    if lightness > 0.8 {
        if hue < 20 || hue > 340 {
            return "light red";
        }
        if hue < 40 {
            return "light orange";
        }
        if hue < 60 {
            return "light yellow";
        }
        if hue < 120 {
            return "light green";
        }
        if hue < 240 {
            return "light blue";
        }
        if hue < 280 {
            return "light purple";
        }
        return "light pink";
    }

    if hue < 20 || hue > 340 {
        return "red";
    }
    if hue < 40 {
        return "orange";
    }
    if hue < 60 {
        return "yellow";
    }
    if hue < 80 {
        return "lime";
    }
    if hue < 120 {
        return "green";
    }
    if hue < 140 {
        return "teal";
    }
    if hue < 160 {
        return "cyan";
    }
    if hue < 200 {
        return "blue";
    }
    if hue < 240 {
        return "indigo";
    }
    if hue < 280 {
        return "purple";
    }
    if hue < 320 {
        return "pink";
    }
    "magenta"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_fixed_points() {
        assert_eq!(color_name(0.0, 0.0, 0.0), "black");
        assert_eq!(color_name(255.0, 255.0, 255.0), "white");
        assert_eq!(color_name(128.0, 128.0, 128.0), "gray");
    }

    #[test]
    fn saturated_primaries() {
        assert_eq!(color_name(255.0, 0.0, 0.0), "red");
        // Pure green sits exactly at hue 120, the first degree of the
        // teal band; the green band ends at 119.
        assert_eq!(color_name(0.0, 255.0, 0.0), "teal");
        assert_eq!(color_name(50.0, 255.0, 0.0), "green");
    }

    #[test]
    fn lime_green_boundary_is_exclusive() {
        // (174, 255, 0) rounds to hue 79, (170, 255, 0) to exactly 80.
        assert_eq!(color_name(174.0, 255.0, 0.0), "lime");
        assert_eq!(color_name(170.0, 255.0, 0.0), "green");
    }

    #[test]
    fn low_lightness_uses_coarse_buckets() {
        // (0, 0, 90): hue 240, lightness ~0.18. The dark table has no
        // indigo bucket; 240 falls into dark purple.
        assert_eq!(color_name(0.0, 0.0, 90.0), "dark purple");
        // (70, 20, 20): hue 0 at lightness ~0.18.
        assert_eq!(color_name(70.0, 20.0, 20.0), "dark red");
    }

    #[test]
    fn high_lightness_uses_coarse_buckets() {
        // (200, 255, 200): hue 120, lightness ~0.89, saturation ~0.49.
        // The light table folds everything in [120, 240) into light blue.
        assert_eq!(color_name(200.0, 255.0, 200.0), "light blue");
        // (255, 200, 200): hue 0 at high lightness.
        assert_eq!(color_name(255.0, 200.0, 200.0), "light red");
    }

    #[test]
    fn negative_hue_wraps_into_red_band() {
        // (255, 0, 40): blue exceeds green with red as max, so the raw
        // hue is negative and wraps above 340.
        assert_eq!(color_name(255.0, 0.0, 40.0), "red");
    }

    #[test]
    fn near_gray_threshold_is_saturation_bound() {
        // Saturation just below 0.1 resolves to gray regardless of hue.
        assert_eq!(color_name(130.0, 120.0, 120.0), "gray");
    }
}
