//! Hex color helpers: normalization, validation, RGBA and shadow synthesis.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback for empty color input.
pub const FALLBACK_HEX: &str = "#000000";

/// Minimum vertical shadow offset in pixels.
pub const MIN_SHADOW_OFFSET: f64 = 8.0;

/// Minimum rendered shadow blur in pixels.
pub const MIN_SHADOW_BLUR: f64 = 5.0;

static HEX6: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Normalize user color input to `#rrggbb` form.
///
/// Prepends a missing `#` and expands three-digit shorthand by doubling each
/// nibble. Only empty input is replaced (with [`FALLBACK_HEX`]); any other
/// malformed string passes through with a `#` prefix. Use [`is_valid_hex6`]
/// to decide whether the result is acceptable.
pub fn normalize_hex(input: &str) -> String {
    if input.is_empty() {
        return FALLBACK_HEX.to_string();
    }

    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.chars().count() == 3 {
        let mut expanded = String::with_capacity(7);
        expanded.push('#');
        for c in digits.chars() {
            expanded.push(c);
            expanded.push(c);
        }
        return expanded;
    }

    format!("#{}", digits)
}

/// True iff `value` is `#` followed by exactly six hex digits.
pub fn is_valid_hex6(value: &str) -> bool {
    HEX6.is_match(value)
}

/// Parse a 3- or 6-digit hex color into its `(r, g, b)` channels.
///
/// Unparseable input yields black.
pub fn hex_channels(hex: &str) -> (u8, u8, u8) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let value = u32::from_str_radix(&expanded, 16).unwrap_or(0);
    (
        ((value >> 16) & 255) as u8,
        ((value >> 8) & 255) as u8,
        (value & 255) as u8,
    )
}

/// Build an `rgba(r,g,b,opacity)` string. Opacity is not clamped.
pub fn hex_to_rgba(hex: &str, opacity: f64) -> String {
    let (r, g, b) = hex_channels(hex);
    format!("rgba({},{},{},{})", r, g, b, opacity)
}

/// Build a `"<offset>px <blur>px <rgba>"` shadow descriptor.
///
/// The vertical offset is a third of the blur, never below
/// [`MIN_SHADOW_OFFSET`]; the blur never drops below [`MIN_SHADOW_BLUR`].
pub fn build_shadow_string(blur: f64, color: &str, opacity: f64) -> String {
    let offset = round_half_up(blur / 3.0).max(MIN_SHADOW_OFFSET);
    let rendered_blur = blur.max(MIN_SHADOW_BLUR);
    format!(
        "{}px {}px {}",
        offset,
        rendered_blur,
        hex_to_rgba(color, opacity)
    )
}

// Halves round toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex_shorthand() {
        assert_eq!(normalize_hex("#abc"), "#aabbcc");
        assert_eq!(normalize_hex("abc"), "#aabbcc");
    }

    #[test]
    fn test_normalize_hex_full_form() {
        assert_eq!(normalize_hex("#aabbcc"), "#aabbcc");
        assert_eq!(normalize_hex("AABBCC"), "#AABBCC");
    }

    #[test]
    fn test_normalize_hex_empty_and_malformed() {
        assert_eq!(normalize_hex(""), "#000000");
        // Malformed input is prefixed, not rejected.
        assert_eq!(normalize_hex("zz"), "#zz");
        assert!(!is_valid_hex6(&normalize_hex("zz")));
    }

    #[test]
    fn test_is_valid_hex6() {
        assert!(is_valid_hex6("#AABBCC"));
        assert!(is_valid_hex6("#0a1b2c"));
        assert!(!is_valid_hex6("abc"));
        assert!(!is_valid_hex6("#abc"));
        assert!(!is_valid_hex6("aabbcc"));
        assert!(!is_valid_hex6("#aabbccdd"));
        assert!(!is_valid_hex6("#gggggg"));
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#000000", 0.15), "rgba(0,0,0,0.15)");
        assert_eq!(hex_to_rgba("#ff8000", 1.0), "rgba(255,128,0,1)");
        assert_eq!(hex_to_rgba("fff", 0.5), "rgba(255,255,255,0.5)");
    }

    #[test]
    fn test_hex_to_rgba_does_not_clamp_opacity() {
        assert_eq!(hex_to_rgba("#010203", 1.5), "rgba(1,2,3,1.5)");
    }

    #[test]
    fn test_hex_to_rgba_garbage_is_black() {
        assert_eq!(hex_to_rgba("not a color", 0.2), "rgba(0,0,0,0.2)");
    }

    #[test]
    fn test_shadow_string_floors() {
        assert_eq!(
            build_shadow_string(0.0, "#000000", 0.15),
            "8px 5px rgba(0,0,0,0.15)"
        );
    }

    #[test]
    fn test_shadow_string_scales_with_blur() {
        // 35 / 3 = 11.67 -> 12
        assert_eq!(
            build_shadow_string(35.0, "#000000", 0.2),
            "12px 35px rgba(0,0,0,0.2)"
        );
        // 25 / 3 = 8.33 -> 8
        assert_eq!(
            build_shadow_string(25.0, "#112233", 0.15),
            "8px 25px rgba(17,34,51,0.15)"
        );
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(11.4), 11.0);
    }
}
