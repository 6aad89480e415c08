//! Color parsing and hex → HSL design-token conversion

use once_cell::sync::Lazy;
use regex::Regex;

/// Token emitted for gradient values, which have no single HSL equivalent
pub const GRADIENT_FALLBACK: &str = "0 0% 100%";

static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());
static GRADIENT_EXPR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:repeating-)?(?:linear|radial|conic)-gradient\([^()\n]*(?:\([^()\n]*\)[^()\n]*)*\)$")
        .unwrap()
});
static HEX_STOP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{6}\b").unwrap());

/// HSL color. Hue in degrees, saturation and lightness in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Convert 8-bit RGB channels to HSL
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: h / 6.0 * 360.0,
            s,
            l,
        }
    }

    /// Space-separated token as consumed by `hsl(var(--token))`
    pub fn to_token(&self) -> String {
        format!(
            "{} {}% {}%",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.l * 100.0).round()
        )
    }
}

/// Whether the value is a CSS gradient rather than a flat color
pub fn is_gradient(value: &str) -> bool {
    value.contains("gradient")
}

/// Strictly parse `#rgb` / `#rrggbb` (leading `#` optional)
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if !HEX_COLOR_REGEX.is_match(value) {
        return None;
    }
    Some(channels(value))
}

/// Whether the value is a single well-formed CSS gradient function
pub fn is_gradient_expression(value: &str) -> bool {
    GRADIENT_EXPR_REGEX.is_match(value.trim())
}

/// Accept the values the palette editor allows: hex colors and gradient
/// expressions
pub fn is_valid_color(value: &str) -> bool {
    parse_hex(value).is_some() || is_gradient_expression(value)
}

/// Parse channels without validation; unreadable digits count as zero
fn channels(value: &str) -> (u8, u8, u8) {
    let digits = value.trim().trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };

    (channel(0..2), channel(2..4), channel(4..6))
}

/// Convert a palette value to an HSL design token.
///
/// Gradients map to [`GRADIENT_FALLBACK`].
pub fn hex_to_hsl(value: &str) -> String {
    if is_gradient(value) {
        return GRADIENT_FALLBACK.to_string();
    }

    let (r, g, b) = channels(value);
    Hsl::from_rgb(r, g, b).to_token()
}

/// RGB used to draw a swatch for a palette value.
///
/// Gradients are represented by their first hex stop.
pub fn swatch_rgb(value: &str) -> Option<(u8, u8, u8)> {
    if is_gradient(value) {
        return HEX_STOP_REGEX
            .find(value)
            .map(|stop| channels(stop.as_str()));
    }
    parse_hex(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_hsl_known_values() {
        assert_eq!(hex_to_hsl("#FFFFFF"), "0 0% 100%");
        assert_eq!(hex_to_hsl("#000000"), "0 0% 0%");
        assert_eq!(hex_to_hsl("#FF0000"), "0 100% 50%");
        assert_eq!(hex_to_hsl("#3B82F6"), "217 91% 60%");
    }

    #[test]
    fn test_hex_to_hsl_without_hash_and_short_form() {
        assert_eq!(hex_to_hsl("00ff00"), "120 100% 50%");
        assert_eq!(hex_to_hsl("#00f"), "240 100% 50%");
    }

    #[test]
    fn test_gradient_falls_back_to_white() {
        assert_eq!(
            hex_to_hsl("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
            GRADIENT_FALLBACK
        );
        assert_eq!(hex_to_hsl("radial-gradient(#000, #fff)"), GRADIENT_FALLBACK);
    }

    #[test]
    fn test_unparsable_digits_count_as_zero() {
        assert_eq!(hex_to_hsl("#zzzzzz"), "0 0% 0%");
        assert_eq!(hex_to_hsl(""), "0 0% 0%");
    }

    #[test]
    fn test_parse_hex_is_strict() {
        assert_eq!(parse_hex("#1a2B3c"), Some((0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex("#abc"), Some((0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_hex("#abcd"), None);
        assert_eq!(parse_hex("blue"), None);
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#ffffff"));
        assert!(is_valid_color("linear-gradient(90deg, #000000, #ffffff)"));
        assert!(!is_valid_color("#12"));
        assert!(!is_valid_color("red"));
        assert!(is_valid_color("radial-gradient(circle, rgba(0,0,0,0.5) 0%, #fff 100%)"));
        assert!(is_valid_color("repeating-conic-gradient(#000 0 25%, #fff 0 50%)"));

        // Mentioning "gradient" is not enough
        assert!(!is_valid_color("gradient"));
        assert!(!is_valid_color("notagradient!!"));
        assert!(!is_valid_color("red; gradient"));
        assert!(!is_valid_color("gradient\nline2"));
        assert!(!is_valid_color("linear-gradient(90deg, #000, #fff); color: red"));
        assert!(!is_valid_color("linear-gradient(90deg,\n#000)"));
        assert!(!is_valid_color("linear-gradient()x"));
    }

    #[test]
    fn test_registry_gradients_are_valid() {
        for template in crate::catalog::templates() {
            for (role, value) in template.colors.iter() {
                assert!(is_valid_color(value), "{} {}: {}", template.slug, role.key(), value);
            }
        }
    }

    #[test]
    fn test_swatch_uses_first_gradient_stop() {
        assert_eq!(
            swatch_rgb("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
            Some((0x66, 0x7e, 0xea))
        );
        assert_eq!(swatch_rgb("#000000"), Some((0, 0, 0)));
        assert_eq!(swatch_rgb("nope"), None);
    }
}
