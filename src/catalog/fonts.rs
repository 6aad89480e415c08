//! Font pairings for templates that ship custom typography

use super::Template;

/// Google Fonts pairing for a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPairing {
    /// CSS font-family stack for headings
    pub primary: &'static str,
    /// CSS font-family stack for body text
    pub secondary: Option<&'static str>,
    pub google_fonts_url: &'static str,
}

/// Display names of a template's fonts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub primary: String,
    pub secondary: String,
    pub url: String,
}

static FONT_PAIRINGS: &[(&str, FontPairing)] = &[
    (
        "neo-brutalism",
        FontPairing {
            primary: "'Space Grotesk', sans-serif",
            secondary: Some("'Inter', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;700;900&family=Inter:wght@400;600&display=swap",
        },
    ),
    (
        "minimalist-clean",
        FontPairing {
            primary: "'Inter', sans-serif",
            secondary: Some("'Crimson Pro', serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600&family=Crimson+Pro:wght@400;600&display=swap",
        },
    ),
    (
        "glassmorphism",
        FontPairing {
            primary: "'Poppins', sans-serif",
            secondary: Some("'Inter', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&family=Inter:wght@400;500&display=swap",
        },
    ),
    (
        "cyberpunk-futuristic",
        FontPairing {
            primary: "'Orbitron', sans-serif",
            secondary: Some("'Rajdhani', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&family=Rajdhani:wght@400;600;700&display=swap",
        },
    ),
    (
        "dark-luxury",
        FontPairing {
            primary: "'Playfair Display', serif",
            secondary: Some("'Montserrat', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700;900&family=Montserrat:wght@300;400;600&display=swap",
        },
    ),
    (
        "skeuomorphism-modern",
        FontPairing {
            primary: "'Roboto', sans-serif",
            secondary: Some("'Open Sans', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&family=Open+Sans:wght@400;600&display=swap",
        },
    ),
    (
        "claymorphism",
        FontPairing {
            primary: "'Quicksand', sans-serif",
            secondary: Some("'Nunito', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Quicksand:wght@400;600;700&family=Nunito:wght@400;600;700&display=swap",
        },
    ),
    (
        "retro-80s",
        FontPairing {
            primary: "'Righteous', cursive",
            secondary: Some("'Archivo', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Righteous&family=Archivo:wght@400;600;700&display=swap",
        },
    ),
    (
        "retro-pixel-art",
        FontPairing {
            primary: "'Press Start 2P', cursive",
            secondary: Some("'VT323', monospace"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Press+Start+2P&family=VT323&display=swap",
        },
    ),
    (
        "corporate-professional",
        FontPairing {
            primary: "'IBM Plex Sans', sans-serif",
            secondary: Some("'IBM Plex Serif', serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=IBM+Plex+Sans:wght@400;500;600;700&family=IBM+Plex+Serif:wght@400;600&display=swap",
        },
    ),
    (
        "startup-saas",
        FontPairing {
            primary: "'DM Sans', sans-serif",
            secondary: Some("'Inter', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=DM+Sans:wght@400;500;700&family=Inter:wght@400;600&display=swap",
        },
    ),
    (
        "ai-modern-interface",
        FontPairing {
            primary: "'Exo 2', sans-serif",
            secondary: Some("'Roboto Mono', monospace"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Exo+2:wght@400;600;700;900&family=Roboto+Mono:wght@400;600&display=swap",
        },
    ),
    (
        "gradient-vibrant",
        FontPairing {
            primary: "'Outfit', sans-serif",
            secondary: Some("'Inter', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Outfit:wght@400;600;700;900&family=Inter:wght@400;600&display=swap",
        },
    ),
    (
        "monochrome-editorial",
        FontPairing {
            primary: "'Libre Baskerville', serif",
            secondary: Some("'Work Sans', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Libre+Baskerville:wght@400;700&family=Work+Sans:wght@400;600;700&display=swap",
        },
    ),
    (
        "playful-colorful",
        FontPairing {
            primary: "'Fredoka', sans-serif",
            secondary: Some("'Nunito', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Fredoka:wght@400;600;700&family=Nunito:wght@400;600;700&display=swap",
        },
    ),
    (
        "nature-organic",
        FontPairing {
            primary: "'Comfortaa', cursive",
            secondary: Some("'Lato', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Comfortaa:wght@400;600;700&family=Lato:wght@400;700&display=swap",
        },
    ),
    (
        "japanese-zen",
        FontPairing {
            primary: "'Noto Serif JP', serif",
            secondary: Some("'Noto Sans JP', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Noto+Serif+JP:wght@400;600;700&family=Noto+Sans+JP:wght@400;500;700&display=swap",
        },
    ),
    (
        "tech-dashboard",
        FontPairing {
            primary: "'JetBrains Mono', monospace",
            secondary: Some("'Inter', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600;700&family=Inter:wght@400;600&display=swap",
        },
    ),
    (
        "bold-typography",
        FontPairing {
            primary: "'Bebas Neue', cursive",
            secondary: Some("'Oswald', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Bebas+Neue&family=Oswald:wght@400;600;700&display=swap",
        },
    ),
    (
        "gaming-theme",
        FontPairing {
            primary: "'Teko', sans-serif",
            secondary: Some("'Rajdhani', sans-serif"),
            google_fonts_url: "https://fonts.googleapis.com/css2?family=Teko:wght@400;600;700&family=Rajdhani:wght@400;600;700&display=swap",
        },
    ),
];

/// Font pairing for a slug, if the template defines one
pub fn font_pairing(slug: &str) -> Option<&'static FontPairing> {
    FONT_PAIRINGS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, pairing)| pairing)
}

/// CSS that imports and applies the template's fonts.
///
/// Empty when the template uses system fonts.
pub fn font_css(template: &Template) -> String {
    let Some(pairing) = font_pairing(template.slug) else {
        return String::new();
    };

    format!(
        r#"@import url('{url}');

:root {{
  --font-primary: {primary};
  --font-secondary: {secondary};
}}

body {{
  font-family: var(--font-primary);
}}

h1, h2, h3, h4, h5, h6 {{
  font-family: var(--font-primary);
}}

p, span, div {{
  font-family: var(--font-secondary);
}}
"#,
        url = pairing.google_fonts_url,
        primary = pairing.primary,
        secondary = pairing.secondary.unwrap_or(pairing.primary),
    )
}

/// First family name of a font stack, without quotes
fn family_name(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or(stack)
        .replace(|c: char| c == '\'' || c == '"', "")
        .trim()
        .to_string()
}

/// Display names for the template's fonts
pub fn font_info(template: &Template) -> FontInfo {
    match font_pairing(template.slug) {
        Some(pairing) => {
            let primary = family_name(pairing.primary);
            FontInfo {
                secondary: pairing
                    .secondary
                    .map(family_name)
                    .unwrap_or_else(|| primary.clone()),
                primary,
                url: pairing.google_fonts_url.to_string(),
            }
        }
        None => FontInfo {
            primary: "System Font".to_string(),
            secondary: "System Font".to_string(),
            url: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_font_info_strips_quotes() {
        let info = font_info(find("retro-pixel-art").unwrap());
        assert_eq!(info.primary, "Press Start 2P");
        assert_eq!(info.secondary, "VT323");
        assert!(info.url.starts_with("https://fonts.googleapis.com/"));
    }

    #[test]
    fn test_font_info_falls_back_to_system_font() {
        let info = font_info(find("crypto-dashboard").unwrap());
        assert_eq!(info.primary, "System Font");
        assert_eq!(info.secondary, "System Font");
        assert!(info.url.is_empty());
    }

    #[test]
    fn test_font_css() {
        let css = font_css(find("dark-luxury").unwrap());
        assert!(css.contains("@import url('https://fonts.googleapis.com/css2?family=Playfair+Display"));
        assert!(css.contains("--font-primary: 'Playfair Display', serif;"));
        assert!(css.contains("--font-secondary: 'Montserrat', sans-serif;"));

        assert!(font_css(find("art-gallery").unwrap()).is_empty());
    }

    #[test]
    fn test_every_pairing_names_a_registered_template() {
        for (slug, _) in FONT_PAIRINGS {
            assert!(find(slug).is_ok(), "{} has fonts but no template", slug);
        }
    }
}
