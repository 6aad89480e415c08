//! Design-token generation
//!
//! Maps a template palette onto the CSS variables, Tailwind config and
//! component class strings consumed by the generated projects.

pub mod color;
pub mod styles;

use serde::Serialize;

use crate::catalog::{ColorRole, Template};
use crate::error::{ForgeError, Result};

pub use color::{
    hex_to_hsl, is_gradient, is_gradient_expression, is_valid_color, parse_hex, swatch_rgb, Hsl,
    GRADIENT_FALLBACK,
};
pub use styles::{component_styles, ComponentStyles, DEFAULT_STYLES};

const MUTED: &str = "210 40% 96.1%";
const MUTED_FOREGROUND: &str = "215.4 16.3% 46.9%";
const BORDER: &str = "214.3 31.8% 91.4%";
const RADIUS: &str = "0.5rem";

const TAILWIND_CONFIG: &str = r#"import type { Config } from "tailwindcss";

const config: Config = {
  darkMode: ["class"],
  content: [
    "./src/pages/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/components/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/app/**/*.{js,ts,jsx,tsx,mdx}",
  ],
  theme: {
    extend: {
      colors: {
        border: "hsl(var(--border))",
        input: "hsl(var(--input))",
        ring: "hsl(var(--ring))",
        background: "hsl(var(--background))",
        foreground: "hsl(var(--foreground))",
        primary: {
          DEFAULT: "hsl(var(--primary))",
          foreground: "hsl(var(--primary-foreground))",
        },
        secondary: {
          DEFAULT: "hsl(var(--secondary))",
          foreground: "hsl(var(--secondary-foreground))",
        },
        destructive: {
          DEFAULT: "hsl(var(--destructive))",
          foreground: "hsl(var(--destructive-foreground))",
        },
        muted: {
          DEFAULT: "hsl(var(--muted))",
          foreground: "hsl(var(--muted-foreground))",
        },
        accent: {
          DEFAULT: "hsl(var(--accent))",
          foreground: "hsl(var(--accent-foreground))",
        },
        card: {
          DEFAULT: "hsl(var(--card))",
          foreground: "hsl(var(--card-foreground))",
        },
      },
      borderRadius: {
        lg: "var(--radius)",
        md: "calc(var(--radius) - 2px)",
        sm: "calc(var(--radius) - 4px)",
      },
    },
  },
  plugins: [require("tailwindcss-animate")],
};

export default config;"#;

/// Everything derived from a template's palette and slug
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    pub css_variables: String,
    pub tailwind_config: String,
    pub component_styles: ComponentStyles,
}

/// Design tokens as `(variable, value)` pairs in output order
pub fn design_tokens(template: &Template) -> Vec<(&'static str, String)> {
    let colors = &template.colors;
    let background = hex_to_hsl(&colors.background);
    let foreground = hex_to_hsl(&colors.foreground);
    let primary = hex_to_hsl(&colors.primary);

    vec![
        ("background", background.clone()),
        ("foreground", foreground.clone()),
        ("primary", primary.clone()),
        ("primary-foreground", foreground.clone()),
        ("secondary", hex_to_hsl(&colors.secondary)),
        ("secondary-foreground", foreground.clone()),
        ("accent", hex_to_hsl(&colors.accent)),
        ("accent-foreground", foreground.clone()),
        ("muted", MUTED.to_string()),
        ("muted-foreground", MUTED_FOREGROUND.to_string()),
        ("card", background.clone()),
        ("card-foreground", foreground.clone()),
        ("popover", background),
        ("popover-foreground", foreground),
        ("border", BORDER.to_string()),
        ("input", BORDER.to_string()),
        ("ring", primary),
        ("radius", RADIUS.to_string()),
    ]
}

/// `@layer base { :root { ... } }` block holding the design tokens
pub fn generate_css_variables(template: &Template) -> String {
    let body: String = design_tokens(template)
        .iter()
        .map(|(name, value)| format!("    --{}: {};\n", name, value))
        .collect();

    format!("@layer base {{\n  :root {{\n{}  }}\n}}", body)
}

/// Tailwind config mapping semantic colors onto the CSS variables
pub fn generate_tailwind_config() -> String {
    TAILWIND_CONFIG.to_string()
}

pub fn generate_theme_config(template: &Template) -> ThemeConfig {
    tracing::debug!("Generating theme config for {}", template.slug);

    ThemeConfig {
        css_variables: generate_css_variables(template),
        tailwind_config: generate_tailwind_config(),
        component_styles: component_styles(template.slug),
    }
}

/// Check a palette edit before it is applied
pub fn validate_color(role: ColorRole, value: &str) -> Result<()> {
    if is_valid_color(value) {
        Ok(())
    } else {
        Err(ForgeError::InvalidColor {
            role: role.key().to_string(),
            value: value.to_string(),
        })
    }
}

/// Copy of `template` with the given palette roles replaced.
///
/// Every value is validated; the first invalid one aborts the edit.
pub fn recolor<'a>(
    template: &Template,
    edits: impl IntoIterator<Item = (ColorRole, &'a str)>,
) -> Result<Template> {
    let mut colors = template.colors.clone();
    for (role, value) in edits {
        let value = value.trim();
        validate_color(role, value)?;
        colors.set(role, value);
    }
    Ok(template.with_colors(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_css_variables_layout() {
        let template = find("neo-brutalism").unwrap();
        let css = generate_css_variables(template);

        assert!(css.starts_with("@layer base {\n  :root {\n    --background: 0 0% 100%;\n"));
        assert!(css.ends_with("    --radius: 0.5rem;\n  }\n}"));
        assert!(css.contains("    --foreground: 0 0% 0%;\n"));
        assert!(css.contains("    --muted: 210 40% 96.1%;\n"));
        assert!(css.contains("    --input: 214.3 31.8% 91.4%;\n"));
    }

    #[test]
    fn test_ring_follows_primary() {
        let template = find("corporate-professional").unwrap();
        let mut colors = template.colors.clone();
        colors.set(ColorRole::Primary, "#FF0000");
        let edited = template.with_colors(colors);

        let tokens = design_tokens(&edited);
        let get = |name: &str| {
            tokens
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("primary"), "0 100% 50%");
        assert_eq!(get("ring"), "0 100% 50%");
    }

    #[test]
    fn test_gradient_background_uses_fallback() {
        let css = generate_css_variables(find("glassmorphism").unwrap());
        assert!(css.contains("--background: 0 0% 100%;"));
        assert!(css.contains("--card: 0 0% 100%;"));
    }

    #[test]
    fn test_tailwind_config_is_fixed() {
        let config = generate_tailwind_config();
        assert!(config.contains(r#"primary: {
          DEFAULT: "hsl(var(--primary))","#));
        assert!(config.ends_with("export default config;"));
    }

    #[test]
    fn test_recolor_validates_every_edit() {
        let template = find("minimalist-clean").unwrap();

        let edited = recolor(template, [(ColorRole::Accent, " #ABCDEF ")]).unwrap();
        assert_eq!(edited.colors.get(ColorRole::Accent), "#ABCDEF");
        assert_eq!(edited.colors.get(ColorRole::Primary), template.colors.get(ColorRole::Primary));

        let err = recolor(
            template,
            [(ColorRole::Primary, "#000000"), (ColorRole::Background, "blue")],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::InvalidColor { ref role, ref value } if role == "background" && value == "blue"
        ));

        let err = recolor(template, [(ColorRole::Primary, "nogradient")]).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidColor { ref value, .. } if value == "nogradient"));
        assert!(recolor(template, [(ColorRole::Background, "gradient")]).is_err());
        assert!(recolor(
            template,
            [(ColorRole::Background, "linear-gradient(90deg, #000000 0%, #ffffff 100%)")]
        )
        .is_ok());
    }

    #[test]
    fn test_generate_theme_config() {
        let template = find("retro-80s").unwrap();
        let config = generate_theme_config(template);
        assert_eq!(config.component_styles, component_styles("retro-80s"));
        assert_eq!(config.css_variables, generate_css_variables(template));
    }
}
