//! Template color palette and its semantic roles

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five named colors every template defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Foreground,
}

impl ColorRole {
    /// All roles in display order
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Foreground,
    ];

    /// Lowercase key, as used in generated files and CLI flags
    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::Primary => "Primary",
            ColorRole::Secondary => "Secondary",
            ColorRole::Accent => "Accent",
            ColorRole::Background => "Background",
            ColorRole::Foreground => "Foreground",
        }
    }

    /// Short description shown next to the palette editor field
    pub fn description(&self) -> &'static str {
        match self {
            ColorRole::Primary => "Main brand color",
            ColorRole::Secondary => "Supporting color",
            ColorRole::Accent => "Highlight color",
            ColorRole::Background => "Page background",
            ColorRole::Foreground => "Text color",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Five named colors. Values are `#rrggbb` hex strings or CSS gradients.
///
/// Built-in palettes borrow static strings; edits made in the palette
/// editor replace individual values with owned strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Cow<'static, str>,
    pub secondary: Cow<'static, str>,
    pub accent: Cow<'static, str>,
    pub background: Cow<'static, str>,
    pub foreground: Cow<'static, str>,
}

impl Palette {
    /// Build a palette from static strings (usable in `static` tables)
    pub const fn new(
        primary: &'static str,
        secondary: &'static str,
        accent: &'static str,
        background: &'static str,
        foreground: &'static str,
    ) -> Self {
        Self {
            primary: Cow::Borrowed(primary),
            secondary: Cow::Borrowed(secondary),
            accent: Cow::Borrowed(accent),
            background: Cow::Borrowed(background),
            foreground: Cow::Borrowed(foreground),
        }
    }

    /// Get the value for a role
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Foreground => &self.foreground,
        }
    }

    /// Replace the value for a role
    pub fn set(&mut self, role: ColorRole, value: impl Into<String>) {
        let value = Cow::Owned(value.into());
        match role {
            ColorRole::Primary => self.primary = value,
            ColorRole::Secondary => self.secondary = value,
            ColorRole::Accent => self.accent = value,
            ColorRole::Background => self.background = value,
            ColorRole::Foreground => self.foreground = value,
        }
    }

    /// Iterate `(role, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_only_one_role() {
        let mut palette = Palette::new("#111111", "#222222", "#333333", "#444444", "#555555");
        palette.set(ColorRole::Accent, "#abcdef");

        assert_eq!(palette.get(ColorRole::Accent), "#abcdef");
        assert_eq!(palette.get(ColorRole::Primary), "#111111");
        assert_eq!(palette.get(ColorRole::Foreground), "#555555");
    }

    #[test]
    fn test_iter_follows_display_order() {
        let palette = Palette::new("a", "b", "c", "d", "e");
        let keys: Vec<_> = palette.iter().map(|(role, _)| role.key()).collect();
        assert_eq!(
            keys,
            vec!["primary", "secondary", "accent", "background", "foreground"]
        );
    }

    #[test]
    fn test_serializes_with_role_keys() {
        let palette = Palette::new("#000000", "#111111", "#222222", "#333333", "#444444");
        let json = serde_json::to_string(&palette).unwrap();
        assert!(json.starts_with(r##"{"primary":"#000000","secondary":"#111111""##));
    }
}
