//! TUI theme and styles

use ratatui::style::{Color, Style};

use crate::theme::swatch_rgb;

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color
    pub const SECONDARY: Color = Color::Yellow;

    /// Success color
    pub const SUCCESS: Color = Color::Green;

    /// Error color
    pub const ERROR: Color = Color::Red;

    /// Warning color
    pub const WARNING: Color = Color::Yellow;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Background fill for a palette value; unparsable values render muted
    pub fn swatch(value: &str) -> Style {
        match swatch_rgb(value) {
            Some((r, g, b)) => Style::default().bg(Color::Rgb(r, g, b)),
            None => Style::default().bg(Self::MUTED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_uses_palette_rgb() {
        assert_eq!(Theme::swatch("#FF0000").bg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(
            Theme::swatch("linear-gradient(135deg, #667eea 0%, #764ba2 100%)").bg,
            Some(Color::Rgb(0x66, 0x7e, 0xea))
        );
        assert_eq!(Theme::swatch("nope").bg, Some(Theme::MUTED));
    }
}
