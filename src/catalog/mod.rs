//! Template catalog
//!
//! This module contains the static template registry and the lookups
//! built on top of it:
//! - Slug lookup
//! - Category listing and search filtering
//! - Font pairings per template

pub mod data;
pub mod fonts;
pub mod palette;

use serde::Serialize;

use crate::error::{ForgeError, Result};

pub use data::TEMPLATES;
pub use fonts::{font_css, font_info, font_pairing, FontInfo, FontPairing};
pub use palette::{ColorRole, Palette};

/// Category name that matches every template
pub const ALL_CATEGORIES: &str = "All";

/// A named visual theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Unique identifier, also used in archive names
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub features: &'static [&'static str],
    pub colors: Palette,
}

impl Template {
    /// Copy of this template with a different palette.
    ///
    /// Registry entries are never mutated; palette edits live on the copy.
    pub fn with_colors(&self, colors: Palette) -> Template {
        Template {
            colors,
            ..self.clone()
        }
    }
}

/// All registered templates
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

/// Look up a template by slug
pub fn find(slug: &str) -> Result<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.slug == slug)
        .ok_or_else(|| ForgeError::TemplateNotFound(slug.to_string()))
}

/// "All" followed by each distinct category in registry order
pub fn categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for template in TEMPLATES {
        if !categories.contains(&template.category) {
            categories.push(template.category);
        }
    }
    categories
}

/// Resolve a user-supplied category name (case-insensitive)
pub fn resolve_category(name: &str) -> Result<&'static str> {
    categories()
        .into_iter()
        .find(|c| c.eq_ignore_ascii_case(name))
        .ok_or_else(|| ForgeError::UnknownCategory(name.to_string()))
}

/// Catalog filter: a category plus a free-text search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// `None` or "All" matches every category
    pub category: Option<String>,
    /// Matched against name, description and tags; empty matches everything
    pub query: String,
}

impl TemplateFilter {
    pub fn new(category: Option<String>, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Check whether a template passes this filter
    pub fn matches(&self, template: &Template) -> bool {
        let matches_category = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => template.category == category,
        };

        let query = self.query.to_lowercase();
        let matches_search = template.name.to_lowercase().contains(&query)
            || template.description.to_lowercase().contains(&query)
            || template
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));

        matches_category && matches_search
    }
}

/// Templates passing the filter, in registry order
pub fn filter(filter: &TemplateFilter) -> Vec<&'static Template> {
    TEMPLATES.iter().filter(|t| filter.matches(t)).collect()
}

/// Format the palette as `Role: value` lines
pub fn format_color_palette(template: &Template) -> String {
    template
        .colors
        .iter()
        .map(|(role, value)| format!("{}: {}", role.label(), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = TEMPLATES.iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), TEMPLATES.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("neo-brutalism").unwrap().name, "Neo Brutalism");
        assert!(matches!(
            find("does-not-exist"),
            Err(ForgeError::TemplateNotFound(slug)) if slug == "does-not-exist"
        ));
    }

    #[test]
    fn test_categories_start_with_all_and_are_distinct() {
        let cats = categories();
        assert_eq!(cats[0], ALL_CATEGORIES);
        let distinct: HashSet<_> = cats.iter().collect();
        assert_eq!(distinct.len(), cats.len());
        assert!(cats.contains(&"Retro"));
    }

    #[test]
    fn test_resolve_category_ignores_case() {
        assert_eq!(resolve_category("retro").unwrap(), "Retro");
        assert!(resolve_category("nope").is_err());
    }

    #[test]
    fn test_filter_by_category() {
        let retro = filter(&TemplateFilter::new(Some("Retro".into()), ""));
        assert!(!retro.is_empty());
        assert!(retro.iter().all(|t| t.category == "Retro"));

        let all = filter(&TemplateFilter::new(Some(ALL_CATEGORIES.into()), ""));
        assert_eq!(all.len(), TEMPLATES.len());
    }

    #[test]
    fn test_filter_search_matches_tags_case_insensitively() {
        let hits = filter(&TemplateFilter::new(None, "SYNTHWAVE"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "retro-80s");
    }

    #[test]
    fn test_filter_search_without_hits() {
        assert!(filter(&TemplateFilter::new(None, "zzzz-no-match")).is_empty());
    }

    #[test]
    fn test_with_colors_leaves_registry_untouched() {
        let original = find("dark-luxury").unwrap();
        let mut colors = original.colors.clone();
        colors.set(ColorRole::Primary, "#123456");

        let edited = original.with_colors(colors);
        assert_eq!(edited.colors.get(ColorRole::Primary), "#123456");
        assert_eq!(find("dark-luxury").unwrap().colors.get(ColorRole::Primary), "#CA8A04");
    }

    #[test]
    fn test_format_color_palette() {
        let text = format_color_palette(find("neo-brutalism").unwrap());
        assert_eq!(
            text,
            "Primary: #FFE600\nSecondary: #FF6B6B\nAccent: #4ECDC4\nBackground: #FFFFFF\nForeground: #000000"
        );
    }
}
