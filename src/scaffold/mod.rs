//! Project scaffold generation
//!
//! Builds the in-memory file tree of a runnable starter project for a
//! template. Every file is produced from a string template; nothing is
//! read from disk, so the same inputs always yield the same tree.

mod common;
mod components;
mod nextjs;
mod react;
mod sections;

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::Template;
use crate::theme::ThemeConfig;

/// Web framework flavor of the generated project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    Nextjs,
    React,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::Nextjs, Framework::React];

    /// Identifier used in project and archive names
    pub fn key(&self) -> &'static str {
        match self {
            Framework::Nextjs => "nextjs",
            Framework::React => "react",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Nextjs => "Next.js",
            Framework::React => "React",
        }
    }

    /// The other framework
    pub fn toggle(&self) -> Framework {
        match self {
            Framework::Nextjs => Framework::React,
            Framework::React => Framework::Nextjs,
        }
    }

    /// Parse a framework key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Framework> {
        Framework::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Generated project: a name plus relative path → file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTree {
    /// `<slug>-<framework>`
    pub name: String,
    pub files: BTreeMap<String, String>,
}

impl ProjectTree {
    fn new(name: String) -> Self {
        Self {
            name,
            files: BTreeMap::new(),
        }
    }

    fn add(&mut self, path: &str, content: impl Into<String>) {
        self.files.insert(path.to_string(), content.into());
    }

    /// Content of a file in the tree
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Paths in archive order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total size of all file contents in bytes
    pub fn total_bytes(&self) -> usize {
        self.files.values().map(String::len).sum()
    }
}

/// Name of the project generated for a template and framework
pub fn project_name(template: &Template, framework: Framework) -> String {
    format!("{}-{}", template.slug, framework.key())
}

/// Generate the complete project tree for a template
pub fn generate_project(
    template: &Template,
    framework: Framework,
    theme: &ThemeConfig,
) -> ProjectTree {
    let mut tree = ProjectTree::new(project_name(template, framework));

    tree.add("README.md", common::readme(template, framework));
    tree.add("package.json", common::package_json(template, framework));
    tree.add(".gitignore", common::GITIGNORE);
    tree.add(".env.example", common::ENV_EXAMPLE);
    tree.add("tsconfig.json", common::tsconfig(framework));

    match framework {
        Framework::Nextjs => nextjs::add_files(&mut tree, template, theme),
        Framework::React => react::add_files(&mut tree, template, theme),
    }

    add_shared_sources(&mut tree, template);

    tracing::debug!(
        "Generated {} with {} files ({} bytes)",
        tree.name,
        tree.len(),
        tree.total_bytes()
    );

    tree
}

/// Components, lib and hooks common to both frameworks
fn add_shared_sources(tree: &mut ProjectTree, template: &Template) {
    tree.add("src/components/layout/header.tsx", sections::header(template));
    tree.add("src/components/layout/footer.tsx", sections::footer(template));
    tree.add("src/components/sections/hero.tsx", sections::hero(template));
    tree.add("src/components/sections/features.tsx", sections::features(template));
    tree.add("src/components/sections/cta.tsx", sections::cta(template));

    for (name, source) in components::UI_COMPONENTS {
        tree.add(&format!("src/components/ui/{}", name), *source);
    }

    tree.add("src/lib/utils.ts", sections::UTILS);
    tree.add("src/lib/constants.ts", sections::constants(template));
    tree.add("src/hooks/use-scroll.ts", sections::USE_SCROLL);
}

/// Escape a value for embedding inside a double-quoted JS/TS string
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use crate::theme::generate_theme_config;

    fn generate(slug: &str, framework: Framework) -> ProjectTree {
        let template = find(slug).unwrap();
        generate_project(template, framework, &generate_theme_config(template))
    }

    #[test]
    fn test_framework_keys() {
        assert_eq!(Framework::Nextjs.key(), "nextjs");
        assert_eq!(Framework::React.display_name(), "React");
        assert_eq!(Framework::from_key("NextJS"), Some(Framework::Nextjs));
        assert_eq!(Framework::from_key("vue"), None);
        assert_eq!(Framework::Nextjs.toggle(), Framework::React);
    }

    #[test]
    fn test_project_name() {
        let tree = generate("retro-80s", Framework::React);
        assert_eq!(tree.name, "retro-80s-react");
    }

    #[test]
    fn test_nextjs_file_set() {
        let tree = generate("dark-luxury", Framework::Nextjs);
        for path in [
            "README.md",
            "package.json",
            ".gitignore",
            ".env.example",
            "tsconfig.json",
            "src/app/layout.tsx",
            "src/app/page.tsx",
            "src/app/globals.css",
            "src/components/ui/use-toast.ts",
            "src/lib/constants.ts",
            "src/hooks/use-scroll.ts",
            "tailwind.config.ts",
            "postcss.config.js",
            "next.config.js",
        ] {
            assert!(tree.file(path).is_some(), "missing {}", path);
        }
        assert!(tree.file("vite.config.ts").is_none());
        assert!(tree.file("src/App.tsx").is_none());
    }

    #[test]
    fn test_react_file_set() {
        let tree = generate("dark-luxury", Framework::React);
        for path in [
            "src/App.tsx",
            "src/main.tsx",
            "src/index.css",
            "index.html",
            "vite.config.ts",
            "tsconfig.node.json",
            "src/components/ui/button.tsx",
        ] {
            assert!(tree.file(path).is_some(), "missing {}", path);
        }
        assert!(tree.file("next.config.js").is_none());
        assert!(tree.file("src/app/page.tsx").is_none());
    }

    #[test]
    fn test_all_ui_components_present() {
        let tree = generate("minimalist-clean", Framework::Nextjs);
        let ui = tree
            .paths()
            .filter(|p| p.starts_with("src/components/ui/"))
            .count();
        assert_eq!(ui, 21);
    }

    #[test]
    fn test_global_css_is_theme_css() {
        let template = find("tech-dashboard").unwrap();
        let theme = generate_theme_config(template);
        let next = generate_project(template, Framework::Nextjs, &theme);
        let react = generate_project(template, Framework::React, &theme);

        assert_eq!(next.file("src/app/globals.css"), Some(theme.css_variables.as_str()));
        assert_eq!(react.file("src/index.css"), Some(theme.css_variables.as_str()));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(
            generate("gaming-news", Framework::Nextjs),
            generate("gaming-news", Framework::Nextjs)
        );
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
