//! Whole-catalog properties of the project generator

use std::io::{Cursor, Read};

use uiforge::archive::package;
use uiforge::catalog::{find, templates, ColorRole};
use uiforge::error::ForgeError;
use uiforge::scaffold::{generate_project, Framework};
use uiforge::theme::{generate_theme_config, hex_to_hsl, is_gradient, recolor, GRADIENT_FALLBACK};
use once_cell::sync::Lazy;
use regex::Regex;
use zip::ZipArchive;

static REQUIRE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"require\(\s*["']([^"'./][^"']*)["']\s*\)"#).unwrap());

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut contents = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing {}", name))
        .read_to_string(&mut contents)
        .unwrap();
    contents
}

#[test]
fn test_every_archive_has_a_valid_package_json() {
    for template in templates() {
        for framework in Framework::ALL {
            let tree = generate_project(template, framework, &generate_theme_config(template));
            let mut archive = ZipArchive::new(Cursor::new(package(&tree).unwrap())).unwrap();

            let manifest: serde_json::Value =
                serde_json::from_str(&read_entry(&mut archive, "package.json")).unwrap();
            let dependencies = &manifest["dependencies"];

            match framework {
                Framework::Nextjs => assert!(
                    dependencies.get("next").is_some(),
                    "{} nextjs archive lacks next",
                    template.slug
                ),
                Framework::React => {
                    assert!(dependencies.get("react").is_some());
                    assert!(dependencies.get("next").is_none());
                }
            }
        }
    }
}

#[test]
fn test_tailwind_plugins_are_installed() {
    let template = find("neo-brutalism").unwrap();
    for framework in Framework::ALL {
        let tree = generate_project(template, framework, &generate_theme_config(template));
        let manifest: serde_json::Value =
            serde_json::from_str(tree.file("package.json").unwrap()).unwrap();
        let config = tree.file("tailwind.config.ts").unwrap();

        let required: Vec<&str> = REQUIRE_REGEX
            .captures_iter(config)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        assert!(!required.is_empty());

        for package in required {
            assert!(
                manifest["dependencies"].get(package).is_some()
                    || manifest["devDependencies"].get(package).is_some(),
                "{} manifest lacks {}",
                framework,
                package
            );
        }
    }
}

#[test]
fn test_every_palette_value_is_shipped() {
    for template in templates() {
        for framework in Framework::ALL {
            let tree = generate_project(template, framework, &generate_theme_config(template));
            for (role, value) in template.colors.iter() {
                assert!(
                    tree.files.values().any(|content| content.contains(value)),
                    "{} ({}) does not ship its {} color",
                    template.slug,
                    framework,
                    role.key()
                );
            }
        }
    }
}

#[test]
fn test_edited_palette_reaches_the_archive() {
    let template = recolor(
        find("minimalist-clean").unwrap(),
        [(ColorRole::Accent, "#ABC123")],
    )
    .unwrap();
    let tree = generate_project(&template, Framework::React, &generate_theme_config(&template));

    assert!(tree.file("src/lib/constants.ts").unwrap().contains("#ABC123"));
    assert!(tree
        .file("src/index.css")
        .unwrap()
        .contains(&format!("--accent: {};", hex_to_hsl("#ABC123"))));
}

#[test]
fn test_hsl_conversion_is_stable_across_catalog() {
    for template in templates() {
        for (_, value) in template.colors.iter() {
            let first = hex_to_hsl(value);
            assert_eq!(first, hex_to_hsl(value));
            if is_gradient(value) {
                assert_eq!(first, GRADIENT_FALLBACK);
            } else {
                assert_eq!(first.split(' ').count(), 3, "{} -> {}", value, first);
            }
        }
    }
}

#[test]
fn test_unknown_slug_is_reported() {
    let err = find("does-not-exist").unwrap_err();
    assert!(matches!(err, ForgeError::TemplateNotFound(ref slug) if slug == "does-not-exist"));
    assert!(err.to_string().contains("uiforge list"));
}
