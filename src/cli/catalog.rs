//! Catalog CLI command handlers

use crate::catalog::{
    self, categories, find, font_css, font_info, format_color_palette, resolve_category,
    TemplateFilter,
};
use crate::cli::commands::ColorArgs;
use crate::error::Result;
use crate::theme::{
    self, component_styles, design_tokens, generate_css_variables, styles::has_custom_styles,
};

/// Handle `list`
pub fn handle_list(category: Option<String>, search: Option<String>, json: bool) -> Result<()> {
    let category = category
        .map(|c| resolve_category(&c).map(str::to_string))
        .transpose()?;
    let filter = TemplateFilter::new(category, search.unwrap_or_default());
    let templates = catalog::filter(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    println!("Templates ({}):\n", templates.len());

    let width = templates.iter().map(|t| t.slug.len()).max().unwrap_or(0);
    for template in templates {
        println!(
            "  {:<width$}  {:<13}  {}",
            template.slug,
            template.category,
            template.name,
            width = width
        );
    }

    Ok(())
}

/// Handle `categories`
pub fn handle_categories() -> Result<()> {
    for category in categories() {
        let count = catalog::filter(&TemplateFilter::new(Some(category.to_string()), "")).len();
        println!("  {} ({})", category, count);
    }
    Ok(())
}

/// Handle `show`
pub fn handle_show(slug: &str) -> Result<()> {
    let template = find(slug)?;
    let fonts = font_info(template);

    println!("{} [{}]", template.name, template.slug);
    println!("{}\n", template.description);
    println!("Category: {}", template.category);
    println!("Tags:     {}", template.tags.join(", "));

    println!("\nFeatures:");
    for feature in template.features {
        println!("  • {}", feature);
    }

    println!("\nColor Palette:");
    for line in format_color_palette(template).lines() {
        println!("  {}", line);
    }

    println!("\nTypography:");
    println!("  Headings: {}", fonts.primary);
    println!("  Body:     {}", fonts.secondary);
    if !fonts.url.is_empty() {
        println!("  Source:   {}", fonts.url);
    }
    let css = font_css(template);
    if !css.is_empty() {
        println!("\nFont CSS:");
        for line in css.lines() {
            println!("  {}", line);
        }
    }

    println!("\nDesign Tokens:");
    for (name, value) in design_tokens(template) {
        println!("  --{}: {}", name, value);
    }

    if has_custom_styles(template.slug) {
        println!("\nComponent Styles:");
    } else {
        println!("\nComponent Styles (default):");
    }
    for (component, classes) in component_styles(template.slug).entries() {
        println!("  {:<7} {}", component, classes);
    }

    Ok(())
}

/// Handle `tokens`
pub fn handle_tokens(slug: &str, colors: &ColorArgs) -> Result<()> {
    let template = theme::recolor(find(slug)?, colors.edits())?;
    println!("{}", generate_css_variables(&template));
    Ok(())
}
