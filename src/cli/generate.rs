//! Generate CLI command handler

use crate::archive;
use crate::catalog::find;
use crate::cli::commands::GenerateArgs;
use crate::core::config::Config;
use crate::error::Result;
use crate::scaffold::generate_project;
use crate::theme::{generate_theme_config, recolor};

/// Handle `generate`
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;
    let template = recolor(find(&args.slug)?, args.colors.edits())?;
    let framework = args.framework.unwrap_or(config.default_framework);

    let theme = generate_theme_config(&template);
    let tree = generate_project(&template, framework, &theme);

    if args.dry_run {
        println!(
            "{} ({}, {} files, {} bytes):\n",
            archive::archive_name(&tree),
            framework.display_name(),
            tree.len(),
            tree.total_bytes()
        );
        for path in tree.paths() {
            println!("  {}", path);
        }
        return Ok(());
    }

    let out_dir = args.out.unwrap_or_else(|| config.resolved_output_dir());
    println!(
        "Generating {} project for '{}'...",
        framework.display_name(),
        template.name
    );

    let path = archive::write_archive(&tree, &out_dir).map_err(|e| {
        tracing::error!("Download of {} failed: {}", tree.name, e);
        e
    })?;
    println!("✓ Wrote {} ({} files)", path.display(), tree.len());

    Ok(())
}
