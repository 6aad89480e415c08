//! CLI command definitions using clap
//!
//! Defines the command structure for the `uiforge` CLI tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::ColorRole;
use crate::scaffold::Framework;

/// uiforge - UI template catalog and project generator
///
/// Browse themed UI templates, inspect their design tokens and download
/// ready-to-run Next.js or React projects.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "uiforge", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List templates
    List {
        /// Only show templates in this category
        #[arg(long, short)]
        category: Option<String>,

        /// Match against name, description and tags
        #[arg(long, short)]
        search: Option<String>,

        /// Print the matching templates as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template categories
    Categories,

    /// Show details, palette, fonts and component styles of a template
    Show {
        /// Template slug
        slug: String,
    },

    /// Print the CSS variables generated for a template
    Tokens {
        /// Template slug
        slug: String,

        #[command(flatten)]
        colors: ColorArgs,
    },

    /// Generate a project archive for a template
    Generate(GenerateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette overrides
// ─────────────────────────────────────────────────────────────────────────────

/// Palette overrides shared by `tokens` and `generate`
#[derive(Args, Debug, Default, Clone)]
pub struct ColorArgs {
    /// Override the primary color (hex or CSS gradient)
    #[arg(long, value_name = "COLOR")]
    pub primary: Option<String>,

    /// Override the secondary color
    #[arg(long, value_name = "COLOR")]
    pub secondary: Option<String>,

    /// Override the accent color
    #[arg(long, value_name = "COLOR")]
    pub accent: Option<String>,

    /// Override the background color
    #[arg(long, value_name = "COLOR")]
    pub background: Option<String>,

    /// Override the foreground (text) color
    #[arg(long, value_name = "COLOR")]
    pub foreground: Option<String>,
}

impl ColorArgs {
    /// `(role, value)` for every override given on the command line
    pub fn edits(&self) -> Vec<(ColorRole, &str)> {
        [
            (ColorRole::Primary, &self.primary),
            (ColorRole::Secondary, &self.secondary),
            (ColorRole::Accent, &self.accent),
            (ColorRole::Background, &self.background),
            (ColorRole::Foreground, &self.foreground),
        ]
        .into_iter()
        .filter_map(|(role, value)| value.as_deref().map(|v| (role, v)))
        .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generate Command
// ─────────────────────────────────────────────────────────────────────────────

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Template slug
    pub slug: String,

    /// Framework flavor (defaults to the configured framework)
    #[arg(long, short)]
    pub framework: Option<Framework>,

    /// Output directory (defaults to the configured directory)
    #[arg(long, short, env = "UIFORGE_OUTPUT_DIR")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub colors: ColorArgs,

    /// List the files that would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Remove a configuration value
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Directory downloaded archives are written to
    #[value(name = "output-dir")]
    OutputDir,

    /// Framework preselected for downloads
    #[value(name = "framework")]
    Framework,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "uiforge",
            "generate",
            "retro-80s",
            "--framework",
            "react",
            "--primary",
            "#ff00ff",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.slug, "retro-80s");
                assert_eq!(args.framework, Some(Framework::React));
                assert!(args.dry_run);
                assert_eq!(args.colors.edits(), vec![(ColorRole::Primary, "#ff00ff")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["uiforge"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_unknown_framework_is_rejected() {
        assert!(Cli::try_parse_from(["uiforge", "generate", "x", "--framework", "vue"]).is_err());
    }

    #[test]
    fn test_color_edits_keep_role_order() {
        let args = ColorArgs {
            foreground: Some("#111111".into()),
            primary: Some("#222222".into()),
            ..Default::default()
        };
        let roles: Vec<_> = args.edits().into_iter().map(|(role, _)| role).collect();
        assert_eq!(roles, vec![ColorRole::Primary, ColorRole::Foreground]);
    }
}
