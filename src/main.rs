//! uiforge - UI template catalog and project generator
//!
//! Run without arguments to browse templates in the TUI, or use
//! subcommands to list, inspect and generate projects from the shell.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uiforge::cli::commands::{Cli, Commands};
use uiforge::cli::{catalog, config, generate};
use uiforge::core::Config;
use uiforge::error::Result;
use uiforge::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui().await,

        Some(Commands::List {
            category,
            search,
            json,
        }) => catalog::handle_list(category, search, json),
        Some(Commands::Categories) => catalog::handle_categories(),
        Some(Commands::Show { slug }) => catalog::handle_show(&slug),
        Some(Commands::Tokens { slug, colors }) => catalog::handle_tokens(&slug, &colors),
        Some(Commands::Generate(args)) => generate::handle_generate(args),
        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}

/// Run the TUI application
async fn run_tui() -> Result<()> {
    let config = Config::load()?;
    let mut app = App::new(config);
    app.run().await
}
