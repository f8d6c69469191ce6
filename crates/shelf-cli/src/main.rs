//! Shelf CLI
//!
//! Command-line and terminal interface for Shelf - a small book catalog
//! browser.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shelf_core::{AddBookForm, Config};

mod clipboard;
mod commands;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelf - search and browse a small book catalog")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// Search the catalog by title, author or ISBN
    Search {
        /// Search query (empty lists everything)
        #[arg(default_value = "")]
        query: String,
    },
    /// Show a book's detail page
    Show {
        /// Book ID, or a `#book-<id>` fragment
        id: String,
    },
    /// Render the page HTML for a query and fragment
    Html {
        /// Search query typed into the search box
        #[arg(long)]
        query: Option<String>,
        /// URL fragment the page is opened at (e.g. #book-b2)
        #[arg(long)]
        fragment: Option<String>,
    },
    /// Run the add-book form once (nothing is saved)
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        isbn: String,
        #[arg(long, default_value = "")]
        year: String,
        /// Cover image URL
        #[arg(long, default_value = "")]
        cover: String,
        /// Print the resulting page HTML instead of the record
        #[arg(long)]
        html: bool,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Set a configuration value
    Set {
        /// Configuration key (external_url, search_seed_len, copy_feedback_ms, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Config commands work on the file itself
    if let Some(Commands::Config { command }) = &cli.command {
        init_cli_logging();
        return handle_config_command(command.clone(), config_path, &output);
    }

    let config = Config::load_with_cli_override(config_path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    // Handle TUI (default when no command given); it logs to a file
    let Some(command) = cli.command else {
        return tui::run(config).await;
    };
    if matches!(command, Commands::Tui) {
        return tui::run(config).await;
    }

    init_cli_logging();

    match command {
        Commands::Tui | Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Search { query } => commands::book::search(config, query, &output),
        Commands::Show { id } => commands::book::show(config, id, &output),
        Commands::Html { query, fragment } => {
            commands::page::html(config, query, fragment, &output)
        }
        Commands::Add {
            title,
            author,
            isbn,
            year,
            cover,
            html,
        } => {
            let form = AddBookForm {
                title,
                author,
                isbn,
                year,
                cover,
            };
            commands::book::add(config, form, html, &output)
        }
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Path) => commands::config::path(config_path),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Log to stderr when SHELF_LOG is set
fn init_cli_logging() {
    let Ok(log_level) = std::env::var("SHELF_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "shelf_core={},shelf_cli={}",
        log_level, log_level
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
