//! # arenda
//!
//! Static export for the ArendaPrime landing page.
//!
//! Renders the page through `arenda-site` into a single self-contained HTML
//! file (inline CSS + enhancement script), ready to drop on any static host.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in content registry → dist/index.html
//! arenda render
//!
//! # Custom registry, printed to stdout
//! arenda content > content.json      # start from the defaults
//! arenda check --content content.json
//! arenda render --content content.json --out -
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use arenda_site::content::Content;
use arenda_site::{PageContext, render_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "arenda")]
#[command(about = "Render the ArendaPrime landing page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page to an HTML file
    Render {
        /// Content registry JSON (default: built-in registry)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Output file, or `-` for stdout
        #[arg(long, short, default_value = "dist/index.html")]
        out: PathBuf,

        /// Year shown in the footer (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the effective content registry as JSON
    Content {
        /// Content registry JSON (default: built-in registry)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Load and validate a content registry
    Check {
        /// Content registry JSON to check
        #[arg(long)]
        content: PathBuf,
    },
}

// ============================================================================
// Entry point
// ============================================================================

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[arenda] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout may carry the rendered page.
fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { content, out, year } => {
            let content = load_content(content.as_deref())?;
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            render(PageContext::new(content, year), &out)
        }
        Command::Content { content } => {
            let content = load_content(content.as_deref())?;
            let json = content.to_json_pretty().context("Failed to serialize content")?;
            println!("{json}");
            Ok(())
        }
        Command::Check { content } => {
            let loaded = load_content(Some(&content))?;
            println!(
                "ok: {} features, {} gallery images, {} amenities",
                loaded.features.len(),
                loaded.gallery.len(),
                loaded.amenities.len()
            );
            Ok(())
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Built-in registry, or a JSON file. Either way it must validate.
fn load_content(path: Option<&Path>) -> Result<Content> {
    let content = match path {
        Some(path) => Content::from_json_path(path)
            .with_context(|| format!("Failed to load content from {}", path.display()))?,
        None => {
            debug!("using built-in content registry");
            Content::default()
        }
    };
    content.validate().context("Content registry is invalid")?;
    Ok(content)
}

fn render(context: PageContext, out: &Path) -> Result<()> {
    let html = render_page(&context);

    if out.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes()).context("Failed to write page to stdout")?;
        stdout.flush()?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;

    info!("Page written to {} ({} bytes, footer year {})", out.display(), html.len(), context.year);
    Ok(())
}
