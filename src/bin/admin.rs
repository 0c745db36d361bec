//! CLI administration tool for the portfolio.
//!
//! Works on the same configuration as the server without starting it.
//!
//! # Usage
//!
//! ```bash
//! # Write the page as standalone HTML
//! cargo run --bin portfolio-admin -- render --out dist/index.html
//!
//! # Check that the profile image and resume are in place
//! cargo run --bin portfolio-admin -- check
//!
//! # Print the effective page content as JSON
//! cargo run --bin portfolio-admin -- content
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`ASSETS_DIR`, `CONTENT_FILE`, `PROFILE_IMAGE`, ...),
//! see [`portfolio::config`].

use portfolio::application::services::PageService;
use portfolio::config::{self, Config};
use portfolio::infrastructure::assets::FsAssetStore;
use portfolio::web::handlers::PageTemplate;

use anyhow::{Context, Result};
use askama::Template;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing the portfolio.
#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Render the page to a standalone HTML file
    Render {
        /// Output file
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check that the page assets are present
    Check,

    /// Print the effective page content as JSON
    Content,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Render { out, yes } => render(&config, out, yes).await?,
        Commands::Check => check(&config).await?,
        Commands::Content => print_content(&config)?,
    }

    Ok(())
}

fn page_service(config: &Config) -> Result<PageService> {
    let content = config.load_content()?;
    let store = Arc::new(FsAssetStore::new(&config.assets_dir));
    Ok(PageService::new(Arc::new(content), store))
}

/// Renders the page to `out`, asking before overwriting.
async fn render(config: &Config, out: PathBuf, skip_confirm: bool) -> Result<()> {
    if out.exists() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", out.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let page = page_service(config)?.render().await;
    let warnings: Vec<String> = page.warnings().into_iter().map(str::to_owned).collect();

    let html = PageTemplate { page }
        .render()
        .context("Failed to render page template")?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&out, html).with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} {}",
        "✅ Page written to".green().bold(),
        out.display().to_string().cyan()
    );
    for warning in warnings {
        println!("  {} {}", "⚠️ ".yellow(), warning.yellow());
    }

    Ok(())
}

/// Reports each asset as present or missing.
async fn check(config: &Config) -> Result<()> {
    let service = page_service(config)?;
    let profile = &service.content().profile;

    println!("{}", "📦 Assets".bright_blue().bold());
    println!("  Directory: {}", config.assets_dir.display().to_string().cyan());
    println!();

    match service.profile_image_format().await {
        Ok(format) => println!(
            "  {} {} ({})",
            "✓".green(),
            profile.image.bright_white(),
            format.content_type()
        ),
        Err(e) => println!("  {} {}", "✗".red(), e.to_string().red()),
    }

    match service.resume_available().await {
        Ok(()) => println!(
            "  {} {} (downloads as {})",
            "✓".green(),
            profile.resume.file.bright_white(),
            profile.resume.download_name.cyan()
        ),
        Err(e) => println!("  {} {}", "✗".red(), e.to_string().red()),
    }

    Ok(())
}

fn print_content(config: &Config) -> Result<()> {
    let content = config.load_content()?;
    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}
