//! lore-gen - writes the static SEO artifacts for the landing site.
//!
//! Commands:
//! - `lore-gen manifest` - write `manifest.webmanifest`
//! - `lore-gen robots` - write `robots.txt`
//! - `lore-gen structured-data` - write `structured-data.json`
//! - `lore-gen all` - write everything

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use lore_seo::{RobotsDirectives, StructuredData, WebManifest};

/// Generate the static SEO artifacts served next to the page bundle.
#[derive(Parser)]
#[command(name = "lore-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for the generated files
    #[arg(short, long, global = true, default_value = "site/public")]
    out: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the web-app manifest
    Manifest,
    /// Write robots.txt
    Robots,
    /// Write the JSON-LD structured-data block
    StructuredData,
    /// Write all artifacts
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create {}", cli.out.display()))?;

    match cli.command {
        Commands::Manifest => {
            report(write_manifest(&cli.out)?, cli.verbose);
        }
        Commands::Robots => {
            report(write_robots(&cli.out)?, cli.verbose);
        }
        Commands::StructuredData => {
            report(write_structured_data(&cli.out)?, cli.verbose);
        }
        Commands::All => {
            debug(cli.verbose, "writing all artifacts");
            report(write_manifest(&cli.out)?, cli.verbose);
            report(write_robots(&cli.out)?, cli.verbose);
            report(write_structured_data(&cli.out)?, cli.verbose);
        }
    }

    Ok(())
}

fn report(path: PathBuf, verbose: bool) {
    println!("{} wrote {}", style("✓").green(), path.display());
    if verbose {
        if let Ok(meta) = fs::metadata(&path) {
            debug(verbose, &format!("{} bytes", meta.len()));
        }
    }
}

fn debug(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }
}

fn write_manifest(out: &Path) -> Result<PathBuf> {
    let path = out.join("manifest.webmanifest");
    let body = WebManifest::default()
        .to_json()
        .context("failed to serialize manifest")?;
    fs::write(&path, body + "\n").with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn write_robots(out: &Path) -> Result<PathBuf> {
    let path = out.join("robots.txt");
    fs::write(&path, RobotsDirectives::default().robots_txt())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn write_structured_data(out: &Path) -> Result<PathBuf> {
    let path = out.join("structured-data.json");
    let body = StructuredData::web_site().to_script_json();
    fs::write(&path, body + "\n").with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
