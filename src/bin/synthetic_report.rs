//! Synthetic locale report - lists source strings the curated Klingon document
//! still lacks, without calling the translation backend.
//!
//! Usage:
//!   cargo run --bin synthetic-report
//!
//! Optional:
//! - LOCALES_DIR (defaults to public/locales)
//!
//! The nested JSON printed on stdout mirrors the source layout; translate it
//! and merge it into the curated document by hand.

use anyhow::{Context, Result};
use tracing::info;

use locale_translator::config::Config;
use locale_translator::document::{load_document, render_document};
use locale_translator::{init_tracing, synthetic};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing()?;

    let config = Config::from_env();
    let source = load_document(&config.source_path())?;

    let missing = synthetic::audit(&config, &source)?;
    if missing.is_empty() {
        info!("Nothing to translate");
        return Ok(());
    }

    let snippet = render_document(&missing.to_tree())
        .context("Failed to render missing synthetic entries")?;
    println!("{}", snippet.trim_end());

    Ok(())
}
