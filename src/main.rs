use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use locale_translator::config::Config;
use locale_translator::document::{load_document, render_document};
use locale_translator::i18n::Locale;
use locale_translator::{init_tracing, orchestrator, synthetic};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let started = Utc::now();
    let config = Config::from_env();

    // Step 1: Load the source document; nothing runs without it
    info!("Loading base english strings...");
    let source = load_document(&config.source_path())?;

    // Step 2: Machine-translated locales, one at a time
    let client = reqwest::Client::new();
    let locales = Locale::machine_translated();
    let (summaries, _report) = orchestrator::run(&client, &config, &source, &locales).await?;

    for summary in summaries.iter().filter(|s| s.fallback_chunks > 0) {
        info!(
            "{}: {} of {} chunks kept the English text",
            summary.locale, summary.fallback_chunks, summary.chunks
        );
    }

    // Step 3: Synthetic locale completeness
    info!("Checking {}...", Locale::synthetic());
    let missing = synthetic::audit(&config, &source)?;
    if !missing.is_empty() {
        let snippet = render_document(&missing.to_tree())
            .context("Failed to render missing synthetic entries")?;
        println!("{}", snippet.trim_end());
    }

    info!(
        "All languages processed in {}s.",
        (Utc::now() - started).num_seconds()
    );
    Ok(())
}
