//! Per-locale translate-and-reassemble loop.
//!
//! The source document is flattened once. For every target locale its values
//! are sent in fixed-size chunks, strictly in order, with a pause after each
//! request; the repaired results are written into a fresh copy of the source
//! and saved under the locale's folder.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::document::write_document;
use crate::i18n::{Locale, MetricsReport, TranslationMetrics};
use crate::translation::{translate_chunk, ChunkOutcome};
use crate::tree::{flatten, rebuild, Extraction, ResourceTree};

/// What happened while producing one locale document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSummary {
    pub locale: Locale,
    pub path: PathBuf,
    pub strings: usize,
    pub chunks: usize,
    pub fallback_chunks: usize,
}

/// Translate every string of `extraction` to `locale` and write the document.
///
/// `source` is only read; the written document is rebuilt from a deep copy.
pub async fn process_locale(
    client: &reqwest::Client,
    config: &Config,
    source: &ResourceTree,
    extraction: &Extraction,
    locale: Locale,
    metrics: &TranslationMetrics,
) -> Result<LocaleSummary> {
    info!("Translating to {} ({})...", locale.folder(), locale.code());

    let chunk_size = config.chunk_size.max(1);
    let mut translated: Vec<String> = Vec::with_capacity(extraction.len());
    let mut chunks = 0;
    let mut fallback_chunks = 0;

    for (index, chunk) in extraction.values.chunks(chunk_size).enumerate() {
        metrics.record_chunk_request();
        let outcome = translate_chunk(client, config, chunk, locale).await;

        match &outcome {
            ChunkOutcome::Fallback(reason) => {
                warn!(
                    "Chunk {} for {} kept its original text: {}",
                    index,
                    locale.code(),
                    reason
                );
                metrics.record_chunk_fallback();
                fallback_chunks += 1;
            }
            ChunkOutcome::Translated(segments) if segments.len() < chunk.len() => {
                metrics.record_segments_padded(chunk.len() - segments.len());
            }
            ChunkOutcome::Translated(segments) if segments.len() > chunk.len() => {
                metrics.record_segments_truncated(segments.len() - chunk.len());
            }
            ChunkOutcome::Translated(_) => {}
        }

        translated.extend(outcome.repair(chunk));
        chunks += 1;

        tokio::time::sleep(config.throttle).await;
    }

    let document = rebuild(source, &extraction.paths, &translated)
        .with_context(|| format!("Failed to reassemble document for {}", locale))?;

    let path = config.document_path(locale);
    write_document(&path, &document)?;
    metrics.record_locale_written();
    info!("Saved {}.", locale.folder());

    Ok(LocaleSummary {
        locale,
        path,
        strings: translated.len(),
        chunks,
        fallback_chunks,
    })
}

/// Translate the source document into every machine-translated locale, in order.
pub async fn run(
    client: &reqwest::Client,
    config: &Config,
    source: &ResourceTree,
    locales: &[Locale],
) -> Result<(Vec<LocaleSummary>, MetricsReport)> {
    let extraction = flatten(source);
    info!("Extracted {} strings.", extraction.len());

    let metrics = TranslationMetrics::new();
    let mut summaries = Vec::with_capacity(locales.len());

    for &locale in locales {
        let summary = process_locale(client, config, source, &extraction, locale, &metrics).await?;
        summaries.push(summary);
    }

    let report = metrics.report();
    info!(
        "Translation run finished: {} locales, {} chunks, {} fallbacks ({:.1}% translated)",
        report.locales_written,
        report.chunks_requested,
        report.chunks_fallen_back,
        report.chunk_success_rate
    );

    Ok((summaries, report))
}
