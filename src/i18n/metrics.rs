//! Translation run metrics.
//!
//! Counts chunk requests, fallbacks and length repairs over one run so the
//! binary can log how much of the output is actually machine-translated.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one translation run.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Chunks sent to the translation backend
    chunks_requested: AtomicUsize,

    /// Chunks that kept their original text
    chunks_fallen_back: AtomicUsize,

    /// Segments filled in from the original because the response was short
    segments_padded: AtomicUsize,

    /// Surplus segments dropped because the response was long
    segments_truncated: AtomicUsize,

    /// Locale documents written to disk
    locales_written: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_chunk_request(&self) {
        self.chunks_requested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_chunk_fallback(&self) {
        self.chunks_fallen_back.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_segments_padded(&self, count: usize) {
        self.segments_padded.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_segments_truncated(&self, count: usize) {
        self.segments_truncated.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_locale_written(&self) {
        self.locales_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn chunks_requested(&self) -> usize {
        self.chunks_requested.load(Ordering::Relaxed)
    }

    pub fn chunks_fallen_back(&self) -> usize {
        self.chunks_fallen_back.load(Ordering::Relaxed)
    }

    pub fn segments_padded(&self) -> usize {
        self.segments_padded.load(Ordering::Relaxed)
    }

    pub fn segments_truncated(&self) -> usize {
        self.segments_truncated.load(Ordering::Relaxed)
    }

    pub fn locales_written(&self) -> usize {
        self.locales_written.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let requested = self.chunks_requested();
        let fallen_back = self.chunks_fallen_back();
        let chunk_success_rate = if requested > 0 {
            (requested.saturating_sub(fallen_back) as f64 / requested as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            chunks_requested: requested,
            chunks_fallen_back: fallen_back,
            chunk_success_rate,
            segments_padded: self.segments_padded(),
            segments_truncated: self.segments_truncated(),
            locales_written: self.locales_written(),
        }
    }
}

/// Snapshot of the run counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub chunks_requested: usize,
    pub chunks_fallen_back: usize,

    /// Share of chunks that came back translated, as a percentage (0-100)
    pub chunk_success_rate: f64,

    pub segments_padded: usize,
    pub segments_truncated: usize,
    pub locales_written: usize,
}
