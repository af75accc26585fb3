//! Locale bookkeeping for the translation pipeline.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for all locales, their output folders and kind
//! - `locale`: type-safe `Locale` validated against the registry
//! - `metrics`: per-run translation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_translator::i18n::Locale;
//!
//! let danish = Locale::from_code("da")?;
//! for locale in Locale::machine_translated() {
//!     println!("{} -> {}", locale.code(), locale.folder());
//! }
//! ```

mod locale;
mod metrics;
mod registry;

pub use locale::Locale;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleKind, LocaleRegistry};
