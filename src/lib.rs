//! Generates locale documents from the English source document through a
//! machine-translation backend, and audits the hand-curated synthetic locale.

pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod orchestrator;
pub mod synthetic;
pub mod translation;
pub mod tree;

use anyhow::Result;

/// Initialize logging for the binaries
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_translator=info".parse()?),
        )
        .init();
    Ok(())
}
