use std::path::PathBuf;
use std::time::Duration;

use crate::i18n::Locale;

/// Maximum number of strings sent in one translation request
pub const CHUNK_SIZE: usize = 30;

/// Pause after every chunk request
pub const THROTTLE_DELAY: Duration = Duration::from_secs(1);

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

pub const DEFAULT_LOCALES_DIR: &str = "public/locales";

/// File name of every locale document inside its folder
pub const DOCUMENT_FILE_NAME: &str = "translation.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub locales_dir: PathBuf,

    // Translation backend
    pub translate_api_url: String,

    // Batching
    pub chunk_size: usize,
    pub throttle: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            locales_dir: std::env::var("LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOCALES_DIR)),

            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),

            chunk_size: CHUNK_SIZE,
            throttle: THROTTLE_DELAY,
        }
    }

    /// Path of the document for `locale`: `<locales_dir>/<folder>/translation.json`
    pub fn document_path(&self, locale: Locale) -> PathBuf {
        self.locales_dir.join(locale.folder()).join(DOCUMENT_FILE_NAME)
    }

    pub fn source_path(&self) -> PathBuf {
        self.document_path(Locale::source())
    }

    pub fn synthetic_path(&self) -> PathBuf {
        self.document_path(Locale::synthetic())
    }
}
