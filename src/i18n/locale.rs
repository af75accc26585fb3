//! Locale type: a locale code validated against the registry.

use crate::i18n::{LocaleConfig, LocaleKind, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Backend locale code (e.g., "da", "zh-CN")
    code: &'static str,
}

impl Locale {
    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is declared in the registry
    /// * `Err` for unknown codes
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The source locale (English).
    pub fn source() -> Locale {
        Locale {
            code: LocaleRegistry::get().source().code,
        }
    }

    /// The hand-curated synthetic locale.
    pub fn synthetic() -> Locale {
        Locale {
            code: LocaleRegistry::get().synthetic().code,
        }
    }

    /// Every machine-translated locale, in processing order.
    pub fn machine_translated() -> Vec<Locale> {
        LocaleRegistry::get()
            .machine_translated()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Locale built through this type's constructors.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Output directory name under the locales root.
    pub fn folder(&self) -> &'static str {
        self.config().folder
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn kind(&self) -> LocaleKind {
        self.config().kind
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code)
    }
}
