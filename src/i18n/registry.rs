//! Locale registry: single source of truth for every locale the pipeline knows.
//!
//! Declaration order matters: machine-translated locales are processed in the
//! order they appear here. The registry is built once behind a `OnceLock` and
//! is immutable afterwards.

use std::sync::OnceLock;

/// How a locale's document comes into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleKind {
    /// The hand-written source document every other locale derives from
    Source,
    /// Generated by the external translation service on every run
    MachineTranslated,
    /// Fictional locale the backend cannot serve; curated by hand
    Synthetic,
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Code understood by the translation backend (e.g., "da", "zh-CN")
    pub code: &'static str,

    /// Directory name under the locales root (e.g., "zh" for "zh-CN")
    pub folder: &'static str,

    /// English name of the locale
    pub name: &'static str,

    pub kind: LocaleKind,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its backend code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in declaration order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Locales generated through the translation backend, in processing order.
    pub fn machine_translated(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.kind == LocaleKind::MachineTranslated)
            .collect()
    }

    /// The source locale every translation starts from.
    ///
    /// # Panics
    /// Panics if the registry does not declare exactly one source locale.
    pub fn source(&self) -> &LocaleConfig {
        self.single(LocaleKind::Source)
    }

    /// The hand-curated synthetic locale.
    ///
    /// # Panics
    /// Panics if the registry does not declare exactly one synthetic locale.
    pub fn synthetic(&self) -> &LocaleConfig {
        self.single(LocaleKind::Synthetic)
    }

    fn single(&self, kind: LocaleKind) -> &LocaleConfig {
        let matching: Vec<_> = self.locales.iter().filter(|l| l.kind == kind).collect();

        match matching.len() {
            0 => panic!("No {:?} locale found in registry", kind),
            1 => matching[0],
            _ => panic!("Multiple {:?} locales found in registry", kind),
        }
    }
}

fn translated(code: &'static str, name: &'static str) -> LocaleConfig {
    LocaleConfig {
        code,
        folder: code,
        name,
        kind: LocaleKind::MachineTranslated,
    }
}

/// Default locale configurations.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            folder: "en",
            name: "English",
            kind: LocaleKind::Source,
        },
        translated("da", "Danish"),
        translated("sv", "Swedish"),
        translated("no", "Norwegian"),
        translated("fi", "Finnish"),
        translated("hu", "Hungarian"),
        translated("pl", "Polish"),
        translated("pt", "Portuguese"),
        translated("el", "Greek"),
        translated("ru", "Russian"),
        LocaleConfig {
            code: "zh-CN",
            folder: "zh",
            name: "Chinese (Simplified)",
            kind: LocaleKind::MachineTranslated,
        },
        translated("de", "German"),
        translated("es", "Spanish"),
        translated("fr", "French"),
        translated("nl", "Dutch"),
        translated("it", "Italian"),
        LocaleConfig {
            code: "tlh",
            folder: "tlh",
            name: "Klingon",
            kind: LocaleKind::Synthetic,
        },
    ]
}
