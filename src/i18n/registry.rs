//! Language registry: single source of truth for the languages a page can be
//! rendered in.
//!
//! The registry is immutable configuration initialized once through
//! `OnceLock`. Mutable localization state (current language, loaded tables)
//! lives on the controller, never here.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "de")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Deutsch")
    pub native_name: &'static str,

    /// Label shown on the toggle control when a toggle would switch *to* this language
    pub toggle_label: &'static str,

    /// Whether this is the fallback language (exactly one should be true)
    pub is_fallback: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Look up an enabled language, comparing codes ASCII case-insensitively.
    ///
    /// Language subtags are case-insensitive, so `"DE"` and `"de"` name the
    /// same language.
    pub fn find_enabled(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.enabled && lang.code.eq_ignore_ascii_case(code))
    }

    /// All enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All languages, including disabled ones.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The fallback language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one fallback language.
    /// The registry is a compile-time constant, so this indicates a
    /// programming error rather than a runtime condition.
    pub fn fallback(&self) -> &LanguageConfig {
        let fallbacks: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_fallback)
            .collect();

        match fallbacks.len() {
            0 => panic!("No fallback language found in registry"),
            1 => fallbacks[0],
            _ => panic!("Multiple fallback languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Supported languages: English (fallback) and German.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            toggle_label: "EN",
            is_fallback: true,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            toggle_label: "DE",
            is_fallback: false,
            enabled: true,
        },
    ]
}
