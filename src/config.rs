use crate::retry::RetryConfig;
use crate::source::{DirectoryTranslationSource, HttpTranslationSource, TranslationSource};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Translation source
    pub source_url: Option<String>,
    pub translations_dir: PathBuf,
    pub fetch_attempts: u32,

    // Environment locale hint
    pub locale_hint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Remote tables take precedence over the local directory
            source_url: std::env::var("LOCALIZER_SOURCE_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            translations_dir: std::env::var("LOCALIZER_TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("translations")),
            fetch_attempts: match std::env::var("LOCALIZER_FETCH_ATTEMPTS") {
                Ok(v) => v
                    .trim()
                    .parse::<u32>()
                    .context("LOCALIZER_FETCH_ATTEMPTS must be a positive integer")?
                    .max(1),
                Err(_) => 1,
            },

            locale_hint: std::env::var("LOCALIZER_LOCALE")
                .or_else(|_| std::env::var("LANG"))
                .unwrap_or_default(),
        })
    }

    /// Build the translation source this configuration describes.
    pub fn translation_source(&self) -> Box<dyn TranslationSource> {
        match &self.source_url {
            Some(url) => Box::new(
                HttpTranslationSource::new(url.clone())
                    .with_retry(RetryConfig::translation_fetch(self.fetch_attempts)),
            ),
            None => Box::new(DirectoryTranslationSource::new(self.translations_dir.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "LOCALIZER_SOURCE_URL",
        "LOCALIZER_TRANSLATIONS_DIR",
        "LOCALIZER_FETCH_ATTEMPTS",
        "LOCALIZER_LOCALE",
        "LANG",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.source_url, None);
        assert_eq!(config.translations_dir, PathBuf::from("translations"));
        assert_eq!(config.fetch_attempts, 1);
        assert_eq!(config.locale_hint, "");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("LOCALIZER_SOURCE_URL", "https://cdn.example.com/i18n");
        std::env::set_var("LOCALIZER_TRANSLATIONS_DIR", "/srv/i18n");
        std::env::set_var("LOCALIZER_FETCH_ATTEMPTS", "3");
        std::env::set_var("LOCALIZER_LOCALE", "de-AT");
        std::env::set_var("LANG", "en_US.UTF-8");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.source_url.as_deref(), Some("https://cdn.example.com/i18n"));
        assert_eq!(config.translations_dir, PathBuf::from("/srv/i18n"));
        assert_eq!(config.fetch_attempts, 3);
        assert_eq!(config.locale_hint, "de-AT");
    }

    #[test]
    #[serial]
    fn test_locale_hint_falls_back_to_lang() {
        clear_env();
        std::env::set_var("LANG", "de_DE.UTF-8");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.locale_hint, "de_DE.UTF-8");
    }

    #[test]
    #[serial]
    fn test_blank_source_url_is_ignored() {
        clear_env();
        std::env::set_var("LOCALIZER_SOURCE_URL", "  ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.source_url, None);
    }

    #[test]
    #[serial]
    fn test_zero_fetch_attempts_clamped() {
        clear_env();
        std::env::set_var("LOCALIZER_FETCH_ATTEMPTS", "0");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.fetch_attempts, 1);
    }

    #[test]
    #[serial]
    fn test_invalid_fetch_attempts_is_error() {
        clear_env();
        std::env::set_var("LOCALIZER_FETCH_ATTEMPTS", "many");

        let result = Config::from_env();
        clear_env();

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("LOCALIZER_FETCH_ATTEMPTS"));
    }
}
