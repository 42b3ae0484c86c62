//! Language type: a language code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated, supported language.
///
/// Only codes present and enabled in the [`LanguageRegistry`] can be
/// constructed, so holding a `Language` means holding a supported code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "de")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const GERMAN: Language = Language { code: "de" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language used when nothing better is known.
    pub fn fallback() -> Language {
        Language {
            code: LanguageRegistry::get().fallback().code,
        }
    }

    /// Pick a language from an environment locale hint.
    ///
    /// Only the primary subtag of the hint is consulted (`"de-AT"`,
    /// `"de_DE.UTF-8"` and `"DE"` all select German). Unsupported, empty or
    /// malformed hints select the fallback.
    pub fn detect(hint: &str) -> Language {
        LanguageRegistry::get()
            .find_enabled(primary_subtag(hint))
            .map(|config| Language { code: config.code })
            .unwrap_or_else(Language::fallback)
    }

    /// The language a toggle switches to from this one.
    ///
    /// This is the next enabled language in registry order, wrapping
    /// around. With two supported languages it is simply "the other one".
    pub fn alternate(&self) -> Language {
        let enabled = LanguageRegistry::get().list_enabled();
        let position = enabled
            .iter()
            .position(|config| config.code == self.code)
            .unwrap_or(0);

        let next = enabled
            .get((position + 1) % enabled.len().max(1))
            .map(|config| config.code)
            .unwrap_or(self.code);

        Language { code: next }
    }

    /// ISO 639-1 code, as used for the document language attribute and
    /// translation file names.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code`, `detect` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label for a toggle control that would switch to this language.
    pub fn toggle_label(&self) -> &'static str {
        self.config().toggle_label
    }

    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Primary subtag of a locale string: everything before the first region,
/// encoding or modifier separator.
pub fn primary_subtag(hint: &str) -> &str {
    hint.trim()
        .split(|c: char| matches!(c, '-' | '_' | '.' | '@'))
        .next()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_fallback());
    }

    #[test]
    fn test_german_constant() {
        let german = Language::GERMAN;
        assert_eq!(german.code(), "de");
        assert_eq!(german.native_name(), "Deutsch");
        assert!(!german.is_fallback());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_german() {
        let language = Language::from_code("de").expect("Should succeed");
        assert_eq!(language, Language::GERMAN);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== detect Tests ====================

    #[test]
    fn test_detect_exact_code() {
        assert_eq!(Language::detect("de"), Language::GERMAN);
        assert_eq!(Language::detect("en"), Language::ENGLISH);
    }

    #[test]
    fn test_detect_with_region() {
        assert_eq!(Language::detect("de-AT"), Language::GERMAN);
        assert_eq!(Language::detect("en-GB"), Language::ENGLISH);
    }

    #[test]
    fn test_detect_posix_locale() {
        assert_eq!(Language::detect("de_DE.UTF-8"), Language::GERMAN);
        assert_eq!(Language::detect("de.UTF-8"), Language::GERMAN);
        assert_eq!(Language::detect("de_DE@euro"), Language::GERMAN);
    }

    #[test]
    fn test_detect_unsupported_falls_back() {
        assert_eq!(Language::detect("fr"), Language::ENGLISH);
        assert_eq!(Language::detect("fr-CA"), Language::ENGLISH);
    }

    #[test]
    fn test_detect_malformed_falls_back() {
        assert_eq!(Language::detect(""), Language::ENGLISH);
        assert_eq!(Language::detect("-de"), Language::ENGLISH);
        assert_eq!(Language::detect("deutsch"), Language::ENGLISH);
        assert_eq!(Language::detect("   "), Language::ENGLISH);
    }

    #[test]
    fn test_detect_ignores_case() {
        assert_eq!(Language::detect("DE-de"), Language::GERMAN);
    }

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("de-AT"), "de");
        assert_eq!(primary_subtag(" en_US.UTF-8 "), "en");
        assert_eq!(primary_subtag(""), "");
    }

    proptest! {
        #[test]
        fn prop_detect_only_returns_matching_supported_language(hint in "\\PC{0,12}") {
            let detected = Language::detect(&hint);
            let primary = primary_subtag(&hint);
            if detected.code().eq_ignore_ascii_case(primary) {
                prop_assert!(LanguageRegistry::get().is_enabled(detected.code()));
            } else {
                prop_assert_eq!(detected, Language::fallback());
            }
        }

        #[test]
        fn prop_detect_regioned_german(region in "[A-Z]{2}") {
            let hint = format!("de-{}", region);
            prop_assert_eq!(Language::detect(&hint), Language::GERMAN);
        }
    }

    // ==================== alternate Tests ====================

    #[test]
    fn test_alternate_is_binary_toggle() {
        assert_eq!(Language::ENGLISH.alternate(), Language::GERMAN);
        assert_eq!(Language::GERMAN.alternate(), Language::ENGLISH);
    }

    #[test]
    fn test_alternate_twice_is_identity() {
        assert_eq!(Language::ENGLISH.alternate().alternate(), Language::ENGLISH);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Language::ENGLISH.toggle_label(), "EN");
        assert_eq!(Language::GERMAN.toggle_label(), "DE");
    }

    #[test]
    fn test_display_writes_code() {
        assert_eq!(Language::GERMAN.to_string(), "de");
    }

    #[test]
    fn test_language_usable_as_map_key() {
        let mut map = std::collections::HashMap::new();
        map.insert(Language::ENGLISH, 1);
        map.insert(Language::from_code("en").unwrap(), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&Language::ENGLISH], 2);
    }
}
