//! Translation table validation.
//!
//! Compares a language's table against the fallback table so gaps show up
//! before a page renders them as missing-key warnings.

use crate::i18n::TranslationTable;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Key paths the page can ask for but the table cannot resolve
    pub errors: Vec<String>,

    /// Non-critical issues (extra keys, placeholder or markup drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TableValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

impl TableValidator {
    /// Validate `candidate` against `reference` (normally the fallback table).
    ///
    /// - every usable key of the reference must resolve in the candidate (error)
    /// - keys only present in the candidate are reported as warnings
    /// - `{placeholder}` names and the number of markup tags must match
    pub fn validate(reference: &TranslationTable, candidate: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_keys: BTreeSet<String> = reference.leaf_keys().into_iter().collect();
        let candidate_keys: BTreeSet<String> = candidate.leaf_keys().into_iter().collect();

        for key in reference_keys.difference(&candidate_keys) {
            report.errors.push(format!("Missing translation for key '{}'", key));
        }

        for key in candidate_keys.difference(&reference_keys) {
            report
                .warnings
                .push(format!("Key '{}' is not present in the reference table", key));
        }

        for key in reference_keys.intersection(&candidate_keys) {
            let (Some(original), Some(translated)) = (reference.resolve(key), candidate.resolve(key))
            else {
                continue;
            };

            let orig_placeholders = Self::extract_placeholders(original);
            let trans_placeholders = Self::extract_placeholders(translated);
            if orig_placeholders != trans_placeholders {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}': reference has {:?}, translation has {:?}",
                    key, orig_placeholders, trans_placeholders
                ));
            }

            let orig_tags = Self::count_tags(original);
            let trans_tags = Self::count_tags(translated);
            if orig_tags != trans_tags {
                report.warnings.push(format!(
                    "Markup mismatch for '{}': reference has {} tags, translation has {}",
                    key, orig_tags, trans_tags
                ));
            }
        }

        report
    }

    /// Distinct `{name}` placeholders, sorted.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("valid placeholder regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Number of opening and closing markup tags.
    fn count_tags(text: &str) -> usize {
        let regex =
            TAG_REGEX.get_or_init(|| Regex::new(r"</?[a-zA-Z][^<>]*>").expect("valid tag regex"));

        regex.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(value: serde_json::Value) -> TranslationTable {
        TranslationTable::from_value(value).unwrap()
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_new_report_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_placeholders() {
        let placeholders = TableValidator::extract_placeholders("Hi {name}, you have {count} {count}");
        assert_eq!(
            placeholders.into_iter().collect::<Vec<_>>(),
            vec!["count".to_string(), "name".to_string()]
        );
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TableValidator::extract_placeholders("No placeholders {}").is_empty());
    }

    #[test]
    fn test_count_tags() {
        assert_eq!(TableValidator::count_tags("Hello <strong>world</strong><br/>"), 3);
        assert_eq!(TableValidator::count_tags("1 < 2 and 3 > 2"), 0);
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_identical_shape_is_clean() {
        let en = table(json!({"greeting": {"hello": "Hello"}}));
        let de = table(json!({"greeting": {"hello": "Hallo"}}));

        assert!(TableValidator::validate(&en, &de).is_clean());
    }

    #[test]
    fn test_validate_missing_key_is_error() {
        let en = table(json!({"greeting": {"hello": "Hello", "bye": "Bye"}}));
        let de = table(json!({"greeting": {"hello": "Hallo"}}));

        let report = TableValidator::validate(&en, &de);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("greeting.bye"));
    }

    #[test]
    fn test_validate_empty_translation_is_error() {
        let en = table(json!({"title": "Welcome"}));
        let de = table(json!({"title": ""}));

        let report = TableValidator::validate(&en, &de);
        assert!(report.has_errors());
    }

    #[test]
    fn test_validate_extra_key_is_warning() {
        let en = table(json!({"title": "Welcome"}));
        let de = table(json!({"title": "Willkommen", "extra": "Mehr"}));

        let report = TableValidator::validate(&en, &de);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("extra"));
    }

    #[test]
    fn test_validate_placeholder_mismatch() {
        let en = table(json!({"welcome": "Welcome, {name}"}));
        let de = table(json!({"welcome": "Willkommen, {nme}"}));

        let report = TableValidator::validate(&en, &de);
        assert!(report.warnings.iter().any(|w| w.contains("Placeholder mismatch")));
    }

    #[test]
    fn test_validate_markup_mismatch() {
        let en = table(json!({"intro": "Read <a href=\"/docs\">the docs</a>"}));
        let de = table(json!({"intro": "Lies die Doku"}));

        let report = TableValidator::validate(&en, &de);
        assert!(report.warnings.iter().any(|w| w.contains("Markup mismatch")));
    }
}
