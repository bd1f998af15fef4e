//! Translation table validation.
//!
//! Checks that localized strings keep the `{placeholders}` of their English
//! source and reports per-language coverage. Missing translations are
//! warnings (the fallback chain covers them); placeholder mismatches are
//! errors because they would render a broken message.

use crate::i18n::{LanguageRegistry, MessageKey, TranslationTable};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Critical errors that indicate broken translations
    pub errors: Vec<String>,

    /// Non-critical warnings (missing translations)
    pub warnings: Vec<String>,

    /// Per-language coverage, in registry order
    pub coverage: Vec<LanguageCoverage>,
}

/// How much of the key space a language has translated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCoverage {
    pub code: &'static str,
    pub translated: usize,
    pub total: usize,

    /// Percentage (0-100)
    pub percent: f64,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            coverage: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    pub fn coverage_for(&self, code: &str) -> Option<&LanguageCoverage> {
        self.coverage.iter().find(|c| c.code == code)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a translation keeps the placeholders of its source.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let orig_placeholders = Self::extract_placeholders(original);
        let trans_placeholders = Self::extract_placeholders(translated);
        if orig_placeholders != trans_placeholders {
            report.errors.push(format!(
                "Placeholder mismatch: original has {:?}, translation has {:?}",
                orig_placeholders, trans_placeholders
            ));
        }

        if translated.trim().is_empty() {
            report.errors.push("Translation is blank".to_string());
        }

        report
    }

    /// Validate every language in the registry against the English table.
    pub fn validate_table() -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical().code;
        let total = MessageKey::ALL.len();

        for language in registry.all() {
            let mut translated = 0;

            for key in MessageKey::ALL {
                let source = TranslationTable::english(*key);
                match TranslationTable::lookup(language.code, *key) {
                    Some(text) => {
                        translated += 1;
                        if language.code == canonical {
                            if text.trim().is_empty() {
                                report
                                    .errors
                                    .push(format!("English text for '{}' is blank", key));
                            }
                            continue;
                        }
                        let entry = Self::validate(source, text);
                        report.errors.extend(
                            entry
                                .errors
                                .into_iter()
                                .map(|e| format!("'{}' [{}]: {}", key, language.code, e)),
                        );
                    }
                    None => report.warnings.push(format!(
                        "Missing '{}' translation for '{}'",
                        language.code, key
                    )),
                }
            }

            report.coverage.push(LanguageCoverage {
                code: language.code,
                translated,
                total,
                percent: (translated as f64 / total as f64) * 100.0,
            });
        }

        report
    }

    /// Extract `{name}` placeholders, sorted so word order changes are allowed
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

        let mut placeholders: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();
        placeholders.sort();
        placeholders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let placeholders = TranslationValidator::extract_placeholders("Hello {name}!");
        assert_eq!(placeholders, vec!["name"]);
    }

    #[test]
    fn test_extract_placeholders_sorted() {
        let placeholders =
            TranslationValidator::extract_placeholders("{time} on {date} with {doctor}");
        assert_eq!(placeholders, vec!["date", "doctor", "time"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("No placeholders").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_malformed() {
        assert!(TranslationValidator::extract_placeholders("{ spaced } {1abc}").is_empty());
    }

    // ==================== Pair Validation Tests ====================

    #[test]
    fn test_validate_reordered_placeholders_is_clean() {
        let report =
            TranslationValidator::validate("{current} of {total}", "{total} में से {current}");
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_placeholder() {
        let report = TranslationValidator::validate("{doctor} on {date}", "{doctor}");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_validate_blank_translation() {
        let report = TranslationValidator::validate("Save", "   ");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("blank"));
    }

    // ==================== Table Validation Tests ====================

    #[test]
    fn test_validate_table_has_no_errors() {
        let report = TranslationValidator::validate_table();
        assert!(!report.has_errors(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_validate_table_english_fully_covered() {
        let report = TranslationValidator::validate_table();
        let english = report.coverage_for("en").expect("english coverage");

        assert_eq!(english.translated, english.total);
        assert_eq!(english.percent, 100.0);
    }

    #[test]
    fn test_validate_table_reports_partial_languages() {
        let report = TranslationValidator::validate_table();
        let hindi = report.coverage_for("hi").expect("hindi coverage");
        let punjabi = report.coverage_for("pa").expect("punjabi coverage");

        assert!(hindi.translated > 0 && hindi.translated < hindi.total);
        assert!(punjabi.translated > 0 && punjabi.translated < punjabi.total);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'hi'") && w.contains("pharmacy.in_stock")));
    }

    #[test]
    fn test_validation_report_default_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(report.coverage.is_empty());
    }
}
