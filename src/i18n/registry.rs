//! Supported languages.
//!
//! The table is fixed at compile time; the lookup index over it is built on
//! first use and never changes afterwards. Which language is *selected* is
//! runtime state owned by [`LocalizationContext`](crate::i18n::LocalizationContext).

use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageConfig {
    /// ISO 639-1 code, also the translation table key
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,

    /// BCP 47 locale for the speech capability
    pub speech_locale: &'static str,

    /// Lookups that miss in any other language land here
    pub is_canonical: bool,

    /// Offered in the language picker
    pub enabled: bool,
}

/// Picker order.
pub(crate) const SUPPORTED_LANGUAGES: [LanguageConfig; 3] = [
    LanguageConfig {
        code: "en",
        name: "English",
        native_name: "English",
        speech_locale: "en-US",
        is_canonical: true,
        enabled: true,
    },
    LanguageConfig {
        code: "hi",
        name: "Hindi",
        native_name: "हिंदी",
        speech_locale: "hi-IN",
        is_canonical: false,
        enabled: true,
    },
    LanguageConfig {
        code: "pa",
        name: "Punjabi",
        native_name: "ਪੰਜਾਬੀ",
        speech_locale: "pa-IN",
        is_canonical: false,
        enabled: true,
    },
];

pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
    by_code: HashMap<&'static str, &'static LanguageConfig>,
    canonical: &'static LanguageConfig,
}

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| LanguageRegistry::build(&SUPPORTED_LANGUAGES))
    }

    /// Index a language table.
    ///
    /// # Panics
    /// If the table does not have exactly one canonical language.
    fn build(languages: &'static [LanguageConfig]) -> Self {
        let mut canonical = languages.iter().filter(|lang| lang.is_canonical);
        let canonical = match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("language table has no canonical language"),
            (Some(_), Some(_)) => panic!("language table has more than one canonical language"),
        };

        Self {
            languages,
            by_code: languages.iter().map(|lang| (lang.code, lang)).collect(),
            canonical,
        }
    }

    pub fn lookup(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.by_code.get(code).copied()
    }

    /// Every language in the table, disabled ones included.
    pub fn all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    pub fn enabled(&self) -> impl Iterator<Item = &'static LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled)
    }

    pub fn canonical(&self) -> &'static LanguageConfig {
        self.canonical
    }

    /// Whether `code` is a known, enabled language.
    pub fn supports(&self, code: &str) -> bool {
        self.lookup(code).is_some_and(|lang| lang.enabled)
    }

    /// Speech locale for `code`; unknown codes are voiced in the canonical locale.
    pub fn speech_locale_for(&self, code: &str) -> &'static str {
        self.lookup(code)
            .unwrap_or(self.canonical)
            .speech_locale
    }
}
