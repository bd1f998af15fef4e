//! A language the app can be switched to.
//!
//! [`LocalizationContext`](crate::i18n::LocalizationContext) accepts any code
//! and falls back to English. `Language` is for the places that must refuse
//! an unsupported code instead: the language picker and configuration.

use crate::i18n::registry::SUPPORTED_LANGUAGES;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unknown language code '{0}'")]
    Unknown(String),

    #[error("language '{0}' is disabled")]
    Disabled(String),
}

/// Handle to an enabled entry of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(&'static LanguageConfig);

impl Language {
    pub const ENGLISH: Language = Language(&SUPPORTED_LANGUAGES[0]);
    pub const HINDI: Language = Language(&SUPPORTED_LANGUAGES[1]);
    pub const PUNJABI: Language = Language(&SUPPORTED_LANGUAGES[2]);

    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        match LanguageRegistry::get().lookup(code) {
            Some(config) if config.enabled => Ok(Language(config)),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    pub fn canonical() -> Language {
        Language(LanguageRegistry::get().canonical())
    }

    /// Enabled languages in picker order.
    pub fn all() -> impl Iterator<Item = Language> {
        LanguageRegistry::get().enabled().map(Language)
    }

    pub fn code(self) -> &'static str {
        self.0.code
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }

    pub fn native_name(self) -> &'static str {
        self.0.native_name
    }

    pub fn speech_locale(self) -> &'static str {
        self.0.speech_locale
    }

    pub fn is_canonical(self) -> bool {
        self.0.is_canonical
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::from_code(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.native_name(), self.code())
    }
}
