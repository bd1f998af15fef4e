//! Localization context: the selected language, lookups and speech.
//!
//! The context is an explicit object handed to whoever renders text. Language
//! changes are published on a `tokio::sync::watch` channel so views can react
//! without polling.

use crate::i18n::{
    LanguageRegistry, LookupOutcome, MessageKey, MetricsReport, TranslationMetrics,
    TranslationTable,
};
use crate::preferences::{PreferenceStore, PREFERRED_LANGUAGE_KEY};
use crate::speech::{self, SpeechSynthesizer, SpeechTask, Utterance};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct LocalizationContext {
    language: watch::Sender<String>,
    store: Arc<dyn PreferenceStore>,
    speech: Arc<dyn SpeechSynthesizer>,
    metrics: TranslationMetrics,
}

impl LocalizationContext {
    /// Create a context with an explicit starting language. Nothing is persisted.
    pub fn new(
        language: impl Into<String>,
        store: Arc<dyn PreferenceStore>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        let (language, _) = watch::channel(language.into());
        Self {
            language,
            store,
            speech,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Create a context seeded from the persisted preference, else `default_code`.
    ///
    /// An unreadable store is logged and treated as "no preference".
    pub fn load(
        store: Arc<dyn PreferenceStore>,
        speech: Arc<dyn SpeechSynthesizer>,
        default_code: &str,
    ) -> Self {
        let language = match store.get(PREFERRED_LANGUAGE_KEY) {
            Ok(Some(code)) if !code.trim().is_empty() => {
                debug!("Restored preferred language '{}'", code);
                code
            }
            Ok(_) => default_code.to_string(),
            Err(e) => {
                warn!("Could not read preferred language, using '{}': {}", default_code, e);
                default_code.to_string()
            }
        };

        Self::new(language, store, speech)
    }

    /// Currently selected language code. May be a code the registry does not know.
    pub fn current_language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Receiver notified on every language change.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.language.subscribe()
    }

    /// Localized text for `key`: current language, else English, else the key.
    pub fn translate(&self, key: MessageKey) -> &'static str {
        let current = self.language.borrow();

        if let Some(text) = TranslationTable::lookup(&current, key) {
            self.metrics.record_lookup(LookupOutcome::Localized);
            return text;
        }

        debug!("No '{}' translation for '{}', using English", *current, key);
        self.metrics.record_lookup(LookupOutcome::EnglishFallback);
        TranslationTable::english(key)
    }

    /// Same fallback chain for a raw string key.
    ///
    /// Strings that do not name a [`MessageKey`] are returned unchanged.
    pub fn translate_str<'a>(&self, raw: &'a str) -> &'a str {
        match raw.parse::<MessageKey>() {
            Ok(key) => self.translate(key),
            Err(_) => {
                self.metrics.record_lookup(LookupOutcome::RawKey);
                raw
            }
        }
    }

    /// Switch the active language and persist the choice.
    ///
    /// Unsupported codes are adopted anyway; lookups then resolve through the
    /// English fallback. A failed write is logged and the in-memory change kept.
    pub fn set_language(&mut self, code: &str) {
        if !LanguageRegistry::get().supports(code) {
            warn!("Language '{}' is not supported, text will fall back to English", code);
        }

        self.language.send_replace(code.to_string());
        info!("Language set to '{}'", code);

        if let Err(e) = self.store.set(PREFERRED_LANGUAGE_KEY, code) {
            warn!("Failed to persist preferred language '{}': {}", code, e);
        }
    }

    /// Voice `text` in the current language's locale, if speech is available.
    pub fn speak(&self, text: &str) -> SpeechTask {
        let locale = LanguageRegistry::get().speech_locale_for(&self.language.borrow());
        let task = speech::dispatch(&self.speech, Utterance::new(text, locale));
        self.metrics.record_speech(task.is_skipped());
        task
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryPreferenceStore, PreferenceError};
    use crate::speech::{RecordingSynthesizer, Unavailable};

    fn context(code: &str) -> LocalizationContext {
        LocalizationContext::new(
            code,
            Arc::new(MemoryPreferenceStore::new()),
            Arc::new(Unavailable),
        )
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Poisoned)
        }
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate_english() {
        assert_eq!(context("en").translate(MessageKey::NavHome), "Home");
    }

    #[test]
    fn test_translate_hindi() {
        assert_eq!(context("hi").translate(MessageKey::NavHome), "होम");
    }

    #[test]
    fn test_translate_punjabi() {
        assert_eq!(context("pa").translate(MessageKey::CommonNext), "ਅਗਲਾ");
    }

    #[test]
    fn test_translate_missing_hindi_falls_back_to_english() {
        let ctx = context("hi");
        assert_eq!(ctx.translate(MessageKey::PharmacyInStock), "In Stock");
        assert_eq!(ctx.metrics().english_fallbacks, 1);
    }

    #[test]
    fn test_translate_unsupported_language_uses_english() {
        assert_eq!(context("fr").translate(MessageKey::CommonSave), "Save");
    }

    #[test]
    fn test_translate_str_known_key() {
        assert_eq!(context("pa").translate_str("nav.home"), "ਘਰ");
    }

    #[test]
    fn test_translate_str_unknown_key_is_returned() {
        let ctx = context("hi");
        assert_eq!(ctx.translate_str("Interactive Maps"), "Interactive Maps");
        assert_eq!(ctx.metrics().raw_key_fallbacks, 1);
    }

    // ==================== Language Tests ====================

    #[test]
    fn test_set_language_persists() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut ctx = LocalizationContext::new("en", store.clone(), Arc::new(Unavailable));

        ctx.set_language("pa");

        assert_eq!(ctx.current_language(), "pa");
        assert_eq!(
            store.get(PREFERRED_LANGUAGE_KEY).unwrap(),
            Some("pa".to_string())
        );
    }

    #[test]
    fn test_set_language_unsupported_is_adopted() {
        let mut ctx = context("en");
        ctx.set_language("fr");

        assert_eq!(ctx.current_language(), "fr");
        assert_eq!(ctx.translate(MessageKey::NavHome), "Home");
    }

    #[test]
    fn test_set_language_store_failure_keeps_change() {
        let mut ctx = LocalizationContext::new("en", Arc::new(BrokenStore), Arc::new(Unavailable));
        ctx.set_language("hi");
        assert_eq!(ctx.current_language(), "hi");
    }

    #[test]
    fn test_load_uses_persisted_language() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(PREFERRED_LANGUAGE_KEY, "hi").unwrap();

        let ctx = LocalizationContext::load(store, Arc::new(Unavailable), "en");
        assert_eq!(ctx.current_language(), "hi");
    }

    #[test]
    fn test_load_without_preference_uses_default() {
        let ctx = LocalizationContext::load(
            Arc::new(MemoryPreferenceStore::new()),
            Arc::new(Unavailable),
            "pa",
        );
        assert_eq!(ctx.current_language(), "pa");
    }

    #[test]
    fn test_load_with_broken_store_uses_default() {
        let ctx = LocalizationContext::load(Arc::new(BrokenStore), Arc::new(Unavailable), "en");
        assert_eq!(ctx.current_language(), "en");
    }

    #[test]
    fn test_subscribe_sees_language_change() {
        let mut ctx = context("en");
        let mut rx = ctx.subscribe();

        ctx.set_language("hi");

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "hi");
    }

    // ==================== Speak Tests ====================

    #[test]
    fn test_speak_without_capability_is_skipped() {
        let ctx = context("en");
        assert!(ctx.speak("hello").is_skipped());
        assert_eq!(ctx.metrics().speech_skipped, 1);
    }

    #[tokio::test]
    async fn test_speak_uses_current_locale() {
        let recorder = Arc::new(RecordingSynthesizer::new());
        let mut ctx = LocalizationContext::new(
            "en",
            Arc::new(MemoryPreferenceStore::new()),
            recorder.clone(),
        );

        assert!(ctx.speak("hello").finished().await);
        ctx.set_language("pa");
        assert!(ctx.speak("ਸਤ ਸ੍ਰੀ ਅਕਾਲ").finished().await);
        ctx.set_language("xx");
        assert!(ctx.speak("fallback").finished().await);

        let locales: Vec<_> = recorder.spoken().iter().map(|u| u.locale).collect();
        assert_eq!(locales, vec!["en-US", "pa-IN", "en-US"]);
    }
}
