//! Translation lookup metrics.
//!
//! Counts how each lookup was resolved along the fallback chain. One instance
//! is owned by each [`LocalizationContext`](crate::i18n::LocalizationContext);
//! counters are atomics so lookups only need `&self`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a single lookup was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Found in the current language's table
    Localized,
    /// Missing in the current language, served from English
    EnglishFallback,
    /// Missing everywhere, the raw key was returned
    RawKey,
}

#[derive(Debug, Default)]
pub struct TranslationMetrics {
    localized: AtomicUsize,
    english_fallbacks: AtomicUsize,
    raw_key_fallbacks: AtomicUsize,
    speech_requests: AtomicUsize,
    speech_skipped: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how a lookup was resolved.
    pub fn record_lookup(&self, outcome: LookupOutcome) {
        let counter = match outcome {
            LookupOutcome::Localized => &self.localized,
            LookupOutcome::EnglishFallback => &self.english_fallbacks,
            LookupOutcome::RawKey => &self.raw_key_fallbacks,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a speech request; `skipped` when no speech capability was available.
    pub fn record_speech(&self, skipped: bool) {
        self.speech_requests.fetch_add(1, Ordering::Relaxed);
        if skipped {
            self.speech_skipped.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn localized(&self) -> usize {
        self.localized.load(Ordering::Relaxed)
    }

    pub fn english_fallbacks(&self) -> usize {
        self.english_fallbacks.load(Ordering::Relaxed)
    }

    pub fn raw_key_fallbacks(&self) -> usize {
        self.raw_key_fallbacks.load(Ordering::Relaxed)
    }

    pub fn speech_requests(&self) -> usize {
        self.speech_requests.load(Ordering::Relaxed)
    }

    pub fn speech_skipped(&self) -> usize {
        self.speech_skipped.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let localized = self.localized();
        let english_fallbacks = self.english_fallbacks();
        let raw_key_fallbacks = self.raw_key_fallbacks();
        let total_lookups = localized + english_fallbacks + raw_key_fallbacks;
        let localized_rate = if total_lookups > 0 {
            (localized as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            total_lookups,
            localized,
            english_fallbacks,
            raw_key_fallbacks,
            localized_rate,
            speech_requests: self.speech_requests(),
            speech_skipped: self.speech_skipped(),
        }
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub total_lookups: usize,
    pub localized: usize,
    pub english_fallbacks: usize,
    pub raw_key_fallbacks: usize,

    /// Share of lookups served in the current language, as a percentage (0-100)
    pub localized_rate: f64,

    pub speech_requests: usize,
    pub speech_skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_lookup_outcomes() {
        let metrics = TranslationMetrics::new();

        metrics.record_lookup(LookupOutcome::Localized);
        metrics.record_lookup(LookupOutcome::Localized);
        metrics.record_lookup(LookupOutcome::EnglishFallback);
        metrics.record_lookup(LookupOutcome::RawKey);

        assert_eq!(metrics.localized(), 2);
        assert_eq!(metrics.english_fallbacks(), 1);
        assert_eq!(metrics.raw_key_fallbacks(), 1);
    }

    #[test]
    fn test_record_speech() {
        let metrics = TranslationMetrics::new();

        metrics.record_speech(false);
        metrics.record_speech(true);

        assert_eq!(metrics.speech_requests(), 2);
        assert_eq!(metrics.speech_skipped(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.total_lookups, 0);
        assert_eq!(report.localized_rate, 0.0);
        assert_eq!(report.speech_requests, 0);
    }

    #[test]
    fn test_report_localized_rate() {
        let metrics = TranslationMetrics::new();

        // 3 localized, 1 fallback = 75%
        metrics.record_lookup(LookupOutcome::Localized);
        metrics.record_lookup(LookupOutcome::Localized);
        metrics.record_lookup(LookupOutcome::Localized);
        metrics.record_lookup(LookupOutcome::EnglishFallback);

        let report = metrics.report();
        assert_eq!(report.total_lookups, 4);
        assert_eq!(report.localized_rate, 75.0);
    }

    #[test]
    fn test_report_all_raw_keys() {
        let metrics = TranslationMetrics::new();
        metrics.record_lookup(LookupOutcome::RawKey);
        metrics.record_lookup(LookupOutcome::RawKey);

        let report = metrics.report();
        assert_eq!(report.raw_key_fallbacks, 2);
        assert_eq!(report.localized_rate, 0.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = TranslationMetrics::new();
        let second = TranslationMetrics::new();

        first.record_lookup(LookupOutcome::Localized);

        assert_eq!(first.localized(), 1);
        assert_eq!(second.localized(), 0);
    }

    #[test]
    fn test_report_serializes_outcome_names() {
        let json = serde_json::to_string(&LookupOutcome::EnglishFallback).unwrap();
        assert_eq!(json, "\"english_fallback\"");
    }
}
