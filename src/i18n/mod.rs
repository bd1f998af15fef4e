//! Internationalization (i18n) module for multi-language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their speech locales
//! - `language`: Validated `Language` type
//! - `strings`: Typed message keys and the per-language translation tables
//! - `context`: The selected language, the fallback chain and speech
//! - `validator`: Placeholder and coverage checks over the tables
//! - `metrics`: How lookups were resolved along the fallback chain
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use village_care::i18n::{LocalizationContext, MessageKey};
//! use village_care::preferences::MemoryPreferenceStore;
//! use village_care::speech::Unavailable;
//!
//! let mut ctx = LocalizationContext::load(
//!     Arc::new(MemoryPreferenceStore::new()),
//!     Arc::new(Unavailable),
//!     "en",
//! );
//! ctx.set_language("hi");
//! assert_eq!(ctx.translate(MessageKey::NavHome), "होम");
//! ```

mod context;
mod language;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use context::LocalizationContext;
pub use language::{Language, LanguageError};
pub use metrics::{LookupOutcome, MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{fill, MessageKey, TranslationTable, UnknownMessageKey};
pub use validator::{LanguageCoverage, TranslationValidator, ValidationReport};
