//! Village Care: localization and guided questionnaires for a rural
//! telemedicine client.

pub mod assistant;
pub mod booking;
pub mod config;
pub mod i18n;
pub mod pharmacy;
pub mod preferences;
pub mod speech;
pub mod symptom;
pub mod voice_search;
pub mod wizard;
