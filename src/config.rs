use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: PathBuf,

    // Localization
    pub default_language: Language,

    // Speech
    pub speech_command: Option<String>,

    // Assistant
    pub chat_reply_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language =
            std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            // Storage
            data_dir: std::env::var("VILLAGE_CARE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".village-care")),

            // Localization
            default_language: Language::from_code(default_language.trim())
                .context("DEFAULT_LANGUAGE must be a supported language code")?,

            // Speech - unset or blank disables speech
            speech_command: std::env::var("SPEECH_COMMAND")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),

            // Assistant
            chat_reply_delay: Duration::from_millis(
                std::env::var("CHAT_REPLY_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1500),
            ),
        })
    }
}
