//! Text-to-speech capability.
//!
//! Speech is best effort and fire-and-forget: [`dispatch`] hands an utterance
//! to a [`SpeechSynthesizer`] and returns a [`SpeechTask`] the caller may
//! ignore, cancel or await. A missing capability is not an error.

use anyhow::{bail, Context, Result};
use std::io::ErrorKind;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Text plus the locale it should be voiced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,

    /// BCP 47 locale, e.g. "hi-IN"
    pub locale: &'static str,
}

impl Utterance {
    pub fn new(text: impl Into<String>, locale: &'static str) -> Self {
        Self {
            text: text.into(),
            locale,
        }
    }

    /// Primary language subtag ("hi" for "hi-IN").
    pub fn language(&self) -> &str {
        self.locale.split('-').next().unwrap_or(self.locale)
    }
}

/// A host speech capability.
pub trait SpeechSynthesizer: Send + Sync {
    /// Whether speech can be produced at all on this host.
    fn is_available(&self) -> bool;

    /// Voice the utterance. May block until playback finishes.
    fn synthesize(&self, utterance: &Utterance) -> Result<()>;
}

/// No speech capability; every request is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl SpeechSynthesizer for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn synthesize(&self, _utterance: &Utterance) -> Result<()> {
        Ok(())
    }
}

/// Speech through an external program such as `espeak-ng`.
///
/// Invoked as `<program> -v <language> <text>`. Once the program turns out
/// not to exist, the synthesizer reports itself unavailable.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
    missing: Arc<AtomicBool>,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            missing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn is_available(&self) -> bool {
        !self.program.trim().is_empty() && !self.missing.load(Ordering::Relaxed)
    }

    fn synthesize(&self, utterance: &Utterance) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-v")
            .arg(utterance.language())
            .arg(&utterance.text)
            .status()
            .map_err(|err| {
                if err.kind() == ErrorKind::NotFound
                    && !self.missing.swap(true, Ordering::Relaxed)
                {
                    warn!("Speech command '{}' not found, disabling speech", self.program);
                }
                err
            })
            .with_context(|| format!("Failed to run speech command '{}'", self.program))?;

        if !status.success() {
            bail!("Speech command '{}' exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Keeps every utterance it is asked to voice. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct RecordingSynthesizer {
    spoken: Mutex<Vec<Utterance>>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Utterances voiced so far, oldest first.
    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .map(|spoken| spoken.clone())
            .unwrap_or_default()
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn is_available(&self) -> bool {
        true
    }

    fn synthesize(&self, utterance: &Utterance) -> Result<()> {
        debug!("🔊 [{}] {}", utterance.locale, utterance.text);
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push(utterance.clone());
        }
        Ok(())
    }
}

/// Handle to a speech request.
#[derive(Debug)]
pub enum SpeechTask {
    /// No capability was available; nothing happened
    Skipped,
    /// Ran inline because no async runtime was present
    Finished,
    /// Running on the runtime's blocking pool
    Scheduled(JoinHandle<()>),
}

impl SpeechTask {
    pub fn is_skipped(&self) -> bool {
        matches!(self, SpeechTask::Skipped)
    }

    /// Stop waiting for the utterance.
    ///
    /// A blocking synthesis that has already started keeps running; only a
    /// task that has not been picked up yet is dropped.
    pub fn cancel(&self) {
        if let SpeechTask::Scheduled(handle) = self {
            handle.abort();
        }
    }

    /// Wait for the utterance to finish. Returns `false` if it was cancelled.
    pub async fn finished(self) -> bool {
        match self {
            SpeechTask::Skipped | SpeechTask::Finished => true,
            SpeechTask::Scheduled(handle) => handle.await.is_ok(),
        }
    }
}

/// Hand `utterance` to `synthesizer` without waiting for it.
pub fn dispatch(synthesizer: &Arc<dyn SpeechSynthesizer>, utterance: Utterance) -> SpeechTask {
    if !synthesizer.is_available() {
        debug!("Speech unavailable, skipping utterance");
        return SpeechTask::Skipped;
    }

    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => {
            let synthesizer = Arc::clone(synthesizer);
            SpeechTask::Scheduled(
                runtime.spawn_blocking(move || speak_logged(&*synthesizer, &utterance)),
            )
        }
        Err(_) => {
            speak_logged(&**synthesizer, &utterance);
            SpeechTask::Finished
        }
    }
}

fn speak_logged(synthesizer: &dyn SpeechSynthesizer, utterance: &Utterance) {
    if let Err(e) = synthesizer.synthesize(utterance) {
        warn!("Speech failed for locale {}: {:#}", utterance.locale, e);
    }
}
