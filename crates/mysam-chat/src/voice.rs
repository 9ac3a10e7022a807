//! Voice input and output adapters for the call assistant.
//!
//! Speech capture and synthesis are platform capabilities that may be
//! missing entirely. Both adapters take their backend as an `Option`; when
//! it is `None` the assistant degrades to text-only and every voice
//! operation is either a no-op or a [`ChatError::SpeechUnavailable`].
//!
//! Captured text is never submitted to a session automatically. The caller
//! drains it with [`VoiceInput::take_pending`] and decides what to do.

use crate::error::ChatError;

// =============================================================================
// Backend traits
// =============================================================================

/// Events emitted by a speech recognition backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Partial hypothesis, replaced by the next event.
    Interim(String),
    /// A finalized segment of transcribed speech.
    Finalized(String),
    /// The backend reported an error; capture has stopped.
    Error(String),
    /// The backend ended the capture session on its own.
    Ended,
}

/// A speech-to-text backend.
pub trait SpeechRecognizer {
    /// Begin continuous capture in the given language.
    fn start(&mut self, language: &str) -> Result<(), ChatError>;
    /// Stop capture. Finalized segments already emitted remain valid.
    fn stop(&mut self) -> Result<(), ChatError>;
}

/// A text-to-speech backend.
pub trait SpeechSynthesizer {
    /// Queue an utterance for playback.
    fn speak(&mut self, text: &str) -> Result<(), ChatError>;
    /// Cancel any queued or in-progress playback.
    fn cancel(&mut self) -> Result<(), ChatError>;
}

// =============================================================================
// VoiceInput
// =============================================================================

/// Accumulates recognized speech into a pending buffer.
pub struct VoiceInput {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    language: String,
    listening: bool,
    interim: String,
    pending: String,
}

impl VoiceInput {
    pub fn new(recognizer: Option<Box<dyn SpeechRecognizer>>, language: impl Into<String>) -> Self {
        Self {
            recognizer,
            language: language.into(),
            listening: false,
            interim: String::new(),
            pending: String::new(),
        }
    }

    /// Whether a recognition backend is present at all.
    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Current partial hypothesis, for live display.
    pub fn interim(&self) -> &str {
        &self.interim
    }

    /// Start capturing speech.
    pub fn start_listening(&mut self) -> Result<(), ChatError> {
        if self.listening {
            return Err(ChatError::AlreadyListening);
        }
        let recognizer = self
            .recognizer
            .as_mut()
            .ok_or(ChatError::SpeechUnavailable)?;
        recognizer.start(&self.language)?;
        self.listening = true;
        tracing::debug!(language = %self.language, "Voice capture started");
        Ok(())
    }

    /// Stop capturing speech. Pending text survives the stop.
    pub fn stop_listening(&mut self) -> Result<(), ChatError> {
        if !self.listening {
            return Err(ChatError::NotListening);
        }
        let recognizer = self
            .recognizer
            .as_mut()
            .ok_or(ChatError::SpeechUnavailable)?;
        recognizer.stop()?;
        self.listening = false;
        self.interim.clear();
        tracing::debug!("Voice capture stopped");
        Ok(())
    }

    /// Feed a backend event into the buffer state machine.
    pub fn handle_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Interim(text) => {
                self.interim = text;
            }
            SpeechEvent::Finalized(text) => {
                if !self.pending.is_empty() {
                    self.pending.push(' ');
                }
                self.pending.push_str(&text);
                self.interim.clear();
            }
            SpeechEvent::Error(reason) => {
                tracing::warn!(%reason, "Speech recognition error; capture stopped");
                self.listening = false;
                self.interim.clear();
            }
            SpeechEvent::Ended => {
                self.listening = false;
                self.interim.clear();
            }
        }
    }

    /// Drain the accumulated transcription, if any.
    pub fn take_pending(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.pending);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// =============================================================================
// VoiceOutput
// =============================================================================

/// Speaks bot replies aloud when a synthesis backend is present.
pub struct VoiceOutput {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    speaking: bool,
}

impl VoiceOutput {
    pub fn new(synthesizer: Option<Box<dyn SpeechSynthesizer>>) -> Self {
        Self {
            synthesizer,
            speaking: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.synthesizer.is_some()
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Speak a reply. Without a backend this is a silent no-op; while an
    /// utterance is already playing, new ones are skipped rather than queued.
    pub fn speak(&mut self, text: &str) -> Result<(), ChatError> {
        let Some(synthesizer) = self.synthesizer.as_mut() else {
            return Ok(());
        };
        if self.speaking {
            tracing::debug!("Synthesis busy; reply not spoken");
            return Ok(());
        }
        synthesizer.speak(text)?;
        self.speaking = true;
        Ok(())
    }

    /// Cancel playback, if any.
    pub fn cancel(&mut self) -> Result<(), ChatError> {
        if let Some(synthesizer) = self.synthesizer.as_mut() {
            synthesizer.cancel()?;
        }
        self.speaking = false;
        Ok(())
    }

    /// The backend finished (or aborted) the current utterance.
    pub fn handle_finished(&mut self) {
        self.speaking = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
