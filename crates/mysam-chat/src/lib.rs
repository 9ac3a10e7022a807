//! Conversational companion for mySAM.
//!
//! Provides greeting synthesis from the day's feedback snapshot, rule-based
//! response generation (no LLM), chat sessions with simulated typing
//! latency, and optional voice input/output adapters.

pub mod engine;
pub mod error;
pub mod greeting;
pub mod session;
pub mod voice;

pub use engine::{AssistantEngine, FeedbackEngine, FixedPicker, RandomPicker, ReplyPicker};
pub use error::ChatError;
pub use greeting::{assistant_greeting, compose_greeting};
pub use session::{ChatSession, ReplyPacing};
pub use voice::{SpeechEvent, SpeechRecognizer, SpeechSynthesizer, VoiceInput, VoiceOutput};
