//! Chat session lifecycle and turn sequencing.
//!
//! A session owns an append-only transcript that starts with a synthesized
//! greeting. User turns append synchronously; each one schedules exactly one
//! bot reply after a pacing delay that mimics typing. Closing the session
//! suppresses any reply still in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use uuid::Uuid;

use mysam_core::config::{AssistantConfig, FeedbackChatConfig};
use mysam_core::{FeedbackSnapshot, Turn};

use crate::engine::{AssistantEngine, FeedbackEngine};
use crate::greeting::{assistant_greeting, compose_greeting};

// =============================================================================
// ReplyPacing
// =============================================================================

/// How long to wait before a bot reply appears.
///
/// The feedback companion uses a jittered delay, the call assistant a fixed
/// one. The two are tuned independently; do not unify them.
#[derive(Clone, Copy, Debug)]
pub enum ReplyPacing {
    /// Uniform draw from `[min, max)` per reply.
    Jittered { min: Duration, max: Duration },
    /// The same delay every time.
    Fixed(Duration),
    /// No delay. Intended for tests and scripted runs.
    Immediate,
}

impl ReplyPacing {
    /// Pacing for the feedback companion from its config section.
    pub fn feedback(config: &FeedbackChatConfig) -> Self {
        Self::Jittered {
            min: Duration::from_millis(config.reply_delay_min_ms),
            max: Duration::from_millis(config.reply_delay_max_ms),
        }
    }

    /// Pacing for the call assistant from its config section.
    pub fn assistant(config: &AssistantConfig) -> Self {
        Self::Fixed(Duration::from_millis(config.reply_delay_ms))
    }

    /// Draw the delay for the next reply.
    pub fn next_delay(&self) -> Duration {
        match self {
            ReplyPacing::Jittered { min, max } => {
                let (min_ms, max_ms) = (min.as_millis() as u64, max.as_millis() as u64);
                if max_ms > min_ms {
                    Duration::from_millis(rand::rng().random_range(min_ms..max_ms))
                } else {
                    *min
                }
            }
            ReplyPacing::Fixed(delay) => *delay,
            ReplyPacing::Immediate => Duration::ZERO,
        }
    }
}

// =============================================================================
// ChatSession
// =============================================================================

/// The two chat flavors differ only in greeting, rule table, and pacing.
enum Responder {
    Feedback {
        engine: FeedbackEngine,
        context: FeedbackSnapshot,
    },
    Assistant {
        engine: AssistantEngine,
    },
}

impl Responder {
    fn reply(&self, utterance: &str) -> String {
        match self {
            Responder::Feedback { engine, context } => engine.reply(utterance, context),
            Responder::Assistant { engine } => engine.reply(utterance),
        }
    }
}

struct SessionInner {
    id: Uuid,
    transcript: Mutex<Vec<Turn>>,
    closed: AtomicBool,
    responder: Responder,
    pacing: ReplyPacing,
}

/// One open chat dialog.
///
/// Cheap to clone; clones share the same transcript and closed flag, which
/// is how in-flight reply tasks observe teardown.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

impl ChatSession {
    /// Open a feedback companion session. The transcript starts with the
    /// greeting synthesized from the day's snapshot.
    pub fn feedback(rep_name: &str, context: FeedbackSnapshot, pacing: ReplyPacing) -> Self {
        let greeting = compose_greeting(rep_name, &context);
        Self::open(
            Responder::Feedback {
                engine: FeedbackEngine::new(),
                context,
            },
            pacing,
            greeting,
        )
    }

    /// Open a call assistant session with its static greeting.
    pub fn assistant(rep_name: &str, pacing: ReplyPacing) -> Self {
        Self::open(
            Responder::Assistant {
                engine: AssistantEngine::new(),
            },
            pacing,
            assistant_greeting(rep_name),
        )
    }

    fn open(responder: Responder, pacing: ReplyPacing, greeting: String) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Chat session opened");
        Self {
            inner: Arc::new(SessionInner {
                id,
                transcript: Mutex::new(vec![Turn::bot(greeting)]),
                closed: AtomicBool::new(false),
                responder,
                pacing,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Submit a user message.
    ///
    /// Empty or whitespace-only input is silently ignored (`None`, transcript
    /// unchanged). Otherwise the user turn is appended immediately and one
    /// bot reply is scheduled after the pacing delay; the returned handle
    /// resolves when that reply has been appended or suppressed.
    ///
    /// Two quickly-submitted messages schedule two independent replies; the
    /// order in which those replies land is whichever delay expires first.
    pub fn submit(&self, text: &str) -> Option<JoinHandle<()>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.is_closed() {
            tracing::debug!(session_id = %self.inner.id, "Submit on closed session ignored");
            return None;
        }

        let utterance = trimmed.to_string();
        match self.inner.transcript.lock() {
            Ok(mut transcript) => transcript.push(Turn::user(utterance.clone())),
            Err(e) => {
                tracing::error!(session_id = %self.inner.id, error = %e, "Transcript lock poisoned");
                return None;
            }
        }

        let delay = self.inner.pacing.next_delay();
        let inner = Arc::clone(&self.inner);
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if inner.closed.load(Ordering::SeqCst) {
                tracing::debug!(session_id = %inner.id, "Session closed before reply; dropped");
                return;
            }
            let reply = inner.responder.reply(&utterance);
            if let Ok(mut transcript) = inner.transcript.lock() {
                // Re-check under the lock: close() holds it while tearing down.
                if !inner.closed.load(Ordering::SeqCst) {
                    transcript.push(Turn::bot(reply));
                }
            }
        }))
    }

    /// Close the session and discard the transcript. Replies still in flight
    /// will observe the flag and drop their output instead of appending.
    pub fn close(&self) {
        if let Ok(mut transcript) = self.inner.transcript.lock() {
            self.inner.closed.store(true, Ordering::SeqCst);
            transcript.clear();
        } else {
            self.inner.closed.store(true, Ordering::SeqCst);
        }
        tracing::debug!(session_id = %self.inner.id, "Chat session closed");
    }

    /// Ordered snapshot of the transcript for rendering.
    pub fn transcript(&self) -> Vec<Turn> {
        self.inner
            .transcript
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    /// Number of turns currently in the transcript.
    pub fn len(&self) -> usize {
        self.inner.transcript.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
