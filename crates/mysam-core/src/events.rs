use serde::{Deserialize, Serialize};

use crate::types::{Activity, Mood, Rating};

/// Domain events emitted by day-tracker state transitions.
///
/// Events are returned by the mutation that caused them and consumed by the
/// presentation layer (confetti, pulse animations, log output). They carry
/// no further state implications.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DomainEvent {
    /// A single priority flag was flipped.
    ActivityToggled { activity: Activity, done: bool },

    /// The flip that made all four priorities true. One-shot per entry into
    /// the all-complete state; re-emitted only after leaving and re-entering it.
    AllPrioritiesCompleted,

    /// A mood tag was added to or removed from the selection.
    MoodToggled { mood: Mood, selected: bool },

    /// The day was rated.
    DayRated { rating: Rating },
}
