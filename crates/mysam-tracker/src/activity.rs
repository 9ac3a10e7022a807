//! The four-priority daily checklist.

use mysam_core::{Activity, ActivityCompletion, DomainEvent};

/// Tracks completion of the day's four fixed priorities.
///
/// Toggling flips exactly one flag. The transition that takes the checklist
/// from "not all done" to "all done" additionally emits a one-shot
/// celebration event; it fires again only after the checklist leaves the
/// all-done state and re-enters it.
#[derive(Clone, Debug, Default)]
pub struct ActivityChecklist {
    completion: ActivityCompletion,
}

impl ActivityChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one priority and report what happened.
    pub fn toggle(&mut self, activity: Activity) -> Vec<DomainEvent> {
        let was_all_done = self.completion.all_completed();
        let done = !self.completion.is_done(activity);
        self.completion.set(activity, done);

        let mut events = vec![DomainEvent::ActivityToggled { activity, done }];
        if done && !was_all_done && self.completion.all_completed() {
            tracing::info!("All four daily priorities completed");
            events.push(DomainEvent::AllPrioritiesCompleted);
        }
        events
    }

    pub fn is_done(&self, activity: Activity) -> bool {
        self.completion.is_done(activity)
    }

    pub fn completed_count(&self) -> usize {
        self.completion.completed_count()
    }

    pub fn completion_percentage(&self) -> f32 {
        self.completion.completion_percentage()
    }

    pub fn all_completed(&self) -> bool {
        self.completion.all_completed()
    }

    /// Copy of the underlying flags, for snapshots.
    pub fn completion(&self) -> ActivityCompletion {
        self.completion
    }
}

// =============================================================================
// Tests
// =============================================================================
