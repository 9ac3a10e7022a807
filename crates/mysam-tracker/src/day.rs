//! Aggregate state for the current day.

use mysam_core::{Activity, DomainEvent, FeedbackSnapshot, Mood, Result};

use crate::activity::ActivityChecklist;
use crate::mood::MoodSelection;
use crate::rating::DayRating;

/// Everything the rep has recorded about today.
///
/// Mutations delegate to the underlying trackers and bubble their events up.
/// Once the day has a rating, [`DayTracker::snapshot`] freezes the state
/// into the read-only context a feedback chat session opens with.
#[derive(Clone, Debug, Default)]
pub struct DayTracker {
    checklist: ActivityChecklist,
    moods: MoodSelection,
    rating: DayRating,
}

impl DayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_activity(&mut self, activity: Activity) -> Vec<DomainEvent> {
        self.checklist.toggle(activity)
    }

    pub fn toggle_mood(&mut self, mood: Mood) -> DomainEvent {
        self.moods.toggle(mood)
    }

    pub fn rate(&mut self, stars: u8) -> Result<DomainEvent> {
        self.rating.set(stars)
    }

    pub fn checklist(&self) -> &ActivityChecklist {
        &self.checklist
    }

    pub fn moods(&self) -> &MoodSelection {
        &self.moods
    }

    pub fn rating(&self) -> &DayRating {
        &self.rating
    }

    /// Freeze the day into a feedback snapshot.
    ///
    /// Returns `None` until the day has been rated; the feedback companion
    /// needs a rating to talk about.
    pub fn snapshot(&self) -> Option<FeedbackSnapshot> {
        let rating = self.rating.rating()?;
        Some(FeedbackSnapshot {
            selected_moods: self.moods.selected().to_vec(),
            rating,
            completion: self.checklist.completion(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_requires_rating() {
        let mut tracker = DayTracker::new();
        tracker.toggle_activity(Activity::MeetingReminder);
        tracker.toggle_mood(Mood::Happy);
        assert!(tracker.snapshot().is_none());

        tracker.rate(4).unwrap();
        let snapshot = tracker.snapshot().unwrap();
        assert_eq!(snapshot.rating.stars(), 4);
        assert_eq!(snapshot.selected_moods, vec![Mood::Happy]);
        assert_eq!(snapshot.completed_count(), 1);
    }

    #[test]
    fn test_snapshot_preserves_mood_order() {
        let mut tracker = DayTracker::new();
        tracker.toggle_mood(Mood::Missed);
        tracker.toggle_mood(Mood::Happy);
        tracker.rate(3).unwrap();
        let snapshot = tracker.snapshot().unwrap();
        assert_eq!(snapshot.selected_moods, vec![Mood::Missed, Mood::Happy]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut tracker = DayTracker::new();
        tracker.rate(5).unwrap();
        let snapshot = tracker.snapshot().unwrap();

        // Later mutations do not leak into the frozen snapshot.
        tracker.toggle_mood(Mood::Success);
        tracker.toggle_activity(Activity::DailyUpdates);
        assert!(snapshot.selected_moods.is_empty());
        assert_eq!(snapshot.completed_count(), 0);
    }

    #[test]
    fn test_events_bubble_up() {
        let mut tracker = DayTracker::new();
        for activity in Activity::ALL {
            tracker.toggle_activity(activity);
        }
        assert!(tracker.checklist().all_completed());

        let event = tracker.rate(5).unwrap();
        assert!(matches!(event, DomainEvent::DayRated { .. }));
    }
}
