//! Mood selection for the day.

use mysam_core::{DomainEvent, Mood};

/// An order-preserving toggle set over mood tags.
///
/// Selecting a mood appends it; selecting it again removes it. The order
/// moods were picked in is the order the greeting lists them in.
#[derive(Clone, Debug, Default)]
pub struct MoodSelection {
    selected: Vec<Mood>,
}

impl MoodSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one mood in or out of the selection.
    pub fn toggle(&mut self, mood: Mood) -> DomainEvent {
        if let Some(pos) = self.selected.iter().position(|m| *m == mood) {
            self.selected.remove(pos);
            DomainEvent::MoodToggled {
                mood,
                selected: false,
            }
        } else {
            self.selected.push(mood);
            DomainEvent::MoodToggled {
                mood,
                selected: true,
            }
        }
    }

    pub fn is_selected(&self, mood: Mood) -> bool {
        self.selected.contains(&mood)
    }

    /// Selected moods, in selection order.
    pub fn selected(&self) -> &[Mood] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
