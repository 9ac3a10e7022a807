//! Star rating for the day.

use mysam_core::{DomainEvent, Rating, Result};

/// The day's star rating, unset until the rep rates the day.
#[derive(Clone, Copy, Debug, Default)]
pub struct DayRating {
    rating: Option<Rating>,
}

impl DayRating {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rate the day. Re-rating replaces the previous value.
    pub fn set(&mut self, stars: u8) -> Result<DomainEvent> {
        let rating = Rating::new(stars)?;
        self.rating = Some(rating);
        tracing::debug!(stars, "Day rated");
        Ok(DomainEvent::DayRated { rating })
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn stars(&self) -> Option<u8> {
        self.rating.map(|r| r.stars())
    }

    /// The tagline under the rating control, including the unrated prompt.
    pub fn tagline(&self) -> &'static str {
        match self.rating {
            Some(rating) => rating.tagline(),
            None => "Tap to rate your day",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mysam_core::MySamError;

    #[test]
    fn test_unrated_by_default() {
        let rating = DayRating::new();
        assert!(rating.rating().is_none());
        assert_eq!(rating.tagline(), "Tap to rate your day");
    }

    #[test]
    fn test_set_emits_event_and_updates_tagline() {
        let mut rating = DayRating::new();
        let event = rating.set(4).unwrap();
        match event {
            DomainEvent::DayRated { rating } => assert_eq!(rating.stars(), 4),
            _ => panic!("expected DayRated"),
        }
        assert_eq!(rating.stars(), Some(4));
        assert_eq!(rating.tagline(), "Great day!");
    }

    #[test]
    fn test_rerating_replaces() {
        let mut rating = DayRating::new();
        rating.set(2).unwrap();
        rating.set(5).unwrap();
        assert_eq!(rating.stars(), Some(5));
        assert_eq!(rating.tagline(), "Excellent day! You're a superstar!");
    }

    #[test]
    fn test_out_of_range_rejected_and_state_unchanged() {
        let mut rating = DayRating::new();
        rating.set(3).unwrap();
        let err = rating.set(0).unwrap_err();
        assert!(matches!(err, MySamError::InvalidRating(0)));
        let err = rating.set(6).unwrap_err();
        assert!(matches!(err, MySamError::InvalidRating(6)));
        assert_eq!(rating.stars(), Some(3));
    }
}
