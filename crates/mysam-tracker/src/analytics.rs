//! Weekly performance figures.

use serde::{Deserialize, Serialize};

/// Visit counts for one working day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub day: String,
    pub visits: u32,
    pub successes: u32,
}

impl DayStats {
    fn new(day: &str, visits: u32, successes: u32) -> Self {
        Self {
            day: day.to_string(),
            visits,
            successes,
        }
    }
}

/// The week's visit and success figures for the performance chart.
#[derive(Clone, Debug, Default)]
pub struct WeeklyAnalytics {
    days: Vec<DayStats>,
}

impl WeeklyAnalytics {
    pub fn new(days: Vec<DayStats>) -> Self {
        Self { days }
    }

    /// The built-in weekly figures.
    pub fn sample() -> Self {
        Self::new(vec![
            DayStats::new("Mon", 8, 6),
            DayStats::new("Tue", 7, 5),
            DayStats::new("Wed", 9, 8),
            DayStats::new("Thu", 6, 5),
            DayStats::new("Fri", 8, 7),
        ])
    }

    pub fn days(&self) -> &[DayStats] {
        &self.days
    }

    pub fn total_visits(&self) -> u32 {
        self.days.iter().map(|d| d.visits).sum()
    }

    pub fn total_successes(&self) -> u32 {
        self.days.iter().map(|d| d.successes).sum()
    }

    /// Visits that still need a follow-up.
    pub fn follow_ups(&self) -> u32 {
        self.total_visits() - self.total_successes()
    }

    /// Successes as a share of visits, rounded to whole percent.
    pub fn success_rate(&self) -> u32 {
        let visits = self.total_visits();
        if visits == 0 {
            return 0;
        }
        (self.total_successes() as f64 / visits as f64 * 100.0).round() as u32
    }

    /// The busiest day's visit count, used to scale chart bars.
    pub fn max_visits(&self) -> u32 {
        self.days.iter().map(|d| d.visits).max().unwrap_or(0)
    }
}

// =============================================================================
// Tests
// =============================================================================
