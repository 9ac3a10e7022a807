//! Daily tracking state for mySAM.
//!
//! Everything a rep touches during the day lives here: the four-priority
//! checklist, mood selection, the star rating, the doctor directory, the
//! visit planner, and the weekly analytics figures. Mutations emit
//! [`mysam_core::DomainEvent`]s so the shell can react (celebrations,
//! logging) without the state types knowing about presentation.

pub mod activity;
pub mod analytics;
pub mod day;
pub mod directory;
pub mod mood;
pub mod planner;
pub mod rating;

pub use activity::ActivityChecklist;
pub use analytics::{DayStats, WeeklyAnalytics};
pub use day::DayTracker;
pub use directory::{DirectoryCounts, DoctorDirectory};
pub use mood::MoodSelection;
pub use planner::{PlannerSummary, VisitPlanner};
pub use rating::DayRating;
