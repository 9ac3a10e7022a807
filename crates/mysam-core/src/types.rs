use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MySamError, Result};

// =============================================================================
// Conversation
// =============================================================================

/// Who produced a turn in a conversation transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The sales rep typing or speaking.
    User,
    /// The mySAM companion.
    Bot,
}

/// One message in a conversation transcript. Immutable once created;
/// transcripts are append-only and the id is a render key only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a user turn stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// Create a bot turn stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text)
    }

    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Daily feedback
// =============================================================================

/// A mood tag the rep can attach to the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Productive,
    Success,
    Improvement,
    Missed,
    Unfair,
}

impl Mood {
    /// Human-readable label shown in the UI and in chat greetings.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Productive => "Productive",
            Mood::Success => "Success",
            Mood::Improvement => "Self Improvement",
            Mood::Missed => "Missed Opportunity",
            Mood::Unfair => "Not Fair",
        }
    }

    /// Motivational quote shown when the mood is selected.
    pub fn quote(&self) -> &'static str {
        match self {
            Mood::Happy => {
                "Your positive energy is contagious! Keep spreading joy and making a difference in every interaction."
            }
            Mood::Productive => {
                "Productivity is your superpower! You're crushing your goals and setting the bar high. Keep up the amazing momentum!"
            }
            Mood::Success => {
                "Success looks great on you! Every win, big or small, is a step toward excellence. Celebrate this achievement!"
            }
            Mood::Improvement => {
                "Growth mindset activated! Every lesson learned today makes you stronger tomorrow. You're investing in your best self!"
            }
            Mood::Missed => {
                "Every missed opportunity is a lesson in disguise. Tomorrow brings fresh chances to shine. Stay focused and keep pushing forward!"
            }
            Mood::Unfair => {
                "Tough days don't define you - your resilience does. Tomorrow is a new opportunity to turn things around. You've got this!"
            }
        }
    }
}

/// The four fixed daily priorities tracked on the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    MeetingReminder,
    EventChecklist,
    WeeklyTeamMeet,
    DailyUpdates,
}

impl Activity {
    /// All four priorities, in display order.
    pub const ALL: [Activity; 4] = [
        Activity::MeetingReminder,
        Activity::EventChecklist,
        Activity::WeeklyTeamMeet,
        Activity::DailyUpdates,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Activity::MeetingReminder => "Meeting Reminder",
            Activity::EventChecklist => "Event Checklist",
            Activity::WeeklyTeamMeet => "Weekly Team Meet",
            Activity::DailyUpdates => "Daily Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Activity::MeetingReminder => "Doctor visits scheduled",
            Activity::EventChecklist => "Materials ready",
            Activity::WeeklyTeamMeet => "Collaborate & sync",
            Activity::DailyUpdates => "Report to manager",
        }
    }
}

/// Completion flags for the four daily priorities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCompletion {
    pub meeting_reminder: bool,
    pub event_checklist: bool,
    pub weekly_team_meet: bool,
    pub daily_updates: bool,
}

impl ActivityCompletion {
    /// Total number of tracked priorities.
    pub const TOTAL: usize = 4;

    pub fn is_done(&self, activity: Activity) -> bool {
        match activity {
            Activity::MeetingReminder => self.meeting_reminder,
            Activity::EventChecklist => self.event_checklist,
            Activity::WeeklyTeamMeet => self.weekly_team_meet,
            Activity::DailyUpdates => self.daily_updates,
        }
    }

    pub fn set(&mut self, activity: Activity, done: bool) {
        match activity {
            Activity::MeetingReminder => self.meeting_reminder = done,
            Activity::EventChecklist => self.event_checklist = done,
            Activity::WeeklyTeamMeet => self.weekly_team_meet = done,
            Activity::DailyUpdates => self.daily_updates = done,
        }
    }

    pub fn completed_count(&self) -> usize {
        Activity::ALL.iter().filter(|a| self.is_done(**a)).count()
    }

    pub fn all_completed(&self) -> bool {
        self.completed_count() == Self::TOTAL
    }

    /// Completion as a percentage (0.0 to 100.0).
    pub fn completion_percentage(&self) -> f32 {
        self.completed_count() as f32 / Self::TOTAL as f32 * 100.0
    }
}

/// A star rating for the day, always in 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Construct a rating, rejecting values outside 1..=5.
    pub fn new(stars: u8) -> Result<Self> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(MySamError::InvalidRating(stars))
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    /// The per-star tagline shown under the rating control.
    pub fn tagline(&self) -> &'static str {
        match self.0 {
            1 => "Challenging day - Tomorrow will be better!",
            2 => "Room for improvement",
            3 => "Solid average day",
            4 => "Great day!",
            _ => "Excellent day! You're a superstar!",
        }
    }
}

/// Read-only snapshot of the day's feedback state, taken when a feedback
/// chat session opens. Mood order is the order the rep selected them in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedbackSnapshot {
    pub selected_moods: Vec<Mood>,
    pub rating: Rating,
    pub completion: ActivityCompletion,
}

impl FeedbackSnapshot {
    pub fn completed_count(&self) -> usize {
        self.completion.completed_count()
    }

    pub fn completion_percentage(&self) -> f32 {
        self.completion.completion_percentage()
    }
}

// =============================================================================
// Doctors and visits
// =============================================================================

/// Relationship status of a doctor in the rep's territory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorStatus {
    Active,
    Pending,
    Inactive,
}

impl DoctorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DoctorStatus::Active => "Active",
            DoctorStatus::Pending => "Pending",
            DoctorStatus::Inactive => "Inactive",
        }
    }
}

/// A doctor the rep calls on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub organization: String,
    pub phone: String,
    pub email: String,
    /// ISO date of the most recent visit.
    pub last_visit: String,
    pub status: DoctorStatus,
}

/// Status of a scheduled visit on the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Pending,
    Completed,
    Cancelled,
}

/// One entry on the day planner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledVisit {
    pub id: u32,
    pub doctor_name: String,
    pub specialty: String,
    /// Display time, e.g. "09:00 AM".
    pub time: String,
    pub location: String,
    pub status: VisitStatus,
    pub phone: String,
    pub email: String,
}

// =============================================================================
// Tests
// =============================================================================
