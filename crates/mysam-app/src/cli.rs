//! CLI argument definitions for the mySAM application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mysam_core::{DoctorStatus, Mood};

/// mySAM — a daily companion for pharma sales reps.
#[derive(Parser, Debug)]
#[command(name = "mysam", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Talk to the feedback companion about your day.
    Chat {
        /// Star rating for the day (1-5).
        #[arg(short, long, default_value_t = 4)]
        rating: u8,

        /// Number of completed priorities (0-4).
        #[arg(long, default_value_t = 0)]
        completed: usize,

        /// Mood tags, in the order you picked them.
        #[arg(short, long, value_delimiter = ',')]
        moods: Vec<MoodArg>,
    },

    /// Talk to the call assistant to document visits and calls.
    Assistant,

    /// Search the doctor directory.
    Doctors {
        /// Free-text query against name, specialty, or organization.
        query: Option<String>,

        /// Restrict results to one relationship status.
        #[arg(short, long)]
        status: Option<StatusArg>,
    },

    /// Show the day's scheduled visits.
    Plan,

    /// Show weekly performance figures.
    Stats,
}

/// Mood tags accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MoodArg {
    Happy,
    Productive,
    Success,
    Improvement,
    Missed,
    Unfair,
}

impl From<MoodArg> for Mood {
    fn from(arg: MoodArg) -> Self {
        match arg {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Productive => Mood::Productive,
            MoodArg::Success => Mood::Success,
            MoodArg::Improvement => Mood::Improvement,
            MoodArg::Missed => Mood::Missed,
            MoodArg::Unfair => Mood::Unfair,
        }
    }
}

/// Doctor status filter accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Active,
    Pending,
    Inactive,
}

impl From<StatusArg> for DoctorStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => DoctorStatus::Active,
            StatusArg::Pending => DoctorStatus::Pending,
            StatusArg::Inactive => DoctorStatus::Inactive,
        }
    }
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MYSAM_CONFIG env var > ~/.mysam/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MYSAM_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    /// Returns `None` if not overridden.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".mysam").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".mysam").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_defaults() {
        let args = CliArgs::parse_from(["mysam", "chat"]);
        match args.command {
            Command::Chat {
                rating,
                completed,
                moods,
            } => {
                assert_eq!(rating, 4);
                assert_eq!(completed, 0);
                assert!(moods.is_empty());
            }
            _ => panic!("expected chat subcommand"),
        }
    }

    #[test]
    fn test_chat_moods_comma_separated() {
        let args = CliArgs::parse_from(["mysam", "chat", "--moods", "happy,success", "-r", "5"]);
        match args.command {
            Command::Chat { rating, moods, .. } => {
                assert_eq!(rating, 5);
                let moods: Vec<Mood> = moods.into_iter().map(Into::into).collect();
                assert_eq!(moods, vec![Mood::Happy, Mood::Success]);
            }
            _ => panic!("expected chat subcommand"),
        }
    }

    #[test]
    fn test_doctors_query_and_status() {
        let args = CliArgs::parse_from(["mysam", "doctors", "cardio", "--status", "active"]);
        match args.command {
            Command::Doctors { query, status } => {
                assert_eq!(query.as_deref(), Some("cardio"));
                assert!(matches!(status, Some(StatusArg::Active)));
            }
            _ => panic!("expected doctors subcommand"),
        }
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs::parse_from(["mysam", "--config", "/tmp/m.toml", "stats"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/m.toml"));
    }
}
