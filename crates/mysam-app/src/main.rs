//! mySAM application binary - composition root.
//!
//! Ties the mySAM crates together into a single executable:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing
//! 4. Dispatch to the requested subcommand (chat REPLs or tracker views)

mod cli;

use clap::Parser;

use cli::{CliArgs, Command};
use mysam_chat::{ChatSession, ReplyPacing, VoiceOutput};
use mysam_core::config::MySamConfig;
use mysam_core::{Activity, ActivityCompletion, FeedbackSnapshot, Rating, Speaker};
use mysam_tracker::{DoctorDirectory, VisitPlanner, WeeklyAnalytics};

use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let config = MySamConfig::load_or_default(&config_file);

    // Tracing. CLI flag wins over the config file value.
    let log_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting mySAM v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    match args.command {
        Command::Chat {
            rating,
            completed,
            moods,
        } => {
            let snapshot = build_snapshot(rating, completed, moods)?;
            let session = ChatSession::feedback(
                &config.general.rep_name,
                snapshot,
                ReplyPacing::feedback(&config.feedback_chat),
            );
            run_repl(session, None).await?;
        }
        Command::Assistant => {
            let session = ChatSession::assistant(
                &config.general.rep_name,
                ReplyPacing::assistant(&config.assistant),
            );
            // No speech backend in the terminal; VoiceOutput degrades to
            // text only.
            let voice = if config.assistant.speak_replies {
                Some(VoiceOutput::new(None))
            } else {
                None
            };
            run_repl(session, voice).await?;
        }
        Command::Doctors { query, status } => {
            show_doctors(query.as_deref().unwrap_or(""), status.map(Into::into));
        }
        Command::Plan => show_plan(),
        Command::Stats => show_stats(),
    }

    Ok(())
}

/// Seed the day's snapshot from the chat subcommand flags.
fn build_snapshot(
    rating: u8,
    completed: usize,
    moods: Vec<cli::MoodArg>,
) -> Result<FeedbackSnapshot, mysam_core::MySamError> {
    let mut completion = ActivityCompletion::default();
    for activity in Activity::ALL.iter().take(completed.min(ActivityCompletion::TOTAL)) {
        completion.set(*activity, true);
    }
    Ok(FeedbackSnapshot {
        selected_moods: moods.into_iter().map(Into::into).collect(),
        rating: Rating::new(rating)?,
        completion,
    })
}

/// Read stdin lines, submit each to the session, and print the reply.
///
/// `quit` / `exit` or EOF closes the session.
async fn run_repl(
    session: ChatSession,
    mut voice: Option<VoiceOutput>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(turn) = session.transcript().first() {
        println!("mySAM: {}\n", turn.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let Some(pending) = session.submit(input) else {
            continue;
        };
        pending.await?;

        if let Some(turn) = session
            .transcript()
            .iter()
            .rev()
            .find(|t| t.speaker == Speaker::Bot)
        {
            println!("mySAM: {}\n", turn.text);
            if let Some(ref mut voice) = voice {
                voice.speak(&turn.text)?;
                voice.handle_finished();
            }
        }
    }

    session.close();
    tracing::info!(session_id = %session.id(), "Session closed");
    Ok(())
}

fn show_doctors(query: &str, status: Option<mysam_core::DoctorStatus>) {
    let directory = DoctorDirectory::sample();
    let counts = directory.status_counts();
    println!(
        "All ({})  Active ({})  Pending ({})  Inactive ({})\n",
        counts.total, counts.active, counts.pending, counts.inactive
    );

    let hits = directory.search(query, status);
    if hits.is_empty() {
        println!("No doctors found matching your criteria");
        return;
    }
    for doctor in hits {
        println!(
            "{} - {} [{}]\n  {}\n  {} | {}\n  Last visit: {}\n",
            doctor.name,
            doctor.specialty,
            doctor.status.label(),
            doctor.organization,
            doctor.phone,
            doctor.email,
            doctor.last_visit
        );
    }
}

fn show_plan() {
    let planner = VisitPlanner::sample();
    let summary = planner.summary();
    println!(
        "Total: {}  Done: {}  Pending: {}\n",
        summary.total, summary.completed, summary.pending
    );
    for visit in planner.visits() {
        println!(
            "{}  {} - {} ({:?})\n  {}\n",
            visit.time, visit.doctor_name, visit.specialty, visit.status, visit.location
        );
    }
}

fn show_stats() {
    let analytics = WeeklyAnalytics::sample();
    let max = analytics.max_visits().max(1);
    for day in analytics.days() {
        let bar = "#".repeat((day.visits * 20 / max) as usize);
        println!(
            "{}  {:<20}  {} visits, {} successful",
            day.day, bar, day.visits, day.successes
        );
    }
    println!(
        "\nTotal: {} visits, {} successful ({}%), {} follow-ups",
        analytics.total_visits(),
        analytics.total_successes(),
        analytics.success_rate(),
        analytics.follow_ups()
    );
}
