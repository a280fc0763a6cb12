//! Studyplan CLI - study progress dashboard.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use studyplan_core::{Status, SubjectId, SystemClock};
use studyplan_planner::{Planner, SubjectOverview};
use studyplan_storage::JsonStorage;
use tracing::Level;

mod quotes;

#[derive(Parser)]
#[command(name = "studyplan")]
#[command(about = "Study progress tracker", long_about = None)]
struct Cli {
    /// Username the data is kept under
    #[arg(long, global = true, default_value = "default")]
    user: String,

    /// Data directory
    #[arg(long, global = true, default_value = ".studyplan")]
    data_dir: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new subject
    Add {
        /// Subject name
        name: String,
        /// Total number of topics
        #[arg(long)]
        topics: u32,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: NaiveDate,
    },
    /// List subjects with progress and status
    List,
    /// Mark topics done on a subject
    Done {
        /// Subject ID
        id: SubjectId,
        /// Number of topics completed
        count: u32,
    },
    /// Delete a subject
    Delete {
        /// Subject ID
        id: SubjectId,
    },
    /// Show the study streak
    Streak,
    /// Rename the current user
    Rename {
        /// New username
        new_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut planner = Planner::new(storage, SystemClock);
    let user = cli.user.as_str();

    match cli.command {
        Commands::Add { name, topics, deadline } => {
            let subject = planner.add_subject(user, &name, topics, deadline).await?;
            println!("Added subject: {} - {}", subject.id, subject.name);
        }
        Commands::List => {
            let overviews = planner.overview(user).await?;
            if overviews.is_empty() {
                println!("No subjects yet. Add one with `studyplan add`.");
                return Ok(());
            }

            println!("\"{}\"\n", quotes::random_quote());
            for view in &overviews {
                print_card(view);
            }
        }
        Commands::Done { id, count } => {
            let outcome = planner.mark_done(user, id, count).await?;
            println!(
                "{}: {}/{} topics done",
                outcome.subject.name,
                outcome.subject.completed_topics,
                outcome.subject.total_topics,
            );
            if outcome.target_met {
                println!(
                    "Daily target met! Streak: {} {}",
                    outcome.streak.study_streak,
                    plural(outcome.streak.study_streak, "day"),
                );
            } else {
                println!(
                    "Today's target is {} {}, keep going.",
                    outcome.daily_target,
                    plural(outcome.daily_target, "topic"),
                );
            }
        }
        Commands::Delete { id } => {
            planner.delete_subject(user, id).await?;
            println!("Subject deleted.");
        }
        Commands::Streak => {
            let state = planner.streak(user).await?;
            println!(
                "Streak: {} {}",
                state.study_streak,
                plural(state.study_streak, "day"),
            );
        }
        Commands::Rename { new_name } => {
            planner.rename_user(user, &new_name).await?;
            println!("Renamed {} to {}", user, new_name.trim());
        }
    }

    Ok(())
}

fn print_card(view: &SubjectOverview) {
    let subject = &view.subject;
    let report = &view.report;

    let deadline = subject.deadline.format("%b %d, %Y");
    let days = if report.days_left >= 0 {
        format!("{} {} left", report.days_left, plural_i64(report.days_left, "day"))
    } else {
        "Overdue".to_string()
    };

    println!("{} [{}]", subject.name, format_status(report.status));
    println!("  Deadline: {} ({})", deadline, days);
    println!(
        "  Progress: {}% ({}/{} topics)",
        report.progress_percent, subject.completed_topics, subject.total_topics,
    );
    println!(
        "  Today's target: {} {}",
        report.daily_target,
        plural(report.daily_target, "topic"),
    );
    println!("  ID: {}\n", subject.id);
}

fn format_status(status: Status) -> &'static str {
    match status {
        Status::Green => "on track",
        Status::Orange => "near deadline",
        Status::Red => "at risk",
    }
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn plural_i64(n: i64, word: &str) -> String {
    plural(n.unsigned_abs().min(u32::MAX as u64) as u32, word)
}
