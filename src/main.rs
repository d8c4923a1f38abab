use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::Level;

mod content;
mod db;
mod models;
mod progress;
mod report;

#[derive(Parser)]
#[command(name = "participant-progress")]
#[command(about = "Participant progress roster for AI for Impact trainings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load a small demo cohort
    Seed,
    /// Print the ranked participant roster
    Participants,
    /// Generate a markdown progress report
    Report {
        #[arg(long, default_value = "participants.md")]
        out: PathBuf,
    },
    /// Print the trainings catalog
    Trainings,
    /// List gallery cards
    Gallery {
        #[arg(long, default_value = "input/gallery.json")]
        json: PathBuf,
    },
    /// List completed certificates
    Certificates {
        #[arg(long, default_value = "input/certificate.csv")]
        csv: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let config = progress::ProgressConfig::production();

    match cli.command {
        Commands::InitDb => {
            let pool = connect().await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            let pool = connect().await?;
            db::seed(&pool).await?;
            println!("Seed cohort inserted.");
        }
        Commands::Participants => {
            let pool = connect().await?;
            let (roster, summary) = progress::rank(&config, db::fetch_participants(&pool).await);

            println!(
                "{} participants, average completion {}%.",
                summary.count, summary.avg
            );
            for participant in &roster {
                println!(
                    "- {} (joined {}) {}%",
                    participant.full_name, participant.date_of_joining, participant.overall_pct
                );
                for week in &participant.weeks {
                    println!(
                        "    week {}: {}/{} ({}%)",
                        week.week, week.completed, week.required, week.pct
                    );
                }
            }
        }
        Commands::Report { out } => {
            let pool = connect().await?;
            let (roster, summary) = progress::rank(&config, db::fetch_participants(&pool).await);
            let report = report::build_report(&roster, &summary);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Trainings => {
            for course in content::trainings_catalog() {
                println!("{} ({}, {})", course.name, course.price, course.availability);
                println!("{}", course.impact);
                println!("  Cover image: {}", course.image);
                for chapter in course.chapters {
                    println!("  {chapter}");
                }
                println!("  Book a session: {}", course.request_url);
            }
        }
        Commands::Gallery { json } => {
            let cards = content::load_gallery_cards(&json);
            if cards.is_empty() {
                println!("No gallery cards found.");
            }
            for card in cards {
                println!("- {}: {} ({})", card.title, card.description, card.image);
            }
        }
        Commands::Certificates { csv } => {
            let certificates = content::load_certificates(&csv)?;
            if certificates.is_empty() {
                println!("No completed certificates found.");
            }
            for certificate in certificates {
                println!(
                    "- {} (joined {}) completed {} ({}) {}",
                    certificate.name,
                    certificate.date_of_joining,
                    certificate.date_of_completion,
                    certificate.credential,
                    certificate
                        .certificate_url
                        .as_deref()
                        .unwrap_or("no certificate image")
                );
            }
        }
    }

    Ok(())
}

async fn connect() -> anyhow::Result<MySqlPool> {
    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to the trainings MySQL instance")?;

    MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to MySQL")
}
