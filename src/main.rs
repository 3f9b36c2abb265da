use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tokio::io::{BufWriter, stdout};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;
mod report;

use commands::Args;
use models::sample_people;
use report::{Report, write_report};

fn init_tracing() {
    // A missing .env is fine, RUST_LOG can still come from the environment
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_report(args: Args) -> Result<()> {
    let start = std::time::Instant::now();

    let people = sample_people().context("Could not build sample people")?;
    tracing::info!("Created {} sample people", people.len());
    for person in &people {
        tracing::debug!(
            "{} <{}> born {} has id {}",
            person.name,
            person.email,
            person.dob,
            person.id
        );
    }

    let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!("Computing ages as of {}", today);

    let report = Report::build(&people, today, &args.avatar_base)?;

    let mut writer = BufWriter::new(stdout());
    write_report(&mut writer, &report)
        .await
        .context("Failed to write report")?;

    tracing::info!("Report written in {:?}", start.elapsed());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Args::parse();
    run_report(cli).await?;

    Ok(())
}
