use std::process::ExitCode;

use clap::Parser;
use exrate_notifier::{
    app::{App, utils::load_env_file},
    models::{Config, Strategy},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Emails today's Sampath Bank USD buying rate")]
struct Cli {
    /// Retrieval strategy, `api` or `scrape`. Overrides RATE_STRATEGY.
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Environment file to load instead of ./.env
    #[arg(long)]
    env_file: Option<String>,

    /// Fetch and format, but do not send anything
    #[arg(long)]
    dry_run: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = load_env_file(cli.env_file.as_deref()) {
        warn!("Warning: {:#}, using environment variables", e);
    }

    let config = match Config::from_env(cli.strategy) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let app = match App::from_config(config) {
        Ok(app) => app.with_dry_run(cli.dry_run),
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match app.run().await {
        Ok(report) if *report.dry_run() => {
            info!("Dry run complete, no email sent");
            ExitCode::SUCCESS
        }
        Ok(report) if report.is_success() => {
            info!("Email sent successfully to {} recipient(s)", report.delivered().len());
            ExitCode::SUCCESS
        }
        Ok(report) => {
            error!(
                "Error sending email: {} of {} recipient(s) failed",
                report.failed().len(),
                report.failed().len() + report.delivered().len()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
