use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads variables from `path` (tilde expanded) or from `.env` in the working
/// directory. Variables already set in the process environment are kept.
pub fn load_env_file(path: Option<&str>) -> Result<PathBuf> {
    match path {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
            dotenv::from_path(&expanded)
                .with_context(|| format!("Failed to load env file {}", expanded.display()))?;
            Ok(expanded)
        }
        None => dotenv::dotenv().context(".env file not found"),
    }
}
