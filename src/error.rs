use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration missing: {0}")]
    Missing(&'static str),
    #[error("Required configuration missing: no recipients in TO_EMAILS")]
    NoRecipients,
    #[error("Invalid SMTP port '{0}'")]
    InvalidPort(String),
    #[error("Invalid scrape wait '{0}', expected whole seconds")]
    InvalidWait(String),
    #[error("Unknown rate strategy '{0}', expected 'api' or 'scrape'")]
    UnknownStrategy(String),
}

/// Failures while producing today's rate. `Status` and `Parse` are kept apart so
/// an upstream outage can be told from a payload change.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to make API request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API returned non-200 status code: {0}")]
    Status(u16),
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} USD exchange rate not found in the response")]
    BankNotFound(String),
    #[error("{0} row found but its rate cell is empty")]
    EmptyRate(String),
    #[error("Failed to parse rates page: {0}")]
    Markup(String),
    #[error("Browser session failed: {0}")]
    Browser(String),
}
