use std::{str::FromStr, time::Duration};

use derive_getters::Getters;
use strum_macros::{Display, EnumString};

use crate::error::ConfigError;

pub const DEFAULT_FROM_EMAIL: &str = "exchange-rate-notifier@example.com";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.sendgrid.net";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_EXRATES_BASE_URL: &str = "https://cron.numbers.lk";
pub const DEFAULT_SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_API_BANK: &str = "SAMPATH";
pub const DEFAULT_SCRAPE_URL: &str = "https://www.sampath.lk/rates-and-charges?activeTab=exchange-rates";
pub const DEFAULT_SCRAPE_BANK: &str = "Sampath Bank";
pub const DEFAULT_SCRAPE_WAIT_SECS: u64 = 5;
pub const DEFAULT_BROWSER_DEBUG_PORT: u16 = 9515;

/// Which way today's rate is retrieved. Each strategy brings its own mail
/// transport: the JSON API pairs with SendGrid, the scraper with SMTP.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    #[default]
    Api,
    Scrape,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RateSource {
    Api {
        base_url: String,
        bank: String,
    },
    Scrape {
        url: String,
        bank: String,
        wait: Duration,
        debug_port: u16,
    },
}

#[derive(Clone, Debug, Getters, Eq, PartialEq)]
pub struct SmtpSettings {
    host: String,
    port: u16,
    username: String,
    password: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transport {
    SendGrid { api_key: String, base_url: String },
    Smtp(SmtpSettings),
}

#[derive(Clone, Debug, Getters)]
pub struct Config {
    strategy: Strategy,
    from_email: String,
    recipients: Vec<String>,
    source: RateSource,
    transport: Transport,
}

impl Config {
    /// Reads the process environment. A `.env` file, if any, must already be loaded.
    pub fn from_env(strategy: Option<Strategy>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), strategy)
    }

    /// Builds the configuration from any key lookup. An explicit `strategy`
    /// overrides `RATE_STRATEGY`.
    pub fn from_lookup<F>(lookup: F, strategy: Option<Strategy>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let strategy = match strategy {
            Some(strategy) => strategy,
            None => match get("RATE_STRATEGY") {
                Some(value) => Strategy::from_str(value.trim())
                    .map_err(|_| ConfigError::UnknownStrategy(value))?,
                None => Strategy::default(),
            },
        };

        let from_email = get("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string());
        let recipients = parse_recipients(&get("TO_EMAILS").unwrap_or_default());
        if recipients.is_empty() {
            return Err(ConfigError::NoRecipients);
        }

        let (source, transport) = match strategy {
            Strategy::Api => (
                RateSource::Api {
                    base_url: get("EXRATES_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_EXRATES_BASE_URL.to_string()),
                    bank: get("TARGET_BANK").unwrap_or_else(|| DEFAULT_API_BANK.to_string()),
                },
                Transport::SendGrid {
                    api_key: require("SENDGRID_API_KEY")?,
                    base_url: get("SENDGRID_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_SENDGRID_BASE_URL.to_string()),
                },
            ),
            Strategy::Scrape => {
                let port = match get("SMTP_PORT") {
                    Some(value) => value
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(value))?,
                    None => DEFAULT_SMTP_PORT,
                };
                let debug_port = match get("BROWSER_DEBUG_PORT") {
                    Some(value) => value
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(value))?,
                    None => DEFAULT_BROWSER_DEBUG_PORT,
                };
                let wait_secs = match get("SCRAPE_WAIT_SECS") {
                    Some(value) => value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidWait(value))?,
                    None => DEFAULT_SCRAPE_WAIT_SECS,
                };

                (
                    RateSource::Scrape {
                        url: get("SCRAPE_URL").unwrap_or_else(|| DEFAULT_SCRAPE_URL.to_string()),
                        bank: get("SCRAPE_BANK").unwrap_or_else(|| DEFAULT_SCRAPE_BANK.to_string()),
                        wait: Duration::from_secs(wait_secs),
                        debug_port,
                    },
                    Transport::Smtp(SmtpSettings {
                        host: get("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
                        port,
                        username: require("SMTP_USERNAME")?,
                        password: require("SMTP_PASSWORD")?,
                    }),
                )
            }
        };

        Ok(Self {
            strategy,
            from_email,
            recipients,
            source,
            transport,
        })
    }
}

pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(String::from)
        .collect()
}
