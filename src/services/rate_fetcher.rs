use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use tracing::info;

use crate::{
    api::exrates::{self, CURRENCY},
    error::FetchError,
    models::{RateSource, RateValue},
    scrape::{BrowserSession, extract_rate},
};

/// Produces today's USD buying rate for one bank.
#[async_trait]
pub trait RateFetcher: Send + Sync {
    async fn fetch_rate(&self) -> Result<RateValue, FetchError>;
}

pub fn fetcher_for(source: &RateSource) -> Box<dyn RateFetcher> {
    match source {
        RateSource::Api { base_url, bank } => {
            Box::new(ApiRateFetcher::new(base_url.clone(), bank.clone()))
        }
        RateSource::Scrape {
            url,
            bank,
            wait,
            debug_port,
        } => Box::new(ScrapeRateFetcher::new(
            url.clone(),
            bank.clone(),
            *wait,
            *debug_port,
        )),
    }
}

pub struct ApiRateFetcher {
    client: Client,
    base_url: String,
    bank: String,
}

impl ApiRateFetcher {
    pub fn new(base_url: String, bank: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            bank,
        }
    }

    pub async fn fetch_rate_on(&self, date: NaiveDate) -> Result<RateValue, FetchError> {
        let response =
            exrates::get_exchange_rates(&self.client, &self.base_url, CURRENCY, date).await?;
        info!(
            "Received {} exchange rate entries for {}",
            response.data().len(),
            date
        );
        exrates::find_buying_rate(&response, &self.bank)
    }
}

#[async_trait]
impl RateFetcher for ApiRateFetcher {
    async fn fetch_rate(&self) -> Result<RateValue, FetchError> {
        self.fetch_rate_on(Local::now().date_naive()).await
    }
}

pub struct ScrapeRateFetcher {
    url: String,
    bank: String,
    wait: Duration,
    debug_port: u16,
}

impl ScrapeRateFetcher {
    pub fn new(url: String, bank: String, wait: Duration, debug_port: u16) -> Self {
        Self {
            url,
            bank,
            wait,
            debug_port,
        }
    }
}

#[async_trait]
impl RateFetcher for ScrapeRateFetcher {
    async fn fetch_rate(&self) -> Result<RateValue, FetchError> {
        let session = BrowserSession::launch(self.debug_port).await?;
        info!("Rendering {} (waiting {:?})", self.url, self.wait);

        let rendered = session.render(&self.url, self.wait).await;
        session.close().await;

        extract_rate(&rendered?, &self.bank)
    }
}
