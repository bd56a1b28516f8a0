use anyhow::{Context, Result};
use tracing::info;

use super::utils::today;
use crate::{
    models::Config,
    services::{
        DeliveryMode, DeliveryReport, Notifier, RateFetcher, notifier::mailer_for,
        rate_fetcher::fetcher_for,
    },
};

/// One run of the pipeline: fetch today's rate, then notify every recipient.
pub struct App {
    config: Config,
    fetcher: Box<dyn RateFetcher>,
    notifier: Notifier,
    dry_run: bool,
}

impl App {
    pub fn new(config: Config, fetcher: Box<dyn RateFetcher>, notifier: Notifier) -> Self {
        Self {
            config,
            fetcher,
            notifier,
            dry_run: false,
        }
    }

    /// Wires the fetcher and mailer the configured strategy calls for.
    pub fn from_config(config: Config) -> Result<Self> {
        let fetcher = fetcher_for(config.source());
        let mailer = mailer_for(config.transport())?;
        let notifier = Notifier::new(
            mailer,
            DeliveryMode::for_strategy(*config.strategy()),
            config.from_email().clone(),
        );

        Ok(Self::new(config, fetcher, notifier))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<DeliveryReport> {
        info!("Fetching exchange rate using the {} strategy", self.config.strategy());

        let rate = self
            .fetcher
            .fetch_rate()
            .await
            .context("Error getting exchange rate")?;
        info!("Exchange rate: {}", rate);

        let recipients = self.config.recipients();
        let date = today();

        if self.dry_run {
            for message in self.notifier.compose(recipients, &rate, date) {
                info!(
                    "Dry run, not sending to {:?}: {} | {}",
                    message.to(),
                    message.subject(),
                    message.text_body()
                );
            }
            return Ok(DeliveryReport::dry_run_only());
        }

        self.notifier.notify_all(recipients, &rate, date).await
    }
}
