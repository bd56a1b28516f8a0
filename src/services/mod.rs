pub mod notifier;
pub mod rate_fetcher;

pub use notifier::{DeliveryMode, DeliveryReport, Mailer, Notifier};
pub use rate_fetcher::{ApiRateFetcher, RateFetcher, ScrapeRateFetcher};
