pub mod config;
pub mod message;
pub mod rate;

pub use config::{Config, RateSource, SmtpSettings, Strategy, Transport};
pub use message::NotificationMessage;
pub use rate::{RateField, RateValue};
