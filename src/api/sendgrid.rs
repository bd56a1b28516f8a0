use anyhow::{Context, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::sendgrid_dto::SendGridMailDto;
use crate::{models::NotificationMessage, services::notifier::Mailer};

pub struct SendGridMailer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        let url = format!("{}/v3/mail/send", self.base_url.trim_end_matches('/'));
        let payload = SendGridMailDto::from_message(message);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to send email")?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::msg(format!(
                "Failed to send email: SendGrid returned {}: {}",
                status, body
            )));
        }

        debug!("SendGrid accepted message for {:?}", message.to());
        Ok(())
    }
}
