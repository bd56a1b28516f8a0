use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_getters::Getters;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::{Credentials, Mechanism},
};
use tracing::{error, info};

use crate::{
    api::SendGridMailer,
    models::{
        NotificationMessage, RateValue, SmtpSettings, Strategy, Transport,
        message::SENDER_NAME,
    },
};

/// Delivers one composed message.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<()>;
}

pub fn mailer_for(transport: &Transport) -> Result<Box<dyn Mailer>> {
    match transport {
        Transport::SendGrid { api_key, base_url } => Ok(Box::new(SendGridMailer::new(
            api_key.clone(),
            base_url.clone(),
        ))),
        Transport::Smtp(settings) => Ok(Box::new(SmtpMailer::new(settings)?)),
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Implicit-TLS submission with PLAIN authentication.
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(settings.host())
            .with_context(|| format!("Failed to set up SMTP relay {}", settings.host()))?
            .port(*settings.port())
            .credentials(Credentials::new(
                settings.username().clone(),
                settings.password().clone(),
            ))
            .authentication(vec![Mechanism::Plain])
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        let from = Mailbox::new(
            Some(SENDER_NAME.to_string()),
            message
                .from()
                .parse()
                .with_context(|| format!("Invalid sender address '{}'", message.from()))?,
        );

        let mut builder = Message::builder().from(from).subject(message.subject());
        for recipient in message.to() {
            let to = recipient
                .parse::<Mailbox>()
                .with_context(|| format!("Invalid recipient address '{}'", recipient))?;
            builder = builder.to(to);
        }

        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.text_body().clone())
            .context("Failed to build email")?;

        self.transport
            .send(email)
            .await
            .context("Failed to send email over SMTP")?;
        Ok(())
    }
}

/// How recipients are addressed and what a delivery failure means.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeliveryMode {
    /// One message per recipient; failures are logged and delivery continues.
    PerRecipient,
    /// One message for the whole list; a failure aborts the run.
    Joint,
}

impl DeliveryMode {
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Api => DeliveryMode::PerRecipient,
            Strategy::Scrape => DeliveryMode::Joint,
        }
    }
}

#[derive(Debug, Default, Getters)]
pub struct DeliveryReport {
    delivered: Vec<String>,
    failed: Vec<(String, String)>,
    dry_run: bool,
}

impl DeliveryReport {
    /// Report for a run that composed its messages but sent none.
    pub fn dry_run_only() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn per_recipient_message(from: &str, recipient: &str, rate: &RateValue) -> NotificationMessage {
    NotificationMessage::new(
        from.to_string(),
        vec![recipient.to_string()],
        format!("Sampath Bank USD Exchange Rate: {}", rate),
        format!("Sampath Bank USD exchange rate is {}", rate),
        Some(format!(
            "<strong>Sampath Bank USD exchange rate is {}</strong>",
            rate
        )),
    )
}

pub fn joint_message(
    from: &str,
    recipients: &[String],
    rate: &RateValue,
    date: NaiveDate,
) -> NotificationMessage {
    NotificationMessage::new(
        from.to_string(),
        recipients.to_vec(),
        "Sampath Bank USD Exchange Rate".to_string(),
        format!(
            "Sampath Bank USD buying rate on {}: {}",
            date.format("%Y-%m-%d"),
            rate
        ),
        None,
    )
}

pub struct Notifier {
    mailer: Box<dyn Mailer>,
    mode: DeliveryMode,
    from: String,
}

impl Notifier {
    pub fn new(mailer: Box<dyn Mailer>, mode: DeliveryMode, from: String) -> Self {
        Self { mailer, mode, from }
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// Messages a run would send, in delivery order.
    pub fn compose(
        &self,
        recipients: &[String],
        rate: &RateValue,
        date: NaiveDate,
    ) -> Vec<NotificationMessage> {
        match self.mode {
            DeliveryMode::PerRecipient => recipients
                .iter()
                .map(|recipient| per_recipient_message(&self.from, recipient, rate))
                .collect(),
            DeliveryMode::Joint => vec![joint_message(&self.from, recipients, rate, date)],
        }
    }

    /// Sends the rate to a single recipient.
    pub async fn notify(&self, recipient: &str, rate: &RateValue) -> Result<()> {
        let message = per_recipient_message(&self.from, recipient, rate);
        self.mailer
            .send(&message)
            .await
            .with_context(|| format!("Error sending email to {}", recipient))
    }

    pub async fn notify_all(
        &self,
        recipients: &[String],
        rate: &RateValue,
        date: NaiveDate,
    ) -> Result<DeliveryReport> {
        let mut report = DeliveryReport::default();

        match self.mode {
            DeliveryMode::PerRecipient => {
                for recipient in recipients {
                    match self.notify(recipient, rate).await {
                        Ok(()) => {
                            info!("Email sent to {}", recipient);
                            report.delivered.push(recipient.clone());
                        }
                        Err(e) => {
                            error!("{:#}", e);
                            report.failed.push((recipient.clone(), format!("{:#}", e)));
                        }
                    }
                }
            }
            DeliveryMode::Joint => {
                let message = joint_message(&self.from, recipients, rate, date);
                self.mailer
                    .send(&message)
                    .await
                    .with_context(|| format!("Error sending email to {}", recipients.join(", ")))?;
                info!("Email sent to {} recipients", recipients.len());
                report.delivered.extend(recipients.iter().cloned());
            }
        }

        Ok(report)
    }
}
