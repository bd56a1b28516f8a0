use derive_getters::Getters;
use derive_new::new;

pub const SENDER_NAME: &str = "Exchange Rate Notifier";
pub const RECIPIENT_NAME: &str = "Recipient";

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct NotificationMessage {
    from: String,
    to: Vec<String>,
    subject: String,
    text_body: String,
    html_body: Option<String>,
}
