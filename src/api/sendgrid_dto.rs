use derive_new::new;
use serde::Serialize;

use crate::models::{
    NotificationMessage,
    message::{RECIPIENT_NAME, SENDER_NAME},
};

#[derive(Debug, Serialize, new)]
pub struct SendGridAddressDto {
    email: String,
    name: String,
}

#[derive(Debug, Serialize, new)]
pub struct SendGridPersonalizationDto {
    to: Vec<SendGridAddressDto>,
}

#[derive(Debug, Serialize, new)]
pub struct SendGridContentDto {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

#[derive(Debug, Serialize, new)]
pub struct SendGridMailDto {
    personalizations: Vec<SendGridPersonalizationDto>,
    from: SendGridAddressDto,
    subject: String,
    content: Vec<SendGridContentDto>,
}

impl SendGridMailDto {
    pub fn from_message(message: &NotificationMessage) -> Self {
        let to = message
            .to()
            .iter()
            .map(|email| SendGridAddressDto::new(email.clone(), RECIPIENT_NAME.to_string()))
            .collect();

        // text/plain must precede text/html
        let mut content = vec![SendGridContentDto::new(
            "text/plain".to_string(),
            message.text_body().clone(),
        )];
        if let Some(html) = message.html_body() {
            content.push(SendGridContentDto::new("text/html".to_string(), html.clone()));
        }

        Self::new(
            vec![SendGridPersonalizationDto::new(to)],
            SendGridAddressDto::new(message.from().clone(), SENDER_NAME.to_string()),
            message.subject().clone(),
            content,
        )
    }
}
