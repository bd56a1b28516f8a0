#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use crate::{
        api::SendGridMailer,
        models::RateValue,
        services::{Mailer, notifier::per_recipient_message},
    };

    #[tokio::test]
    async fn sends_plain_and_html_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .and(header("authorization", "Bearer SG.key"))
            .and(body_partial_json(json!({
                "personalizations": [{ "to": [{ "email": "a@example.com", "name": "Recipient" }] }],
                "from": { "email": "from@example.com", "name": "Exchange Rate Notifier" },
                "subject": "Sampath Bank USD Exchange Rate: 305.1500",
                "content": [
                    { "type": "text/plain", "value": "Sampath Bank USD exchange rate is 305.1500" },
                    { "type": "text/html", "value": "<strong>Sampath Bank USD exchange rate is 305.1500</strong>" }
                ]
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = SendGridMailer::new("SG.key".to_string(), server.uri());
        let message = per_recipient_message(
            "from@example.com",
            "a@example.com",
            &RateValue::new("305.1500"),
        );

        mailer.send(&message).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_request_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let mailer = SendGridMailer::new("bad".to_string(), server.uri());
        let message = per_recipient_message(
            "from@example.com",
            "a@example.com",
            &RateValue::new("305.1500"),
        );

        let err = mailer.send(&message).await.unwrap_err();
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid api key"));
    }
}
