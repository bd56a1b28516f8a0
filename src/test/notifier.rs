#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        models::RateValue,
        services::{DeliveryMode, Notifier},
        test::support::helpers::RecordingMailer,
    };

    fn recipients() -> Vec<String> {
        vec![
            "a@example.com".to_string(),
            "b@example.com".to_string(),
            "c@example.com".to_string(),
        ]
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn notifier(mailer: &RecordingMailer, mode: DeliveryMode) -> Notifier {
        Notifier::new(Box::new(mailer.clone()), mode, "from@example.com".to_string())
    }

    #[tokio::test]
    async fn each_recipient_is_notified_exactly_once() {
        let mailer = RecordingMailer::default();
        let rate = RateValue::new("305.1500");

        let report = notifier(&mailer, DeliveryMode::PerRecipient)
            .notify_all(&recipients(), &rate, date())
            .await
            .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 3);
        for (message, recipient) in sent.iter().zip(recipients()) {
            assert_eq!(message.to(), &vec![recipient]);
        }
        assert!(report.is_success());
        assert_eq!(report.delivered(), &recipients());
    }

    #[tokio::test]
    async fn per_recipient_message_embeds_rate() {
        let mailer = RecordingMailer::default();
        let rate = RateValue::new("305.1500");

        notifier(&mailer, DeliveryMode::PerRecipient)
            .notify("a@example.com", &rate)
            .await
            .unwrap();

        let sent = mailer.sent();
        let message = &sent[0];
        assert_eq!(message.from(), "from@example.com");
        assert_eq!(message.subject(), "Sampath Bank USD Exchange Rate: 305.1500");
        assert_eq!(message.text_body(), "Sampath Bank USD exchange rate is 305.1500");
        assert_eq!(
            message.html_body().as_deref(),
            Some("<strong>Sampath Bank USD exchange rate is 305.1500</strong>")
        );
    }

    #[tokio::test]
    async fn failed_recipient_does_not_stop_delivery() {
        let mailer = RecordingMailer::failing_for("b@example.com");
        let rate = RateValue::new("305.1500");

        let report = notifier(&mailer, DeliveryMode::PerRecipient)
            .notify_all(&recipients(), &rate, date())
            .await
            .unwrap();

        assert_eq!(mailer.sent().len(), 3);
        assert!(!report.is_success());
        assert_eq!(report.delivered(), &vec!["a@example.com", "c@example.com"]);
        assert_eq!(report.failed().len(), 1);
        assert_eq!(report.failed()[0].0, "b@example.com");
        assert!(report.failed()[0].1.contains("mailbox unavailable"));
    }

    #[tokio::test]
    async fn joint_mode_sends_one_plain_message() {
        let mailer = RecordingMailer::default();
        let rate = RateValue::new("305.1500");

        let report = notifier(&mailer, DeliveryMode::Joint)
            .notify_all(&recipients(), &rate, date())
            .await
            .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to(), &recipients());
        assert_eq!(sent[0].subject(), "Sampath Bank USD Exchange Rate");
        assert_eq!(
            sent[0].text_body(),
            "Sampath Bank USD buying rate on 2024-05-01: 305.1500"
        );
        assert!(sent[0].html_body().is_none());
        assert_eq!(report.delivered().len(), 3);
    }

    #[tokio::test]
    async fn joint_mode_failure_is_fatal() {
        let mailer = RecordingMailer::failing_for("c@example.com");
        let rate = RateValue::new("305.1500");

        let result = notifier(&mailer, DeliveryMode::Joint)
            .notify_all(&recipients(), &rate, date())
            .await;

        assert!(result.is_err());
        assert_eq!(mailer.sent().len(), 1);
    }

    #[test]
    fn compose_matches_delivery_mode() {
        let mailer = RecordingMailer::default();
        let rate = RateValue::new("305.1500");

        let per_recipient = notifier(&mailer, DeliveryMode::PerRecipient).compose(&recipients(), &rate, date());
        let joint = notifier(&mailer, DeliveryMode::Joint).compose(&recipients(), &rate, date());

        assert_eq!(per_recipient.len(), 3);
        assert_eq!(joint.len(), 1);
        assert!(mailer.sent().is_empty());
    }
}
