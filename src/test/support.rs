#[cfg(test)]
pub mod helpers {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use anyhow::{Error, Result};
    use async_trait::async_trait;

    use crate::{models::NotificationMessage, services::Mailer};

    /// Records every message and fails for one chosen address.
    #[derive(Clone, Default)]
    pub struct RecordingMailer {
        pub sent: Arc<Mutex<Vec<NotificationMessage>>>,
        pub fail_for: Option<String>,
    }

    impl RecordingMailer {
        pub fn failing_for(address: &str) -> Self {
            Self {
                sent: Arc::default(),
                fail_for: Some(address.to_string()),
            }
        }

        pub fn sent(&self) -> Vec<NotificationMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, message: &NotificationMessage) -> Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            if let Some(address) = &self.fail_for {
                if message.to().contains(address) {
                    return Err(Error::msg("mailbox unavailable"));
                }
            }
            Ok(())
        }
    }

    pub fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }
}
