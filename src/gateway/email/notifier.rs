use async_trait::async_trait;
use tracing::info;
use crate::gateway::notify::Notifier;

// EmailNotifier simulates delivery to a mailbox.
pub struct EmailNotifier {
    email_address: String,
}

impl EmailNotifier {
    pub fn new(email_address: &str) -> Self {
        Self {
            email_address: email_address.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, message: &str) -> bool {
        info!("email notification sent to {}: {}", self.email_address, message);
        true
    }
}
