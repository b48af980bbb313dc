use async_trait::async_trait;
use tracing::info;
use crate::gateway::notify::Notifier;

// SmsNotifier simulates delivery to a phone number.
pub struct SmsNotifier {
    phone_number: String,
}

impl SmsNotifier {
    pub fn new(phone_number: &str) -> Self {
        Self {
            phone_number: phone_number.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    async fn send(&self, message: &str) -> bool {
        info!("sms notification sent to {}: {}", self.phone_number, message);
        true
    }
}
