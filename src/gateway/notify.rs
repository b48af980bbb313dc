use std::sync::Arc;
use async_trait::async_trait;
use crate::gateway::logs::ActivityLog;

// Notifier abstracts a delivery channel; a false result is a soft failure
// with no delivery guarantee either way.
#[async_trait]
pub trait Notifier: Sync + Send {
    async fn send(&self, message: &str) -> bool;
}

// NotificationService records the outcome of every delivery attempt in the
// activity log; failures are never escalated.
pub struct NotificationService {
    activity_log: Arc<dyn ActivityLog>,
}

impl NotificationService {
    pub fn new(activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            activity_log,
        }
    }

    pub async fn send_notification(&self, notifier: &dyn Notifier, message: &str) -> bool {
        let sent = notifier.send(message).await;
        if sent {
            self.activity_log.append(format!("Notification sent: {}", message).as_str()).await;
        } else {
            self.activity_log.append(format!("Failed to send notification: {}", message).as_str()).await;
        }
        sent
    }
}
