use std::collections::VecDeque;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;

// ActivityLog is the append-only sink for human-readable registry events;
// appending is best-effort and never fails on the hot path.
#[async_trait]
pub trait ActivityLog: Sync + Send {
    async fn append(&self, line: &str);

    // at most the last `limit` entries, oldest first
    async fn recent(&self, limit: usize) -> Vec<String>;
}

// SessionLog keeps the tail of one interactive session in a bounded ring
// buffer; it is created at session start and dropped with the session.
pub struct SessionLog {
    capacity: usize,
    entries: RwLock<VecDeque<String>>,
}

impl SessionLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl ActivityLog for SessionLog {
    async fn append(&self, line: &str) {
        let stamped = format!("[{}] {}", Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S"), line);
        info!("{}", stamped);
        let mut entries = self.entries.write();
        entries.push_back(stamped);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    async fn recent(&self, limit: usize) -> Vec<String> {
        let entries = self.entries.read();
        entries.iter().skip(entries.len().saturating_sub(limit)).cloned().collect()
    }
}
