use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Identifiable defines common traits that can be shared by registry-owned records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts branch-level options for the registry
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub late_fee_per_day: f64,
    pub session_log_capacity: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 14,
            late_fee_per_day: 0.50,
            session_log_capacity: 10,
        }
    }
}

// IdIssuer hands out opaque unique identifiers for catalog records
#[derive(Debug, Clone, Copy, Default)]
pub struct IdIssuer;

impl IdIssuer {
    pub fn issue(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
