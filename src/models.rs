use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::Config, scanner::ScanSession};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub struct CliApp {
    pub config: Config,
    /// Most recent scan, completed or not. Results and export act on it.
    pub session: Option<ScanSession>,
}

/// Search criteria collected from the operator before a scan starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    pub location: String,
    pub quantity: u32,
    pub min_reviews: u32,
    /// Radius in miles. Collected for the form but never applied as a filter
    /// (simulation only).
    pub max_distance: u32,
    /// Upper bound: only businesses rated BELOW this qualify.
    pub rating_threshold: f64,
    pub require_no_website: bool,
}

/// One synthetic business record. Built once by the generator and never
/// mutated afterwards: it is either discarded by a filter or appended to the
/// session's lead list.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessLead {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub reviews: u32,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub maps_url: String,
    pub has_website: bool,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "process")]
    Process,
}

/// One line of the user-facing scan feed. The feed is append-only and keeps
/// strict attempt order.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub level: LogLevel,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            message: message.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Idle,
    Scanning,
    Completed,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Idle => write!(f, "idle"),
            ScanStatus::Scanning => write!(f, "scanning"),
            ScanStatus::Completed => write!(f, "completed"),
        }
    }
}
