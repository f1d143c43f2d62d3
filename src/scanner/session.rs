use crate::models::{BusinessLead, LogEntry, LogLevel, ScanStatus, SearchParams};

/// Attempts allowed per requested lead before the scan gives up.
pub const MAX_ATTEMPT_FACTOR: u32 = 15;

/// All mutable state of one scan, owned by the controller and updated only
/// through the transition methods below. The display layer reads, never
/// writes.
pub struct ScanSession {
    params: SearchParams,
    status: ScanStatus,
    leads: Vec<BusinessLead>,
    logs: Vec<LogEntry>,
    attempts: u32,
    progress: u8,
}

impl ScanSession {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            status: ScanStatus::Idle,
            leads: Vec::new(),
            logs: Vec::new(),
            attempts: 0,
            progress: 0,
        }
    }

    /// Idle -> Scanning. Rejects an empty location with a single error log
    /// entry and leaves the session Idle.
    pub fn start(&mut self) -> bool {
        if self.params.location.trim().is_empty() {
            self.log(LogLevel::Error, "Error: Location is required.");
            return false;
        }

        self.status = ScanStatus::Scanning;
        self.leads.clear();
        self.attempts = 0;
        self.progress = 0;

        let location = self.params.location.clone();
        let criteria = format!(
            "Criteria: < {} Stars, {}.",
            self.params.rating_threshold,
            if self.params.require_no_website {
                "NO Website"
            } else {
                "Any Website"
            }
        );
        self.log(
            LogLevel::Process,
            format!("Initializing search in {}...", location),
        );
        self.log(LogLevel::Info, criteria);
        true
    }

    /// Appends one feed entry and hands it back for live rendering.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) -> &LogEntry {
        self.logs.push(LogEntry::new(level, message));
        self.logs.last().unwrap()
    }

    /// Bumps the attempt counter and reports whether the safety cutoff fired.
    pub fn next_attempt(&mut self) -> AttemptOutcome {
        self.attempts += 1;
        if self.attempts > self.params.quantity * MAX_ATTEMPT_FACTOR {
            AttemptOutcome::CutoffReached
        } else {
            AttemptOutcome::Proceed(self.attempts)
        }
    }

    /// Accepts a qualifying candidate and recomputes progress.
    pub fn record_lead(&mut self, lead: BusinessLead) {
        debug_assert!(self.leads.len() < self.params.quantity as usize);
        self.leads.push(lead);
        self.progress =
            ((self.leads.len() as f64 / self.params.quantity as f64) * 100.0).round() as u8;
    }

    /// Terminal transition; reached on success, cutoff, and failure alike.
    pub fn complete(&mut self) {
        self.status = ScanStatus::Completed;
    }

    pub fn target_met(&self) -> bool {
        self.leads.len() as u32 >= self.params.quantity
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn leads(&self) -> &[BusinessLead] {
        &self.leads
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Proceed(u32),
    CutoffReached,
}
