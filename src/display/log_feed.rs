use chrono::Local;

use crate::models::{LogEntry, LogLevel};

/// Renders one feed entry: local timestamp, severity icon, message.
pub fn print_entry(entry: &LogEntry) {
    println!(
        "[{}] {} {}",
        entry.timestamp.with_timezone(&Local).format("%H:%M:%S"),
        icon_for(entry.level),
        entry.message
    );
}

fn icon_for(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "ℹ️ ",
        LogLevel::Success => "✅",
        LogLevel::Warning => "⚠️ ",
        LogLevel::Error => "❌",
        LogLevel::Process => "🔍",
    }
}
