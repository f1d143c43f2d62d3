use tracing::info;

use crate::config::Config;
use crate::models::CliApp;

#[derive(Debug, Clone)]
pub enum MenuAction {
    StartScan,
    ShowResults,
    ExportCsv,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::StartScan => {
                write!(f, "🔍 Start a new lead scan")
            }
            MenuAction::ShowResults => {
                write!(f, "📋 Show qualified leads from the last scan")
            }
            MenuAction::ExportCsv => {
                write!(f, "📤 Export leads to CSV")
            }
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        info!(
            "simulation pacing {}..{} ms, exports under {}/",
            config.simulation.min_delay_ms,
            config.simulation.max_delay_ms,
            config.output.directory
        );
        Self {
            config,
            session: None,
        }
    }
}
