use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&mut self) -> Result<()> {
        println!("\n🚀 Welcome to Lead Finder!");
        println!("═══════════════════════════════════════");
        println!("📡 Simulation mode: candidates are generated locally, no API key needed.");

        loop {
            let actions = vec![
                MenuAction::StartScan,
                MenuAction::ShowResults,
                MenuAction::ExportCsv,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::StartScan => {
                    if let Err(e) = self.run_scan().await {
                        error!("Scan failed: {}", e);
                    }
                }
                MenuAction::ShowResults => {
                    if let Err(e) = self.show_results() {
                        error!("Failed to show results: {}", e);
                    }
                }
                MenuAction::ExportCsv => {
                    if let Err(e) = self.run_export().await {
                        error!("CSV export failed: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Lead Finder!");
                    break;
                }
            }
        }

        Ok(())
    }
}
