use crate::display::results_table;
use crate::models::{CliApp, Result};

impl CliApp {
    pub fn show_results(&self) -> Result<()> {
        match &self.session {
            Some(session) => {
                println!(
                    "\n📊 Last scan in {} ({}): {} leads, {} candidates checked, progress {}%",
                    session.params().location,
                    session.status(),
                    session.leads().len(),
                    session.attempts(),
                    session.progress()
                );
                results_table::print_table(session.leads());
            }
            None => {
                println!("\n💡 No scan results yet. Start a scan first!");
            }
        }

        Ok(())
    }
}
