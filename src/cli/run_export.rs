// src/cli/run_export.rs
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::export::CsvExporter;
use crate::models::{CliApp, Result};

impl CliApp {
    pub async fn run_export(&self) -> Result<()> {
        println!("\n📤 CSV Export");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let Some(session) = &self.session else {
            println!("❌ Nothing to export yet. Start a scan first!");
            return Ok(());
        };

        let leads = session.leads();
        if leads.is_empty() {
            println!("❌ The last scan found no qualified leads.");
            return Ok(());
        }

        // Preview
        println!("\n📋 Export Preview:");
        println!("━━━━━━━━━━━━━━━━━━━━━");
        for (i, lead) in leads.iter().take(5).enumerate() {
            let website_status = lead.website.as_deref().unwrap_or("No Website");
            println!(
                "{}. {} ({} ⭐, {} reviews) - {}",
                i + 1,
                lead.name,
                lead.rating,
                lead.reviews,
                website_status
            );
        }
        if leads.len() > 5 {
            println!("   ... and {} more", leads.len() - 5);
        }

        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Export {} leads to CSV?", leads.len()))
            .interact()?;

        if !proceed {
            println!("❌ Export cancelled");
            return Ok(());
        }

        let exporter = CsvExporter::new();
        let filename = exporter.generate_filename(&self.config.output.directory);
        exporter.export_to_csv(leads, &filename).await?;

        println!("\n✅ Export completed!");
        println!("📁 File: {}", filename);
        println!("📊 Total leads: {}", leads.len());

        Ok(())
    }
}
