// src/cli/run_scan.rs
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::display::{log_feed, results_table};
use crate::models::{CliApp, Result, ScanStatus, SearchParams};
use crate::scanner::{JitterPacer, ScanSession, Scanner};
use crate::simulator::{BusinessGenerator, FastrandSource};

impl CliApp {
    pub async fn run_scan(&mut self) -> Result<()> {
        println!("\n🔎 New Lead Scan");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let params = self.collect_search_params()?;
        let mut session = ScanSession::new(params);
        let generator = BusinessGenerator::new(Box::new(FastrandSource::new()));
        let pacer = JitterPacer::from_config(&self.config.simulation);
        let mut scanner = Scanner::new(generator, Box::new(pacer));

        println!("\n🖥️  Scanner Output");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        scanner
            .scan(&mut session, &mut |entry| log_feed::print_entry(entry))
            .await?;

        if session.status() != ScanStatus::Idle {
            println!(
                "\n📈 Progress: {}% — {} of {} target leads, {} candidates checked",
                session.progress(),
                session.leads().len(),
                session.params().quantity,
                session.attempts()
            );
            results_table::print_table(session.leads());
        }

        self.session = Some(session);
        Ok(())
    }

    fn collect_search_params(&self) -> Result<SearchParams> {
        let theme = ColorfulTheme::default();
        let defaults = &self.config.defaults;

        // Empty input is allowed here; the session start transition rejects
        // it with the error feed entry.
        let location: String = Input::with_theme(&theme)
            .with_prompt("Target location (e.g. Austin, TX)")
            .allow_empty(true)
            .interact_text()?;

        let quantity: u32 = Input::with_theme(&theme)
            .with_prompt("Lead quantity")
            .default(defaults.quantity)
            .validate_with(|q: &u32| {
                if (1..=100).contains(q) {
                    Ok(())
                } else {
                    Err("quantity must be between 1 and 100")
                }
            })
            .interact_text()?;

        let require_no_website = Confirm::with_theme(&theme)
            .with_prompt("Require \"No Website\" (only businesses without a listed website)?")
            .default(defaults.require_no_website)
            .interact()?;

        let rating_threshold: f64 = Input::with_theme(&theme)
            .with_prompt("Max rating (keep businesses rated below this)")
            .default(defaults.rating_threshold)
            .validate_with(|r: &f64| {
                if (0.0..=5.0).contains(r) {
                    Ok(())
                } else {
                    Err("rating must be between 0 and 5")
                }
            })
            .interact_text()?;

        let min_reviews: u32 = Input::with_theme(&theme)
            .with_prompt("Min reviews")
            .default(defaults.min_reviews)
            .interact_text()?;

        let radius_options = [5u32, 10, 25, 50];
        let radius_labels: Vec<String> = radius_options
            .iter()
            .map(|r| format!("{} Miles", r))
            .collect();
        let default_radius = radius_options
            .iter()
            .position(|r| *r == defaults.max_distance)
            .unwrap_or(0);
        let selection = Select::with_theme(&theme)
            .with_prompt("Search radius")
            .default(default_radius)
            .items(&radius_labels)
            .interact()?;

        Ok(SearchParams {
            location,
            quantity,
            min_reviews,
            max_distance: radius_options[selection],
            rating_threshold,
            require_no_website,
        })
    }
}
