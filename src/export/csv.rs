// src/export/csv.rs
use chrono::Utc;
use std::io::Write;

use crate::models::{BusinessLead, Result};

pub const CSV_HEADERS: [&str; 8] = [
    "Company Name",
    "Rating",
    "Reviews",
    "Phone",
    "Address",
    "Postal Code",
    "Maps URL",
    "Website Status",
];

pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Pure serialization of the in-memory lead list: header plus one row per
    /// lead. Fields containing commas or quotes are wrapped in double quotes
    /// with embedded quotes doubled.
    pub fn render(&self, leads: &[BusinessLead]) -> String {
        let mut lines = Vec::with_capacity(leads.len() + 1);
        lines.push(CSV_HEADERS.join(","));

        for lead in leads {
            let website_status = lead.website.as_deref().unwrap_or("No Website");
            let row = [
                csv_field(&lead.name),
                csv_field(&lead.rating.to_string()),
                csv_field(&lead.reviews.to_string()),
                csv_field(&lead.phone),
                csv_field(&lead.address),
                csv_field(&lead.postal_code),
                csv_field(&lead.maps_url),
                csv_field(website_status),
            ];
            lines.push(row.join(","));
        }

        lines.join("\n")
    }

    pub async fn export_to_csv(&self, leads: &[BusinessLead], filename: &str) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = std::path::Path::new(filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(filename)?;
        file.write_all(self.render(leads).as_bytes())?;
        writeln!(file)?;

        Ok(())
    }

    pub fn generate_filename(&self, directory: &str) -> String {
        format!(
            "{}/leads_export_{}.csv",
            directory.trim_end_matches('/'),
            Utc::now().format("%Y-%m-%d")
        )
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, website: Option<&str>) -> BusinessLead {
        BusinessLead {
            id: "biz-1-test".to_string(),
            name: name.to_string(),
            category: "Bakery".to_string(),
            rating: 3.4,
            reviews: 27,
            phone: "(512) 555-0134".to_string(),
            address: "4821 Main St, Austin, TX".to_string(),
            postal_code: "73301".to_string(),
            maps_url: "https://www.google.com/maps/search/?api=1&query=Joe%27s+Bakery+Austin%2C+TX"
                .to_string(),
            has_website: website.is_some(),
            website: website.map(|w| w.to_string()),
        }
    }

    /// Splits one CSV line into fields, honoring quoted commas.
    fn split_row(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn render_produces_header_plus_one_line_per_lead() {
        let exporter = CsvExporter::new();
        let leads = vec![lead("Joe's Bakery", None), lead("City Diner", None)];
        let csv = exporter.render(&leads);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("Company Name,Rating,Reviews,Phone,Address,"));
    }

    #[test]
    fn every_row_has_the_header_column_count() {
        let exporter = CsvExporter::new();
        let leads = vec![
            lead("Joe's Bakery", Some("https://www.joesbakery.com")),
            lead("City Diner", None),
        ];
        let csv = exporter.render(&leads);
        let mut lines = csv.lines();
        let header_cols = split_row(lines.next().unwrap()).len();
        assert_eq!(header_cols, CSV_HEADERS.len());
        for line in lines {
            assert_eq!(split_row(line).len(), header_cols, "row: {}", line);
        }
    }

    #[test]
    fn website_column_falls_back_to_no_website() {
        let exporter = CsvExporter::new();
        let csv = exporter.render(&[
            lead("Joe's Bakery", None),
            lead("City Diner", Some("https://www.citydiner.com")),
        ]);
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert!(rows[0].ends_with("No Website"));
        assert!(rows[1].ends_with("https://www.citydiner.com"));
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let exporter = CsvExporter::new();
        let csv = exporter.render(&[lead("\"Best\" Subs, Etc", None)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"\"\"Best\"\" Subs, Etc\""));
        let fields = split_row(row);
        assert_eq!(fields[0], "\"Best\" Subs, Etc");
        assert_eq!(fields[4], "4821 Main St, Austin, TX");
    }

    #[test]
    fn filename_is_dated_under_directory() {
        let exporter = CsvExporter::new();
        let filename = exporter.generate_filename("out");
        assert!(filename.starts_with("out/leads_export_"));
        assert!(filename.ends_with(".csv"));
        // leads_export_YYYY-MM-DD.csv
        let stem = filename
            .strip_prefix("out/leads_export_")
            .and_then(|s| s.strip_suffix(".csv"))
            .unwrap();
        assert_eq!(stem.len(), 10);
    }

    #[test]
    fn empty_lead_list_renders_header_only() {
        let exporter = CsvExporter::new();
        let csv = exporter.render(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
