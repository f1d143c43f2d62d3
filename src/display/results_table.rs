use crate::models::BusinessLead;

/// Renders the qualified-lead table. Read-only view over the session state.
pub fn print_table(leads: &[BusinessLead]) {
    if leads.is_empty() {
        println!("\n📭 No qualified leads found yet.");
        println!("💡 Start a scan to begin populating this table.");
        return;
    }

    println!("\n📋 Qualified Leads");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🏢 {} businesses found matching criteria\n", leads.len());

    for (i, lead) in leads.iter().enumerate() {
        let website_status = lead
            .website
            .as_deref()
            .map(|w| format!("🌐 {}", w))
            .unwrap_or_else(|| "🚫 No Website".to_string());

        println!("{:>3}. {} — {}", i + 1, lead.name, lead.category);
        println!(
            "     ⭐ {} ({} reviews) | {} | {}",
            lead.rating, lead.reviews, lead.phone, website_status
        );
        println!("     📍 {} ({})", lead.address, lead.postal_code);
        println!("     🗺️  {}", lead.maps_url);
    }
}
