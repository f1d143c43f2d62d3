// src/simulator/generator.rs
use regex::Regex;
use url::Url;
use uuid::Uuid;

use crate::models::BusinessLead;
use crate::simulator::random::RandomSource;
use crate::simulator::vocab::{BUSINESS_PREFIXES, BUSINESS_TYPES, STREET_NAMES};

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Produces one fully-populated synthetic business per call.
///
/// Distributions are tuned so a scan feels like a real market: 60% of
/// candidates have a website, ratings cluster in 3.0-5.0 with an occasional
/// low outlier, review counts run 1-150.
pub struct BusinessGenerator {
    rng: Box<dyn RandomSource>,
    sanitize: Regex,
}

impl BusinessGenerator {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng,
            sanitize: Regex::new("[^a-zA-Z]").expect("static sanitize pattern"),
        }
    }

    pub fn generate(&mut self, index: u32, location: &str) -> BusinessLead {
        let category = BUSINESS_TYPES[self.rng.index(BUSINESS_TYPES.len())];
        let prefix = BUSINESS_PREFIXES[self.rng.index(BUSINESS_PREFIXES.len())];
        let street = STREET_NAMES[self.rng.index(STREET_NAMES.len())];
        let street_no = self.rng.range_u32(100, 9100);

        let has_website = self.rng.next_f64() > 0.4;

        let mut rating = 3.0 + self.rng.next_f64() * 2.0;
        // Occasional poor performer
        if self.rng.next_f64() > 0.9 {
            rating = 1.5 + self.rng.next_f64() * 2.0;
        }
        let rating = (rating * 10.0).round() / 10.0;

        let reviews = self.rng.range_u32(1, 151);
        let phone = format!(
            "({}) {}-{}",
            self.rng.range_u32(200, 1000),
            self.rng.range_u32(100, 1000),
            self.rng.range_u32(1000, 10000)
        );
        let postal_code = self.rng.range_u32(10000, 100000).to_string();

        let name = format!("{} {}", prefix, category);
        let sanitized = self.sanitize.replace_all(&name, "").to_lowercase();
        let website = has_website.then(|| format!("https://www.{}.com", sanitized));

        BusinessLead {
            id: format!("biz-{}-{}", index, Uuid::new_v4()),
            maps_url: maps_search_url(&name, location),
            name,
            category: category.to_string(),
            rating,
            reviews,
            phone,
            address: format!("{} {}, {}", street_no, street, location),
            postal_code,
            has_website,
            website,
        }
    }
}

fn maps_search_url(name: &str, location: &str) -> String {
    let mut url = Url::parse(MAPS_SEARCH_BASE).expect("static maps base url");
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("query", &format!("{} {}", name, location));
    url.to_string()
}
