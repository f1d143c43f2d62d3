// Fixed vocabularies used to simulate realistic results without an API key.

pub const BUSINESS_TYPES: &[&str] = &[
    "Plumbing",
    "Bakery",
    "Auto Repair",
    "Dentist",
    "Florist",
    "Consulting",
    "Law Firm",
    "Real Estate",
    "HVAC",
    "Diner",
    "Barbershop",
    "Dry Cleaners",
    "Landscaping",
    "Hardware Store",
];

pub const BUSINESS_PREFIXES: &[&str] = &[
    "Joe's",
    "City",
    "Downtown",
    "Elite",
    "Pro",
    "Family",
    "Star",
    "Best",
    "Quick",
    "Local",
    "Main Street",
    "Corner",
    "Golden",
];

pub const STREET_NAMES: &[&str] = &[
    "Main St",
    "Broadway",
    "Park Ave",
    "Oak Ln",
    "Maple Dr",
    "Cedar Blvd",
    "Washington St",
    "Highland Ave",
    "Elm St",
];
