pub mod csv;

// Re-export the main types for easy importing
pub use csv::{CsvExporter, CSV_HEADERS};
