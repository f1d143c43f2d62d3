pub mod generator;
pub mod random;
pub mod vocab;

// Re-export the main types for easy importing
pub use generator::BusinessGenerator;
pub use random::{FastrandSource, RandomSource, ReplaySource};
