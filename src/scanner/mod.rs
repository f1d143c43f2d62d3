pub mod engine;
pub mod pacer;
pub mod session;

// Re-export the main types for easy importing
pub use engine::Scanner;
pub use pacer::{JitterPacer, NoopPacer, Pacer};
pub use session::{AttemptOutcome, ScanSession, MAX_ATTEMPT_FACTOR};
