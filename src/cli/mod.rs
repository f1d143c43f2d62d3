pub mod cli;
pub mod run;
pub mod run_export;
pub mod run_scan;
pub mod show_results;

// Re-export the main types for convenience
pub use cli::MenuAction;
