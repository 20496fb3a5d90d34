// Re-export modules for testing
pub mod cli;
pub mod error;
pub mod launcher;
