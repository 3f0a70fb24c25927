//! Command line interface for talentrank.

pub mod args;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
