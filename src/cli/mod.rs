//! CLI argument parsing and usage text

pub mod args;
pub mod usage;

// Re-exports
pub use args::{parse_args, Args, Invocation};
pub use usage::{usage_text, version_text};
