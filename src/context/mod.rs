//! Process execution context

mod environment;

pub use environment::Environment;
