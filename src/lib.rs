//! props library interface
//!
//! Loads a Java-style `.properties` document, overlays `key=value`
//! assignments given on the command line and writes the merged document.
//!
//! # Module Organization
//!
//! - [`properties`] - Document format (store, parsing, serialization)
//! - [`engine`] - The load/override/write run
//! - [`cli`] - Argument scanning, usage and version text
//! - [`input`] - Input source selection
//! - [`errors`] - Error types (PropsError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic
//!
//! ```
//! use props::config::Config;
//! use props::engine::Props;
//!
//! let config = Config::from_build();
//! let overrides = vec!["port=9090".to_string()];
//! let store = Props::new(&config, &overrides)
//!     .merge("host=localhost\nport=8080\n".as_bytes())
//!     .unwrap();
//! assert_eq!(store.get("port"), Some("9090"));
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod engine;
pub mod errors;
pub mod input;
pub mod logging;
pub mod properties;
pub mod status;
