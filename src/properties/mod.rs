//! Java-style `.properties` documents
//!
//! - [`store`] - the ordered key/value map
//! - [`reader`] - parsing and unescaping
//! - [`writer`] - escaping and serialization

pub mod reader;
pub mod store;
pub mod writer;

pub use reader::{decode, load, load_str, parse};
pub use store::PropertyStore;
pub use writer::{escape, write_comments};
