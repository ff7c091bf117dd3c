//! Build-time configuration handed to the engine

/// props configuration
///
/// There is no configuration file; everything here is fixed when the binary
/// is built and passed explicitly to whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub program_name: String,
    pub version: String,
    /// Write a timestamp comment after the generated header
    pub timestamp: bool,
}

impl Config {
    /// Configuration baked in from Cargo metadata
    pub fn from_build() -> Self {
        Self {
            program_name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: true,
        }
    }

    /// Same configuration without the timestamp line (stable output)
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    /// Header comment written above the properties
    pub fn header(&self, source: &str) -> String {
        format!(
            "Generated by {} v{} from {}",
            self.program_name, self.version, source
        )
    }
}
