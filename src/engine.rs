//! The merge run: load input, overlay overrides, write the result

use std::io::{Read, Write};

use tracing::debug;

use crate::config::Config;
use crate::errors::Result;
use crate::input::Input;
use crate::properties::{self, writer, PropertyStore};

/// Join overrides into a properties document, one per line
pub fn overrides_document(overrides: &[String]) -> String {
    let mut doc = String::with_capacity(overrides.iter().map(|o| o.len() + 1).sum());
    for assignment in overrides {
        doc.push_str(assignment);
        doc.push('\n');
    }
    doc
}

/// One props invocation
#[derive(Debug)]
pub struct Props<'a> {
    config: &'a Config,
    overrides: &'a [String],
}

impl<'a> Props<'a> {
    pub fn new(config: &'a Config, overrides: &'a [String]) -> Self {
        Self { config, overrides }
    }

    /// Load `input` into a fresh store, then apply the overrides on top
    pub fn merge<R: Read>(&self, input: R) -> Result<PropertyStore> {
        let mut store = PropertyStore::new();

        let loaded = properties::load(&mut store, input)?;
        if store.is_empty() {
            debug!("input has no properties");
        } else {
            debug!(entries = loaded, keys = store.len(), "input loaded");
        }

        let applied = properties::load_str(&mut store, &overrides_document(self.overrides))?;
        debug!(overrides = applied, keys = store.len(), "overrides applied");

        Ok(store)
    }

    /// Write `store` with the generated header
    pub fn write<W: Write>(&self, store: &PropertyStore, source: &str, output: &mut W) -> Result<()> {
        let header = self.config.header(source);
        let timestamp = self.config.timestamp.then(writer::timestamp);
        writer::store(store, output, Some(&header), timestamp.as_deref())?;
        output.flush()?;
        Ok(())
    }

    /// Merge `input` with the overrides and write the result to `output`
    pub fn run<W: Write>(&self, input: Input, output: &mut W) -> Result<()> {
        let Input { label, reader } = input;
        let store = self.merge(reader)?;
        self.write(&store, &label, output)
    }
}
