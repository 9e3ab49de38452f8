use crate::models::FortuneData;
use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

const CATALOG_FILE: &str = "fortunes.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a message store needs at least one message")]
    Empty,
    #[error("message index {index} is out of range (store holds {count})")]
    OutOfRange { index: usize, count: usize },
}

/// Fixed, read-only catalog of fortunes. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Vec<String>,
}

impl MessageStore {
    pub fn new(messages: Vec<String>) -> Result<Self, StoreError> {
        if messages.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(Self { messages })
    }

    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(CATALOG_FILE).context(format!(
            "Could not find embedded fortune catalog: {}",
            CATALOG_FILE
        ))?;
        let raw = std::str::from_utf8(file.data.as_ref())?;
        let data: FortuneData = serde_json::from_str(raw)
            .context(format!("Malformed fortune catalog: {}", CATALOG_FILE))?;

        tracing::debug!(catalog = %data.name, count = data.fortunes.len(), "loaded fortune catalog");
        Ok(Self::new(data.fortunes)?)
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, index: usize) -> Result<&str, StoreError> {
        self.messages
            .get(index)
            .map(String::as_str)
            .ok_or(StoreError::OutOfRange {
                index,
                count: self.count(),
            })
    }
}
