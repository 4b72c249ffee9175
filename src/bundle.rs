//! Embedded English resource bundle.
//!
//! Message strings live in `locales/en/messages.json` in the browser
//! extension resource format (`{"key": {"message": "..."}}`) and are
//! embedded at compile time, so the binary needs no resource files at
//! runtime. Translated bundles ship with the host application; this crate
//! only carries English as the reference bundle for its own tooling.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::translate::Translate;

const EN_MESSAGES: &str = include_str!("../locales/en/messages.json");

/// One message entry in resource-format JSON. Entries may carry a
/// translator-facing `description` field, which is ignored here.
#[derive(Debug, Clone, Deserialize)]
struct Message {
    message: String,
}

/// Immutable key-to-string resource bundle.
#[derive(Debug, Clone)]
pub struct Bundle {
    strings: HashMap<String, String>,
}

impl Bundle {
    /// Load the embedded English bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded resource file is not valid JSON in
    /// the expected format.
    pub fn english() -> Result<Self> {
        Self::from_json(EN_MESSAGES).context("Failed to parse embedded English messages")
    }

    /// Parse a bundle from resource-format JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a map of keys to message objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Message> =
            serde_json::from_str(json).context("Invalid resource bundle JSON")?;
        let strings = raw
            .into_iter()
            .map(|(key, entry)| (key, entry.message))
            .collect();
        Ok(Self { strings })
    }

    /// Look up a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of messages in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the bundle holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Translate for Bundle {
    // Missing keys echo back as themselves, the conventional resource-bundle
    // fallback.
    fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
