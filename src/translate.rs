//! Translation of human-facing strings supplied by the host.
//!
//! The formatter only needs a single lookup, so the seam is one trait with an
//! identity implementation and a flat message table read from TOML.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Maps a source string to its locale-appropriate form.
pub trait Translator: Send + Sync {
    fn translate(&self, source: &str) -> String;
}

/// Returns every string unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, source: &str) -> String {
        source.to_string()
    }
}

/// Source-string to translation map. Untranslated strings pass through.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: HashMap<String, String>,
}

impl MessageTable {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MessageTable {
    fn translate(&self, source: &str) -> String {
        self.messages
            .get(source)
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}

/// Load a message table from a flat TOML file:
///
/// ```toml
/// "by" = "przez"
/// "under" = "na licencji"
/// "Font" = "Czcionka"
/// ```
pub fn load_messages(path: &Path) -> Result<MessageTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read messages {}", path.display()))?;
    let messages: HashMap<String, String> = toml::from_str(&content)
        .with_context(|| format!("failed to parse messages {}", path.display()))?;
    debug!(path = %path.display(), count = messages.len(), "messages loaded");
    Ok(MessageTable::new(messages))
}
