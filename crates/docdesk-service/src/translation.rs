//! Message key translation.
//!
//! Catalogs use the nested JSON layout of the web client's i18n bundles:
//!
//! ```json
//! { "APP": { "MESSAGES": { "INFO": { "NODE_COPY": {
//!     "SINGULAR": "Copied {{ number }} item",
//!     "PLURAL": "Copied {{ number }} items"
//! } } } } }
//! ```
//!
//! Nested objects are flattened into dotted keys. `{{ number }}` is replaced
//! with the affected node count.

use std::collections::HashMap;

use serde_json::Value;

use docdesk_core::error::AppError;
use docdesk_core::traits::Translator;

/// Passes keys through untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str, _count: usize) -> String {
        key.to_string()
    }
}

/// Translator backed by an in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    /// Parse a nested JSON catalog.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let root: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten_into(&mut entries, String::new(), &root);
        Ok(Self { entries })
    }

    /// Add or replace a single entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, count: usize) -> String {
        match self.entries.get(key) {
            Some(text) => interpolate_number(text, count),
            None => key.to_string(),
        }
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten_into(entries, key, child);
            }
        }
        Value::String(text) => {
            entries.insert(prefix, text.clone());
        }
        // Numbers, arrays and nulls are not messages.
        _ => {}
    }
}

fn interpolate_number(text: &str, count: usize) -> String {
    let count = count.to_string();
    text.replace("{{ number }}", &count)
        .replace("{{number}}", &count)
}
