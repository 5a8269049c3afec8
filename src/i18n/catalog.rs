use super::Translate;
use crate::core::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Flat key → message table loaded from a locale file.
///
/// Locale files are nested JSON or TOML objects; nesting is flattened into
/// dotted keys. Unknown keys translate to the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let value: Value = toml::from_str(contents)?;
        Self::from_value(value)
    }

    /// Load a catalog, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read message catalog", path, e))?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("json") | None => Self::from_json_str(&contents)?,
            Some(other) => {
                return Err(Error::Unsupported(format!(
                    "message catalog extension '.{}' (expected .json or .toml)",
                    other
                )))
            }
        };

        log::debug!(
            "Loaded {} messages from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn from_value(value: Value) -> Result<Self> {
        let Value::Object(_) = value else {
            return Err(Error::Configuration(
                "message catalog root must be an object".to_string(),
            ));
        };

        let mut catalog = Self::new();
        flatten_into(&mut catalog.messages, String::new(), value);
        Ok(catalog)
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(out, path, child);
            }
        }
        Value::String(text) => {
            out.insert(prefix, text);
        }
        Value::Null => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}

impl Translate for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
