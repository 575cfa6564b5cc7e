//! Format registry for AST serialization
//!
//! Each format implements the `Formatter` trait and is registered by name with
//! `FormatRegistry`. The CLI resolves `--format` through the registry.

use crate::kif::ast::Node;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Serializes a sequence of top-level nodes to text
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "kif", "treeviz")
    fn name(&self) -> &str;

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize nodes using the named format
    pub fn serialize(&self, nodes: &[Node], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(nodes)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every format, sorted by name
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .filter_map(|name| {
                let description = self.get(&name)?.description().to_string();
                Some((name, description))
            })
            .collect()
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::KifFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
