//! Schema document format for declaring vocabularies in files.
//!
//! A vocabulary can be kept in a JSON document next to the tool that uses
//! it instead of being declared imperatively. Building a registry from a
//! document replays the declarations, so duplicate names inside a document
//! fail the same way the imperative calls do.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArgotError, Result};
use crate::registry::Registry;

/// A declared option in a schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDecl {
    /// Option name, exactly as it appears on the command line
    pub name: String,

    /// Default value for non-required options
    #[serde(default)]
    pub default: Option<String>,

    /// Whether parsing must assign a value
    #[serde(default)]
    pub required: bool,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// A declared flag in a schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagDecl {
    /// Flag name, exactly as it appears on the command line
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// A complete vocabulary declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Declared options
    #[serde(default)]
    pub options: Vec<OptionDecl>,

    /// Declared flags
    #[serde(default)]
    pub flags: Vec<FlagDecl>,
}

impl Schema {
    /// Load a schema document from a JSON file.
    pub fn load(path: &Path) -> Result<Schema> {
        let content = fs::read_to_string(path).map_err(|e| {
            ArgotError::Schema(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ArgotError::Schema(format!("failed to decode {}: {}", path.display(), e))
        })
    }

    /// Build a registry by replaying the declarations.
    pub fn build(&self) -> Result<Registry> {
        let mut registry = Registry::new();

        for option in &self.options {
            registry.declare_option(
                &option.name,
                option.default.as_deref(),
                option.required,
                &option.description,
            )?;
        }

        for flag in &self.flags {
            registry.declare_flag(&flag.name, &flag.description)?;
        }

        Ok(registry)
    }
}
