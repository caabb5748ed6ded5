//! Core types and functionality for the argot argument parser.
//!
//! This crate provides the building blocks for declarative command line
//! vocabularies: a registry of declared options and flags, a linear-scan
//! parser that classifies raw tokens against the registry, and a schema
//! document format for declaring vocabularies in files.

mod error;
mod parser;
mod registry;
mod schema;

// Re-export core types
pub use error::{ArgotError, Result};
pub use parser::parse;
pub use registry::{Flag, OptionSpec, Registry};
pub use schema::{FlagDecl, OptionDecl, Schema};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
