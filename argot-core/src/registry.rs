//! Vocabulary registry for the argot system.
//!
//! The registry holds a declared argument vocabulary: named options
//! (key-value pairs) and named flags (boolean switches) sharing a single
//! namespace, plus the free-form data tokens collected while parsing.
//! Declarations happen before parsing, assignments happen during it, and
//! the application reads the result afterward.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Value, json};

use crate::error::{ArgotError, Result};

/// A named, string-valued argument with an optional default.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Option name, exactly as it appears on the command line
    name: String,

    /// Current value. Holds the default until parsing assigns one, and
    /// stays absent for required options that were never assigned.
    value: Option<String>,

    /// Whether parsing must assign a value
    required: bool,

    /// Human-readable description
    description: String,

    /// Write-once latch, tripped by the first assignment
    is_set: bool,
}

impl OptionSpec {
    fn new(name: &str, default: Option<&str>, required: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            value: if required {
                None
            } else {
                default.map(str::to_string)
            },
            required,
            description: description.to_string(),
            is_set: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value: assigned, defaulted, or absent.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True once parsing has explicitly assigned a value. A non-required
    /// option can hold its default while still reporting false here.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Assign the value and trip the latch. Fails without touching the
    /// stored value if the latch is already tripped.
    fn set_value(&mut self, value: &str) -> Result<()> {
        if self.is_set {
            return Err(ArgotError::AlreadySet(self.name.clone()));
        }
        self.value = Some(value.to_string());
        self.is_set = true;
        Ok(())
    }
}

/// A named boolean switch, absent by default.
#[derive(Debug, Clone)]
pub struct Flag {
    /// Flag name, exactly as it appears on the command line
    name: String,

    /// Human-readable description
    description: String,

    /// Whether the flag was seen during parsing
    is_set: bool,
}

impl Flag {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            is_set: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    // Idempotent: seeing the flag again changes nothing.
    fn set(&mut self) {
        self.is_set = true;
    }
}

/// A single entry in the shared namespace. Storing both kinds behind one
/// name key makes cross-kind collisions unrepresentable.
#[derive(Debug, Clone)]
enum Entry {
    Option(OptionSpec),
    Flag(Flag),
}

/// Registry of declared options and flags plus collected data tokens.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Shared name to entry mapping
    entries: HashMap<String, Entry>,

    /// Free-form tokens in encounter order, duplicates allowed
    data: Vec<String>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option.
    ///
    /// For required options the default is ignored and the initial value
    /// is absent; otherwise the initial value is the default (which may
    /// itself be absent) and the option still reports unset.
    pub fn declare_option(
        &mut self,
        name: &str,
        default: Option<&str>,
        required: bool,
        description: &str,
    ) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(ArgotError::NameCollision(name.to_string()));
        }
        self.entries.insert(
            name.to_string(),
            Entry::Option(OptionSpec::new(name, default, required, description)),
        );
        Ok(())
    }

    /// Declare a flag. Shares one namespace with options.
    pub fn declare_flag(&mut self, name: &str, description: &str) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(ArgotError::NameCollision(name.to_string()));
        }
        self.entries
            .insert(name.to_string(), Entry::Flag(Flag::new(name, description)));
        Ok(())
    }

    /// Check if an option with the given name is declared
    pub fn option_exists(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Entry::Option(_)))
    }

    /// Check if a flag with the given name is declared
    pub fn flag_exists(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Entry::Flag(_)))
    }

    /// Assign a value to a declared option through its write-once latch.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match self.entries.get_mut(name) {
            Some(Entry::Option(option)) => option.set_value(value),
            _ => Err(ArgotError::NotFound(name.to_string())),
        }
    }

    /// Mark a declared flag as set. Idempotent.
    pub fn set_flag(&mut self, name: &str) -> Result<()> {
        match self.entries.get_mut(name) {
            Some(Entry::Flag(flag)) => {
                flag.set();
                Ok(())
            }
            _ => Err(ArgotError::NotFound(name.to_string())),
        }
    }

    /// Get the current value of a declared option (assigned, defaulted, or
    /// absent for required options that were never assigned).
    pub fn option_value(&self, name: &str) -> Result<Option<&str>> {
        match self.entries.get(name) {
            Some(Entry::Option(option)) => Ok(option.value()),
            _ => Err(ArgotError::NotFound(name.to_string())),
        }
    }

    /// Get the state of a declared flag
    pub fn flag_state(&self, name: &str) -> Result<bool> {
        match self.entries.get(name) {
            Some(Entry::Flag(flag)) => Ok(flag.is_set()),
            _ => Err(ArgotError::NotFound(name.to_string())),
        }
    }

    /// Append a free-form data token
    pub fn append_data(&mut self, token: &str) {
        self.data.push(token.to_string());
    }

    /// The collected data tokens in encounter order
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Declared options, sorted by name for consistent ordering
    pub fn options(&self) -> Vec<&OptionSpec> {
        let mut options: Vec<_> = self
            .entries
            .values()
            .filter_map(|entry| match entry {
                Entry::Option(option) => Some(option),
                Entry::Flag(_) => None,
            })
            .collect();
        options.sort_by(|a, b| a.name().cmp(b.name()));
        options
    }

    /// Declared flags, sorted by name for consistent ordering
    pub fn flags(&self) -> Vec<&Flag> {
        let mut flags: Vec<_> = self
            .entries
            .values()
            .filter_map(|entry| match entry {
                Entry::Flag(flag) => Some(flag),
                Entry::Option(_) => None,
            })
            .collect();
        flags.sort_by(|a, b| a.name().cmp(b.name()));
        flags
    }

    /// Check that every required option was assigned during parsing.
    ///
    /// Reports the complete list of missing names, not just the first. A
    /// registry with no declared options always passes.
    pub fn validate_required(&self) -> Result<()> {
        let mut missing: Vec<String> = self
            .options()
            .into_iter()
            .filter(|option| option.required() && !option.is_set())
            .map(|option| option.name().to_string())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        Err(ArgotError::MissingRequired(missing))
    }

    /// Resolved configuration as a JSON object.
    ///
    /// Options carry their current value (null when a required option was
    /// never assigned), flags their state, data tokens their encounter
    /// order.
    pub fn snapshot(&self) -> Value {
        let mut options = serde_json::Map::new();
        for option in self.options() {
            let value = match option.value() {
                Some(value) => json!(value),
                None => Value::Null,
            };
            options.insert(option.name().to_string(), value);
        }

        let mut flags = serde_json::Map::new();
        for flag in self.flags() {
            flags.insert(flag.name().to_string(), json!(flag.is_set()));
        }

        json!({
            "options": options,
            "flags": flags,
            "data": self.data,
        })
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in self.options() {
            match option.value() {
                Some(value) => writeln!(f, "option {} = {}", option.name(), value)?,
                None => writeln!(f, "option {} (unset)", option.name())?,
            }
        }
        for flag in self.flags() {
            writeln!(f, "flag {} = {}", flag.name(), flag.is_set())?;
        }
        for token in &self.data {
            writeln!(f, "data {}", token)?;
        }
        Ok(())
    }
}
