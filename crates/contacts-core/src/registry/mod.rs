//! Command registry
//!
//! The registry maps command names to handlers, so the assistant dispatches
//! through a lookup instead of a hardcoded match.
//!
//! ## Usage
//!
//! ```rust
//! use contacts_core::registry::CommandRegistry;
//! use contacts_core::traits::CommandContext;
//! use contacts_core::Result;
//!
//! fn count(_args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
//!     Ok(ctx.book.len().to_string())
//! }
//!
//! let mut registry = CommandRegistry::with_builtins();
//! registry.register("count", Box::new(count));
//! assert!(registry.contains("count"));
//! assert!(registry.contains("add"));
//! ```
//!
//! Names are stored lowercase and looked up case-insensitively.

use std::collections::BTreeMap;

use tracing::debug;

use crate::commands;
use crate::error::{Error, Result};
use crate::traits::{CommandContext, CommandHandler};

/// Registry of command handlers
#[derive(Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in command registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        commands::register(&mut registry);
        registry
    }

    /// Register a handler under `name`
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        let name = name.into().to_lowercase();
        debug!(command = %name, "Registering command");
        self.handlers.insert(name, handler);
    }

    /// Check whether a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_lowercase())
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// Run the handler registered under `name`
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The handler's reply
    /// - `Err(Error::UnknownCommand)`: If nothing is registered under `name`
    /// - `Err(Error)`: Whatever the handler failed with
    pub fn dispatch(&self, name: &str, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
        let handler = self
            .handlers
            .get(&name.to_lowercase())
            .ok_or_else(|| Error::unknown_command(name))?;
        handler.handle(args, ctx)
    }
}
