//! Error types for the contacts assistant
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for contact operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the contacts assistant
///
/// Every variant is recoverable: the assistant renders the message and
/// keeps reading commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed field value (name, phone or birthday)
    #[error("{0}")]
    Validation(String),

    /// Contact or phone not found
    #[error("{0}")]
    NotFound(String),

    /// Wrong number of command arguments
    #[error("Invalid arguments. Usage: {0}")]
    InvalidArguments(String),

    /// No handler registered for the command
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid arguments error carrying the command usage
    pub fn invalid_arguments(usage: impl Into<String>) -> Self {
        Self::InvalidArguments(usage.into())
    }

    /// Create an unknown command error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand(command.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Contact lookup failed
    pub(crate) fn contact_not_found() -> Self {
        Self::not_found("Contact not found.")
    }

    /// Phone lookup within a contact failed
    pub(crate) fn phone_not_found() -> Self {
        Self::not_found("Phone not found.")
    }
}
