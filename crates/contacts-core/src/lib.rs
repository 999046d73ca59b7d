// # contacts-core
//
// Core library for the contacts assistant.
//
// ## Architecture Overview
//
// - **Record**: One contact with validated name, phones and birthday
// - **ContactStore**: In-memory collection of records keyed by name
// - **birthdays**: Upcoming birthday window (leap days, weekend shift, year wrap)
// - **CommandRegistry**: Name-to-handler map for assistant commands
// - **Assistant**: Session that turns a line of input into a reply
//
// ## Design Principles
//
// 1. **Validated Values**: Fields can only be constructed through `parse`
// 2. **No Partial Updates**: Operations validate before they mutate
// 3. **Library-First**: The binary only reads input and prints replies
// 4. **Explicit Errors**: Every failure is a typed `Error`, rendered in one place

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod registry;
pub mod store;
pub mod traits;

// Re-export core types for convenience
pub use birthdays::{BirthdayWindow, UpcomingBirthday};
pub use config::{AssistantConfig, BirthdayConfig};
pub use engine::{Assistant, Reply};
pub use error::{Error, Result};
pub use record::{Birthday, Name, Phone, Record};
pub use registry::CommandRegistry;
pub use store::{ContactListing, ContactStore, Outcome};
pub use traits::{Clock, CommandContext, CommandHandler, FixedClock, SystemClock};
