//! Core traits for the contacts assistant
//!
//! This module defines the abstract interfaces the assistant depends on.
//!
//! - [`Clock`]: Source of today's date for birthday reminders
//! - [`CommandHandler`]: A single command the assistant can dispatch to

pub mod clock;
pub mod command_handler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command_handler::{CommandContext, CommandHandler};
