// # Command Handler Trait
//
// Defines the interface for a single assistant command.
//
// ## Contract
//
// A handler receives the whitespace-separated arguments that followed the
// command name and a `CommandContext` giving it exclusive access to the
// contact store for the duration of the call. It returns the reply text or
// an error; the assistant renders errors, handlers never print.
//
// Plain functions with the matching signature are handlers:
//
// ```rust
// use contacts_core::traits::CommandContext;
// use contacts_core::Result;
//
// fn count(_args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
//     Ok(format!("{} contact(s)", ctx.book.len()))
// }
// ```

use chrono::NaiveDate;

use crate::birthdays::BirthdayWindow;
use crate::error::Result;
use crate::store::ContactStore;

/// Everything a handler may touch while it runs
pub struct CommandContext<'a> {
    /// The session's contact store
    pub book: &'a mut ContactStore,
    /// Reference date for birthday reminders
    pub today: NaiveDate,
    /// Configured birthday window
    pub window: BirthdayWindow,
}

/// Trait for command handlers
pub trait CommandHandler: Send + Sync {
    /// Run the command
    fn handle(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String>;
}

impl<F> CommandHandler for F
where
    F: Fn(&[&str], &mut CommandContext<'_>) -> Result<String> + Send + Sync,
{
    fn handle(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
        self(args, ctx)
    }
}
