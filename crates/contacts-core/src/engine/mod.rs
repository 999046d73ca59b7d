//! Assistant session
//!
//! The Assistant is responsible for:
//! - Owning the single contact store of the session
//! - Splitting a line of input into a command and its arguments
//! - Dispatching the command through the registry
//! - Rendering every error as reply text
//!
//! ## Flow
//!
//! ```text
//!  input line ──► Assistant::handle_line ──► CommandRegistry::dispatch
//!                        │                            │
//!                        │                            ▼
//!                        │                   CommandHandler (+ ContactStore)
//!                        ▼                            │
//!                      Reply ◄──── Ok(text) / Err(e) ─┘
//! ```
//!
//! No error ends the session; only `exit` and `close` do.

use tracing::{debug, info, warn};

use crate::config::AssistantConfig;
use crate::error::Result;
use crate::registry::CommandRegistry;
use crate::store::ContactStore;
use crate::traits::{Clock, CommandContext};

/// Commands that end the session
pub const EXIT_COMMANDS: [&str; 2] = ["close", "exit"];

/// What the front end should do with a line's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Output(String),
    /// Print the farewell and stop
    Exit(String),
    /// Nothing to print (blank input)
    Empty,
}

/// Interactive assistant session
pub struct Assistant {
    book: ContactStore,
    registry: CommandRegistry,
    clock: Box<dyn Clock>,
    config: AssistantConfig,
}

impl Assistant {
    /// Create a session with the built-in commands
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: AssistantConfig, clock: Box<dyn Clock>) -> Result<Self> {
        Self::with_registry(config, clock, CommandRegistry::with_builtins())
    }

    /// Create a session with a custom command registry
    pub fn with_registry(
        config: AssistantConfig,
        clock: Box<dyn Clock>,
        registry: CommandRegistry,
    ) -> Result<Self> {
        config.validate()?;

        info!(
            commands = registry.names().len(),
            window_days = config.birthdays.window_days,
            shift_weekends = config.birthdays.shift_weekends,
            "Assistant session started"
        );

        Ok(Self {
            book: ContactStore::new(),
            registry,
            clock,
            config,
        })
    }

    /// Greeting shown when the session starts
    pub fn greeting(&self) -> &'static str {
        "Welcome to the assistant bot!"
    }

    /// Farewell shown when the session ends
    pub fn farewell(&self) -> &'static str {
        "Good bye!"
    }

    /// Read-only view of the session's contacts
    pub fn book(&self) -> &ContactStore {
        &self.book
    }

    /// Handle one line of user input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((command, args)) = parse_input(line) else {
            return Reply::Empty;
        };

        if EXIT_COMMANDS.contains(&command.as_str()) {
            info!(%command, "Assistant session closed");
            return Reply::Exit(self.farewell().to_string());
        }

        match self.execute(&command, &args) {
            Ok(text) => Reply::Output(text),
            Err(e) => {
                warn!(%command, error = %e, "Command failed");
                Reply::Output(e.to_string())
            }
        }
    }

    /// Run a single command against the store
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        debug!(command, args = args.len(), "Dispatching command");

        let mut ctx = CommandContext {
            book: &mut self.book,
            today: self.clock.today(),
            window: self.config.birthdays.window(),
        };
        self.registry.dispatch(command, args, &mut ctx)
    }
}

/// Split a line into a lowercase command and its arguments
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}
