// # contacts-bot - Interactive Contacts Assistant
//
// This binary is a THIN front end only:
// - DO NOT add contact logic, validation or reply wording here
// - All assistant behavior lives in contacts-core
// - Configuration is via environment variables ONLY
//
// The contacts-bot binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Reading commands from stdin and printing the assistant's replies
//
// ## Configuration
//
// - `CONTACTS_LOG_LEVEL`: Log level (trace, debug, info, warn, error). Logs go to stderr.
// - `CONTACTS_BIRTHDAY_WINDOW_DAYS`: Days covered by `birthdays` (1-365, default 7)
// - `CONTACTS_SHIFT_WEEKENDS`: Report weekend birthdays on Monday (true/false)
// - `CONTACTS_PROMPT`: Input prompt
//
// ## Example
//
// ```bash
// export CONTACTS_BIRTHDAY_WINDOW_DAYS=14
// export CONTACTS_SHIFT_WEEKENDS=true
//
// contacts-bot
// ```

use anyhow::{Context, Result};
use contacts_core::{Assistant, AssistantConfig, BirthdayConfig, Reply, SystemClock};
use std::env;
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum BotExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<BotExitCode> for ExitCode {
    fn from(code: BotExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
#[derive(Debug)]
struct Config {
    log_level: String,
    window_days: u32,
    shift_weekends: bool,
    prompt: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let window_days = match lookup("CONTACTS_BIRTHDAY_WINDOW_DAYS") {
            Some(raw) => raw.trim().parse::<u32>().with_context(|| {
                format!("CONTACTS_BIRTHDAY_WINDOW_DAYS must be a whole number. Got: {}", raw)
            })?,
            None => BirthdayConfig::default().window_days,
        };

        let shift_weekends = match lookup("CONTACTS_SHIFT_WEEKENDS") {
            Some(raw) => parse_flag(&raw).with_context(|| {
                format!(
                    "CONTACTS_SHIFT_WEEKENDS must be true/false, yes/no or 1/0. Got: {}",
                    raw
                )
            })?,
            None => false,
        };

        Ok(Self {
            log_level: lookup("CONTACTS_LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            window_days,
            shift_weekends,
            prompt: lookup("CONTACTS_PROMPT").unwrap_or_else(|| "Enter a command: ".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.assistant_config()
            .validate()
            .context("CONTACTS_BIRTHDAY_WINDOW_DAYS is out of range")?;

        // Validate log level
        self.level()?;

        Ok(())
    }

    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "CONTACTS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }

    fn assistant_config(&self) -> AssistantConfig {
        AssistantConfig::new().with_birthdays(BirthdayConfig {
            window_days: self.window_days,
            shift_weekends: self.shift_weekends,
        })
    }
}

/// Parse a boolean environment flag
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return BotExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return BotExitCode::ConfigError.into();
    }

    // Initialize tracing; stdout belongs to the conversation
    let log_level = config.level().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return BotExitCode::ConfigError.into();
    }

    info!("Starting contacts-bot");

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return BotExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_session(config).await {
            error!("Session error: {:#}", e);
            BotExitCode::RuntimeError
        } else {
            BotExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Run the interactive session until exit, end of input or Ctrl-C
async fn run_session(config: Config) -> Result<()> {
    let mut assistant = Assistant::new(config.assistant_config(), Box::new(SystemClock))?;
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

    println!("{}", assistant.greeting());

    loop {
        print!("{}", config.prompt);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let line = tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                interrupted(signal)?;
                info!("Received Ctrl-C");
                println!();
                println!("{}", assistant.farewell());
                return Ok(());
            }
            line = lines.next() => line,
        };

        let Some(line) = line else {
            info!("Input closed");
            println!();
            return Ok(());
        };
        let line = line.context("Failed to read from stdin")?;

        match assistant.handle_line(&line) {
            Reply::Output(text) => println!("{}", text),
            Reply::Exit(text) => {
                println!("{}", text);
                return Ok(());
            }
            Reply::Empty => {}
        }
    }
}

/// Check the result of waiting for Ctrl-C
///
/// A failure to install the handler ends the session as a runtime error
/// rather than as a clean interrupt.
fn interrupted(signal: std::io::Result<()>) -> Result<()> {
    signal.map_err(|e| anyhow::anyhow!("Failed to setup Ctrl-C handler: {}", e))
}
