//! Contract Test: Assistant Session
//!
//! Drives the assistant the way the interactive front end does, one line
//! at a time, and checks the replies.
//!
//! Constraints verified:
//! - Replies for every built-in command
//! - Errors are rendered, never fatal
//! - Only exit/close end the session

mod common;

use common::*;
use contacts_core::{CommandContext, CommandRegistry, Reply, Result};

fn output(text: &str) -> Reply {
    Reply::Output(text.to_string())
}

#[test]
fn full_session_transcript() {
    let mut assistant = assistant_on(monday(), false);

    let script = [
        ("hello", output("How can I help you?")),
        ("add Alice 1234567890", output("Contact added.")),
        ("add Alice 0987654321", output("Contact updated.")),
        ("add Bob", output("Contact added.")),
        ("change Alice 1234567890 1111111111", output("Contact updated.")),
        (
            "phone Alice",
            output("Contact name: Alice, phones: 0987654321; 1111111111, birthday: N/A"),
        ),
        ("add-birthday Alice 13.06.1990", output("Birthday added.")),
        ("show-birthday Alice", output("Birthday: 13.06.1990")),
        ("show-birthday Bob", output("Birthday not set.")),
        ("birthdays", output("Alice: 13.06.2024")),
        ("remove-phone Alice 0987654321", output("Phone removed.")),
        ("delete Bob", output("Contact deleted.")),
        (
            "all",
            output("Contact name: Alice, phones: 1111111111, birthday: 13.06.1990"),
        ),
        ("exit", Reply::Exit("Good bye!".to_string())),
    ];

    for (line, expected) in script {
        assert_eq!(assistant.handle_line(line), expected, "line: {line}");
    }
}

#[test]
fn failures_are_reported_and_session_continues() {
    let mut assistant = assistant_on(monday(), false);

    assert_eq!(assistant.handle_line("add Alice 123"), output("Phone number must be 10 digits."));
    assert!(assistant.book().is_empty());

    assert_eq!(assistant.handle_line("add Alice"), output("Contact added."));
    assert_eq!(
        assistant.handle_line("add-birthday Alice 31.04.1990"),
        output("Invalid date format. Use DD.MM.YYYY")
    );
    assert_eq!(assistant.handle_line("delete Bob"), output("Contact not found."));
    assert_eq!(
        assistant.handle_line("change Alice 1234567890"),
        output("Invalid arguments. Usage: change <name> <old phone> <new phone>")
    );
    assert_eq!(assistant.handle_line("fly"), output("Invalid command: fly"));

    assert_eq!(assistant.handle_line("all"), output("Contact name: Alice, phones: , birthday: N/A"));
}

#[test]
fn birthdays_respect_weekend_shift_setting() {
    let mut assistant = assistant_on(monday(), true);

    assistant.handle_line("add Alice");
    assistant.handle_line("add-birthday Alice 16.06.1990");

    assert_eq!(assistant.handle_line("birthdays"), output("Alice: 17.06.2024"));
}

#[test]
fn custom_commands_can_be_registered() {
    fn count(_args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
        Ok(format!("{} contact(s)", ctx.book.len()))
    }

    let mut registry = CommandRegistry::with_builtins();
    registry.register("count", Box::new(count));

    let mut assistant = contacts_core::Assistant::with_registry(
        contacts_core::AssistantConfig::default(),
        Box::new(contacts_core::FixedClock(monday())),
        registry,
    )
    .unwrap();

    assistant.handle_line("add Alice");
    assert_eq!(assistant.handle_line("count"), output("1 contact(s)"));
}
