//! Built-in assistant commands
//!
//! Each command is a plain function registered with the
//! [`CommandRegistry`](crate::registry::CommandRegistry). Commands check
//! their argument count, call into the contact store and turn the outcome
//! into reply text. Store errors are propagated unchanged.

use crate::error::{Error, Result};
use crate::registry::CommandRegistry;
use crate::store::ContactListing;
use crate::traits::CommandContext;

/// Register every built-in command
pub fn register(registry: &mut CommandRegistry) {
    registry.register("hello", Box::new(hello));
    registry.register("add", Box::new(add_contact));
    registry.register("change", Box::new(change_contact));
    registry.register("phone", Box::new(show_phone));
    registry.register("remove-phone", Box::new(remove_phone));
    registry.register("delete", Box::new(delete_contact));
    registry.register("add-birthday", Box::new(add_birthday));
    registry.register("show-birthday", Box::new(show_birthday));
    registry.register("birthdays", Box::new(upcoming_birthdays));
    registry.register("all", Box::new(list_all));
}

/// Check that `args` has between `min` and `max` entries
fn arity(args: &[&str], min: usize, max: usize, usage: &str) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(Error::invalid_arguments(usage))
    }
}

fn hello(args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 0, 0, "hello")?;
    Ok("How can I help you?".to_string())
}

fn add_contact(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 1, 2, "add <name> [phone]")?;
    let outcome = ctx.book.add_or_update(args[0], args.get(1).copied())?;
    Ok(outcome.message().to_string())
}

fn change_contact(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 3, 3, "change <name> <old phone> <new phone>")?;
    ctx.book.change_phone(args[0], args[1], args[2])?;
    Ok("Contact updated.".to_string())
}

fn show_phone(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 1, 1, "phone <name>")?;
    ctx.book
        .find(args[0])
        .map(|record| record.to_string())
        .ok_or_else(Error::contact_not_found)
}

fn remove_phone(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 2, 2, "remove-phone <name> <phone>")?;
    ctx.book.remove_phone(args[0], args[1])?;
    Ok("Phone removed.".to_string())
}

fn delete_contact(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 1, 1, "delete <name>")?;
    ctx.book.delete(args[0])?;
    Ok("Contact deleted.".to_string())
}

fn add_birthday(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 2, 2, "add-birthday <name> <DD.MM.YYYY>")?;
    ctx.book.set_birthday(args[0], args[1])?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 1, 1, "show-birthday <name>")?;
    Ok(match ctx.book.get_birthday(args[0])? {
        Some(birthday) => format!("Birthday: {}", birthday),
        None => "Birthday not set.".to_string(),
    })
}

fn upcoming_birthdays(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 0, 0, "birthdays")?;
    let upcoming = ctx.book.upcoming_birthdays(ctx.today, ctx.window);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn list_all(args: &[&str], ctx: &mut CommandContext<'_>) -> Result<String> {
    arity(args, 0, 0, "all")?;
    Ok(match ctx.book.list_all() {
        ContactListing::Empty => "No contacts found.".to_string(),
        ContactListing::Contacts(lines) => lines.join("\n"),
    })
}
