//! Command table and line dispatch.
//!
//! A line is split on whitespace. The first word picks the command: an exact name or
//! alias wins, otherwise a prefix that matches exactly one command (`sea` → `search`).
//! Every handler has the same shape, `fn(&mut ContactzApi<S>, &[&str]) -> Result<Outcome>`,
//! so the table is plain data and the API is passed in explicitly.

use contactz::api::{CmdMessage, CmdResult, ContactzApi};
use contactz::commands::upcoming::DEFAULT_WINDOW_DAYS;
use contactz::error::{ContactzError, Result};
use contactz::field::Birthday;
use contactz::store::DataStore;
use tracing::{info, warn};

/// What the loop should do after a command.
pub enum Outcome {
    Continue(CmdResult),
    Exit(CmdResult),
}

impl Outcome {
    pub fn result(&self) -> &CmdResult {
        match self {
            Outcome::Continue(result) | Outcome::Exit(result) => result,
        }
    }
}

type Handler<S> = fn(&mut ContactzApi<S>, &[&str]) -> Result<Outcome>;

pub struct Command<S: DataStore> {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub about: &'static str,
    handler: Handler<S>,
}

pub fn table<S: DataStore>() -> Vec<Command<S>> {
    vec![
        Command {
            name: "hello",
            aliases: &["hi"],
            usage: "hello",
            about: "Say hello",
            handler: hello::<S>,
        },
        Command {
            name: "add",
            aliases: &[],
            usage: "add <name> [phone] [birthday]",
            about: "Add a contact, or a phone/birthday to an existing one",
            handler: add::<S>,
        },
        Command {
            name: "add_phone",
            aliases: &[],
            usage: "add_phone <name> <phone>",
            about: "Add a phone to a contact",
            handler: add_phone::<S>,
        },
        Command {
            name: "remove_phone",
            aliases: &[],
            usage: "remove_phone <name> <phone>",
            about: "Remove a phone from a contact",
            handler: remove_phone::<S>,
        },
        Command {
            name: "edit_phone",
            aliases: &["change"],
            usage: "edit_phone <name> <old phone> <new phone>",
            about: "Replace one of a contact's phones",
            handler: edit_phone::<S>,
        },
        Command {
            name: "birthday",
            aliases: &[],
            usage: "birthday <name> <DD.MM.YYYY | YYYY-MM-DD>",
            about: "Set a contact's birthday",
            handler: birthday::<S>,
        },
        Command {
            name: "days",
            aliases: &[],
            usage: "days <name>",
            about: "Days until a contact's birthday",
            handler: days::<S>,
        },
        Command {
            name: "upcoming",
            aliases: &[],
            usage: "upcoming [days]",
            about: "Birthdays coming up (default: next 7 days)",
            handler: upcoming::<S>,
        },
        Command {
            name: "find",
            aliases: &["phone"],
            usage: "find <name>",
            about: "Show a contact",
            handler: find::<S>,
        },
        Command {
            name: "delete",
            aliases: &[],
            usage: "delete <name>",
            about: "Delete a contact",
            handler: delete::<S>,
        },
        Command {
            name: "search",
            aliases: &[],
            usage: "search <text>",
            about: "Search names (any case) and phone numbers",
            handler: search::<S>,
        },
        Command {
            name: "list",
            aliases: &["all"],
            usage: "list",
            about: "List every contact",
            handler: list::<S>,
        },
        Command {
            name: "show_all",
            aliases: &[],
            usage: "show_all [page size]",
            about: "List contacts from the first page",
            handler: show_all::<S>,
        },
        Command {
            name: "next",
            aliases: &[],
            usage: "next",
            about: "Next page of contacts",
            handler: next::<S>,
        },
        Command {
            name: "save",
            aliases: &[],
            usage: "save",
            about: "Save the address book now",
            handler: save::<S>,
        },
        Command {
            name: "help",
            aliases: &["?"],
            usage: "help",
            about: "List commands",
            handler: help::<S>,
        },
        Command {
            name: "exit",
            aliases: &["close", "good_bye", "."],
            usage: "exit",
            about: "Save and quit",
            handler: exit::<S>,
        },
    ]
}

/// Resolves the first word of a line against the table.
pub fn resolve<'t, S: DataStore>(table: &'t [Command<S>], word: &str) -> Result<&'t Command<S>> {
    let word = word.to_lowercase();

    if let Some(cmd) = table
        .iter()
        .find(|c| c.name == word || c.aliases.contains(&word.as_str()))
    {
        return Ok(cmd);
    }

    let candidates: Vec<&Command<S>> = table
        .iter()
        .filter(|c| c.name.starts_with(&word) || c.aliases.iter().any(|a| a.starts_with(&word)))
        .collect();
    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => Err(ContactzError::UnknownCommand(word)),
        many => {
            let names: Vec<&str> = many.iter().map(|c| c.name).collect();
            Err(ContactzError::UnknownCommand(format!(
                "{} (could be: {})",
                word,
                names.join(", ")
            )))
        }
    }
}

/// Runs one input line against the API.
pub fn execute<S: DataStore>(api: &mut ContactzApi<S>, line: &str) -> Result<Outcome> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((first, args)) = words.split_first() else {
        return Err(ContactzError::MissingArgument("command"));
    };

    let table = table::<S>();
    let command = resolve(&table, first)?;
    info!(command = command.name, args = args.len(), "dispatching");
    (command.handler)(api, args)
}

fn arg<'a>(args: &[&'a str], index: usize, what: &'static str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or(ContactzError::MissingArgument(what))
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &'static str) -> Result<T> {
    value
        .parse()
        .map_err(|_| ContactzError::invalid(what, value))
}

fn hello<S: DataStore>(_api: &mut ContactzApi<S>, _args: &[&str]) -> Result<Outcome> {
    Ok(Outcome::Continue(
        CmdResult::default().with_message(CmdMessage::info("How can I help you?")),
    ))
}

/// `add <name> [phone] [birthday]`, the last two in either order. A word that parses
/// as a date, or is dotted like one, is the birthday; anything else is the phone.
fn add<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    if let Some(extra) = args.get(3) {
        return Err(ContactzError::invalid("argument", *extra));
    }
    let mut phone = None;
    let mut birthday = None;
    for extra in args.iter().skip(1).copied() {
        let slot = if looks_like_birthday(extra) {
            &mut birthday
        } else {
            &mut phone
        };
        if slot.replace(extra).is_some() {
            return Err(ContactzError::invalid("argument", extra));
        }
    }
    api.add_contact(name, phone, birthday).map(Outcome::Continue)
}

// `123-456-7890` is a mistyped phone, `31.02.1990` a mistyped birthday.
fn looks_like_birthday(word: &str) -> bool {
    word.parse::<Birthday>().is_ok() || word.contains('.')
}

fn add_phone<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    let phone = arg(args, 1, "phone")?;
    api.add_phone(name, phone).map(Outcome::Continue)
}

fn remove_phone<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    let phone = arg(args, 1, "phone")?;
    api.remove_phone(name, phone).map(Outcome::Continue)
}

fn edit_phone<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    let old = arg(args, 1, "old phone")?;
    let new = arg(args, 2, "new phone")?;
    api.edit_phone(name, old, new).map(Outcome::Continue)
}

fn birthday<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    let date = arg(args, 1, "birthday")?;
    api.set_birthday(name, date).map(Outcome::Continue)
}

fn days<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    api.days_to_birthday(name).map(Outcome::Continue)
}

fn upcoming<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let within = match args.first() {
        Some(value) => parse_number::<i64>(value, "number of days")?,
        None => DEFAULT_WINDOW_DAYS,
    };
    if within < 0 {
        return Err(ContactzError::invalid("number of days", within.to_string()));
    }
    api.upcoming_birthdays(within).map(Outcome::Continue)
}

fn find<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    api.find(name).map(Outcome::Continue)
}

fn delete<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let name = arg(args, 0, "name")?;
    api.delete_contact(name).map(Outcome::Continue)
}

fn search<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    if args.is_empty() {
        return Err(ContactzError::MissingArgument("query"));
    }
    api.search(&args.join(" ")).map(Outcome::Continue)
}

fn list<S: DataStore>(api: &mut ContactzApi<S>, _args: &[&str]) -> Result<Outcome> {
    api.list_all().map(Outcome::Continue)
}

fn show_all<S: DataStore>(api: &mut ContactzApi<S>, args: &[&str]) -> Result<Outcome> {
    let page_size = args
        .first()
        .map(|value| parse_number::<usize>(value, "page size"))
        .transpose()?;
    api.show_all(page_size).map(Outcome::Continue)
}

fn next<S: DataStore>(api: &mut ContactzApi<S>, _args: &[&str]) -> Result<Outcome> {
    api.next_page().map(Outcome::Continue)
}

fn save<S: DataStore>(api: &mut ContactzApi<S>, _args: &[&str]) -> Result<Outcome> {
    api.save().map(Outcome::Continue)
}

fn help<S: DataStore>(_api: &mut ContactzApi<S>, _args: &[&str]) -> Result<Outcome> {
    let mut result = CmdResult::default();
    for command in table::<S>() {
        result.add_message(CmdMessage::info(format!(
            "{:<44} {}",
            command.usage, command.about
        )));
    }
    Ok(Outcome::Continue(result))
}

/// Saves, then says goodbye. A failed save is reported but does not keep the user in.
fn exit<S: DataStore>(api: &mut ContactzApi<S>, _args: &[&str]) -> Result<Outcome> {
    let mut result = match api.save() {
        Ok(saved) => saved,
        Err(e) => {
            warn!(error = %e, "save on exit failed");
            CmdResult::default().with_message(CmdMessage::error(format!("Save failed: {}", e)))
        }
    };
    result.add_message(CmdMessage::success("Good bye!"));
    Ok(Outcome::Exit(result))
}
