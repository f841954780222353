//! Command parsing for the interactive loop.
//!
//! Kept separate from the terminal handling so the pure-logic piece can be
//! unit-tested without a live session.

use sociogram_graph::PersonId;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> [bio…]`
    Add { name: String, bio: String },
    /// `connect <id> <id>`
    Connect(PersonId, PersonId),
    /// `remove <id>`
    Remove(PersonId),
    /// `path <id> <id>`
    Path(PersonId, PersonId),
    /// `mutual <id> <id>`
    Mutual(PersonId, PersonId),
    /// `suggest <id>`
    Suggest(PersonId),
    /// `degrees <id> <id>`
    Degrees(PersonId, PersonId),
    List,
    Stats,
    Dump,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse a single input line. Errors are user-facing usage messages.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty command, try `help`".to_string());
        };

        match verb {
            "add" => {
                let Some(name) = words.next() else {
                    return Err("usage: add <name> [bio…]".to_string());
                };
                let bio = words.collect::<Vec<_>>().join(" ");
                Ok(Command::Add { name: name.to_string(), bio })
            }
            "connect" => parse_pair(words, "connect").map(|(a, b)| Command::Connect(a, b)),
            "remove" => parse_single(words, "remove").map(Command::Remove),
            "path" => parse_pair(words, "path").map(|(a, b)| Command::Path(a, b)),
            "mutual" => parse_pair(words, "mutual").map(|(a, b)| Command::Mutual(a, b)),
            "suggest" => parse_single(words, "suggest").map(Command::Suggest),
            "degrees" => parse_pair(words, "degrees").map(|(a, b)| Command::Degrees(a, b)),
            "list" => Ok(Command::List),
            "stats" => Ok(Command::Stats),
            "dump" => Ok(Command::Dump),
            "clear" => Ok(Command::Clear),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command `{other}`, try `help`")),
        }
    }
}

fn parse_id(word: &str) -> Result<PersonId, String> {
    word.parse::<PersonId>()
        .map_err(|_| format!("`{word}` is not a person id"))
}

fn parse_single<'a>(
    mut words: impl Iterator<Item = &'a str>,
    verb: &str,
) -> Result<PersonId, String> {
    match (words.next(), words.next()) {
        (Some(a), None) => parse_id(a),
        _ => Err(format!("usage: {verb} <id>")),
    }
}

fn parse_pair<'a>(
    mut words: impl Iterator<Item = &'a str>,
    verb: &str,
) -> Result<(PersonId, PersonId), String> {
    match (words.next(), words.next(), words.next()) {
        (Some(a), Some(b), None) => Ok((parse_id(a)?, parse_id(b)?)),
        _ => Err(format!("usage: {verb} <id> <id>")),
    }
}
