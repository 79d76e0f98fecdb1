//! # Command Processor
//!
//! Turns free text into a [`Command`] and applies it to [`CharacterStats`].
//!
//! The grammar is the whole wire protocol of the core. The first token that
//! matches wins; everything around it is ignored:
//!
//! ```text
//! END_DAY                  advance one day (==END_DAY== also accepted)
//! weight==<digits>         set weight in lbs
//! age==<digits>            set age in years
//! calories==<digits>       replace today's intake
//! date==<YYYY-MM-DD>       jump the calendar
//! ```
//!
//! Parsing happens in two steps: [`tokenize`] finds the token and splits it
//! on `==`, then [`Command::try_from`] validates the value. Input without a
//! token is not an error, it just produces no command.

use chrono::NaiveDate;
use log::{debug, info};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::core::stats::CharacterStats;

static COMMAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only
    Regex::new(r"(END_DAY|weight==[0-9]+|age==[0-9]+|calories==[0-9]+|date==[0-9]{4}-[0-9]{2}-[0-9]{2})")
        .expect("command pattern is valid")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EndDay,
    Weight(u32),
    Age(u32),
    Calories(u32),
    Date(NaiveDate),
}

/// A matched token split into its name and raw value, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCommand<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Command name with no handler. Logged and ignored, never mutates.
    UnknownCommand(String),
    /// Numeric value that does not fit the field.
    InvalidCommandValue { command: String, value: String },
    /// `YYYY-MM-DD` shaped value that is not a calendar date.
    InvalidDate(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(name) => write!(f, "unknown command: {name}"),
            CommandError::InvalidCommandValue { command, value } => {
                write!(f, "invalid value for {command}: {value}")
            }
            CommandError::InvalidDate(value) => write!(f, "invalid date: {value}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Finds the first command token in `input` and splits it on `==`.
pub fn tokenize(input: &str) -> Option<RawCommand<'_>> {
    let token = COMMAND_PATTERN.find(input)?.as_str();
    let mut parts = token.splitn(2, "==");
    let name = parts.next()?;
    Some(RawCommand {
        name,
        value: parts.next(),
    })
}

impl TryFrom<RawCommand<'_>> for Command {
    type Error = CommandError;

    fn try_from(raw: RawCommand<'_>) -> Result<Self, Self::Error> {
        match raw.name {
            "END_DAY" => Ok(Command::EndDay),
            "weight" => parse_number(&raw).map(Command::Weight),
            "age" => parse_number(&raw).map(Command::Age),
            "calories" => parse_number(&raw).map(Command::Calories),
            "date" => {
                let value = raw.value.unwrap_or_default();
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map(Command::Date)
                    .map_err(|_| CommandError::InvalidDate(value.to_string()))
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_number(raw: &RawCommand<'_>) -> Result<u32, CommandError> {
    let value = raw.value.unwrap_or_default();
    value
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidCommandValue {
            command: raw.name.to_string(),
            value: value.to_string(),
        })
}

/// Parses `input` into a validated command.
///
/// `Ok(None)` means no command token was found.
pub fn parse(input: &str) -> Result<Option<Command>, CommandError> {
    match tokenize(input) {
        Some(raw) => {
            debug!("Matched command token: {:?}", raw);
            Command::try_from(raw).map(Some)
        }
        None => Ok(None),
    }
}

impl Command {
    pub fn apply(self, stats: &mut CharacterStats) {
        match self {
            Command::EndDay => stats.end_day(),
            Command::Weight(weight) => stats.set_weight(weight),
            Command::Age(age) => stats.set_age(age),
            Command::Calories(calories) => stats.set_calories(calories),
            Command::Date(date) => stats.set_date(date),
        }
    }
}

/// Parses and applies `input` in one go.
///
/// Returns the command that ran, or `None` when nothing matched. An unknown
/// command name is logged and reported as `None` as well.
pub fn execute(stats: &mut CharacterStats, input: &str) -> Result<Option<Command>, CommandError> {
    match parse(input) {
        Ok(Some(command)) => {
            info!("Executing {:?}", command);
            command.apply(stats);
            Ok(Some(command))
        }
        Ok(None) => Ok(None),
        Err(CommandError::UnknownCommand(name)) => {
            info!("Unknown command: {}", name);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
