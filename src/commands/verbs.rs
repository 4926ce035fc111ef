//! REPL verb parsing
//!
//! Turns one input line into a [`Command`]. Argument parsing for `break` and
//! `random-break` goes through clap, so the same argument structs serve the
//! REPL and the process command line.

use super::generate::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use crate::core::{BreakRequest, DEFAULT_COOLDOWN_SECS};
use crate::error::{Error, Result};
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;

const EXIT_USAGE: &str = "[?] Usage: exit\n    Terminates the pwd-brkr session";
const LIST_USAGE: &str = "[?] Usage: list\n    Displays all available commands with usage info";
const CHARSET_USAGE: &str =
    "[?] Usage: charset\n    Displays the full character set used for breaking";

/// Arguments of `break`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "break",
    about = "Break a literal stringset",
    disable_version_flag = true
)]
pub struct BreakArgs {
    /// Attempts allowed before a cooldown (unlimited if omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<i64>,

    /// Cooldown length in seconds
    #[arg(short, long, default_value_t = DEFAULT_COOLDOWN_SECS, allow_negative_numbers = true)]
    pub cooldown: i64,

    /// Target to break; words are joined with single spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub target: Vec<String>,
}

impl BreakArgs {
    #[must_use]
    pub fn to_request(&self) -> BreakRequest {
        BreakRequest {
            target: self.target.join(" "),
            rate_limit: self.rate,
            cooldown_secs: self.cooldown,
        }
    }
}

/// Arguments of `random-break`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "random-break",
    about = "Generate & break a random stringset",
    override_usage = "random-break [<max> | <min> <max> [<rate_limit> [<cooldown>]]]",
    disable_version_flag = true
)]
pub struct RandomBreakArgs {
    /// <max> alone, or <min> <max> <rate_limit> <cooldown>
    #[arg(num_args = 0..=4, allow_negative_numbers = true, value_name = "N")]
    pub values: Vec<i64>,
}

/// Resolved `random-break` parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    pub min: i64,
    pub max: i64,
    pub rate_limit: Option<i64>,
    pub cooldown_secs: i64,
}

impl RandomBreakArgs {
    /// Interpret the positional values
    ///
    /// One value is the maximum length; two or more start with min and max,
    /// then rate limit and cooldown.
    #[must_use]
    pub fn spec(&self) -> RandomSpec {
        let mut spec = RandomSpec {
            min: DEFAULT_MIN_LEN,
            max: DEFAULT_MAX_LEN,
            rate_limit: None,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        };

        match self.values.as_slice() {
            [] => {}
            [max] => spec.max = *max,
            [min, max, rest @ ..] => {
                spec.min = *min;
                spec.max = *max;
                spec.rate_limit = rest.first().copied();
                if let Some(&cooldown) = rest.get(1) {
                    spec.cooldown_secs = cooldown;
                }
            }
        }

        spec
    }
}

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Exit,
    List,
    Charset,
    Break(BreakRequest),
    RandomBreak(RandomSpec),
    /// `--help` output to show instead of running anything
    Help(String),
    Unknown(String),
}

/// Parse one REPL line
///
/// # Errors
///
/// Returns `Error::Usage` with clap's rendered message if the arguments of a
/// verb do not parse.
pub fn parse_command(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&verb) = tokens.first() else {
        return Ok(Command::Empty);
    };
    let is_help = |t: &&str| *t == "--help" || *t == "-h";
    let wants_help = tokens[1..].iter().any(is_help);
    // The literal swallows hyphenated words, so only a trailing flag asks for help
    let ends_with_help = tokens.len() > 1 && tokens.last().is_some_and(is_help);

    let command = match verb {
        "exit" | "quit" if wants_help => Command::Help(EXIT_USAGE.to_string()),
        "exit" | "quit" => Command::Exit,
        "list" if wants_help => Command::Help(LIST_USAGE.to_string()),
        "list" => Command::List,
        "charset" | "try-printallowedchar" if wants_help => {
            Command::Help(CHARSET_USAGE.to_string())
        }
        "charset" | "try-printallowedchar" => Command::Charset,
        "break" if ends_with_help => {
            Command::Help(BreakArgs::command().render_help().to_string())
        }
        "break" => match BreakArgs::try_parse_from(tokens.iter().copied()) {
            Ok(args) => Command::Break(args.to_request()),
            Err(err) => clap_outcome(&err)?,
        },
        "random-break" => match RandomBreakArgs::try_parse_from(tokens.iter().copied()) {
            Ok(args) => Command::RandomBreak(args.spec()),
            Err(err) => clap_outcome(&err)?,
        },
        other => Command::Unknown(other.to_string()),
    };

    Ok(command)
}

/// Help requests become `Command::Help`; anything else is a usage error
fn clap_outcome(err: &clap::Error) -> Result<Command> {
    let rendered = err.render().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Command::Help(rendered)),
        _ => Err(Error::Usage(rendered)),
    }
}
