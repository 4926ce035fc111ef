//! Command implementations

pub mod generate;
pub mod repl;
pub mod verbs;

pub use generate::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, MAX_TARGET_LEN, random_target};
pub use repl::{Flow, Session};
pub use verbs::{BreakArgs, Command, RandomBreakArgs, RandomSpec, parse_command};
