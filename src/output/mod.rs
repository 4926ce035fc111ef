//! Terminal output formatting
//!
//! Display utilities for the REPL: banner, command registry, outcomes and the
//! cooldown countdown.

pub mod display;
pub mod formatters;
mod observer;

pub use display::{
    print_banner, print_cancelled, print_charset, print_command_table, print_error, print_outcome,
    print_prompt, print_target, print_unknown_command, print_usage,
};
pub use observer::TerminalObserver;
