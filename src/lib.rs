//! Password Breaker
//!
//! A terminal toy that "cracks" a string one character at a time by prefix
//! search over printable ASCII, with optional rate limiting and an animated
//! status line.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pwd_brkr::animator::{AnimationConfig, TerminalSink};
//! use pwd_brkr::core::{Alphabet, BreakRequest};
//! use pwd_brkr::engine::GuessEngine;
//! use std::sync::Arc;
//!
//! let alphabet = Alphabet::printable_ascii();
//! let animation = AnimationConfig::default();
//! let engine = GuessEngine::new(&alphabet, &animation, Arc::new(TerminalSink));
//!
//! let request = BreakRequest::new("hunter2").with_rate_limit(100);
//! let result = engine.run(&request).unwrap();
//! println!("{} attempts", result.total_attempts);
//! ```

// Core domain types
pub mod core;

// Status line animation
pub mod animator;

// Prefix search
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;
pub mod logging;

pub use error::{Error, Result};
