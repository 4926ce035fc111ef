//! Core domain types
//!
//! The guess alphabet and the request/plan types handed to the engine.
//! Everything here is pure and immutable once built.

mod alphabet;
mod request;

pub use alphabet::{Alphabet, PRINTABLE_END, PRINTABLE_START};
pub use request::{BreakRequest, DEFAULT_COOLDOWN_SECS, RateLimitConfig, RunPlan};
