//! Guess engine
//!
//! Character-by-character prefix search with rate limiting, cooperative
//! cancellation and status animator coordination.

pub mod cancel;
mod guess;
pub mod pacing;

pub use cancel::CancelToken;
pub use guess::{
    BreakResult, EngineConfig, GuessEngine, NoopObserver, Outcome, PrefixStep, RunObserver,
};
