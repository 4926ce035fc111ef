//! Status animation
//!
//! A spinner plus rotating status message rendered on one terminal line by a
//! background thread while a run is in progress. Best-effort: render faults
//! end the animation quietly and never reach the caller.

mod config;
pub mod sink;
mod status;

pub use config::{AnimationConfig, BRAILLE_FRAMES, DEFAULT_MESSAGES, FrameSet, LINE_FRAMES};
pub use sink::{MemorySink, RenderSink, SinkEvent, StatusLine, TerminalSink};
pub use status::{AnimatorHandle, AnimatorState, StatusAnimator, StopStatus};
