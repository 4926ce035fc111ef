//! Interruptible pauses

use super::cancel::CancelToken;
use std::thread;
use std::time::{Duration, Instant};

/// Shortest slice a pause sleeps for between cancellation checks
const MIN_POLL: Duration = Duration::from_millis(1);

/// How a pause ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    Completed,
    Cancelled,
}

/// Sleep for `duration` in `poll`-sized slices
///
/// `on_tick` receives the remaining time before each slice. A zero duration
/// returns immediately unless cancellation is already requested.
pub fn pause(
    duration: Duration,
    poll: Duration,
    cancel: &CancelToken,
    mut on_tick: impl FnMut(Duration),
) -> Pause {
    let deadline = Instant::now() + duration;
    let poll = poll.max(MIN_POLL);

    loop {
        if cancel.is_cancelled() {
            return Pause::Cancelled;
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Pause::Completed;
        }

        on_tick(remaining);
        thread::sleep(remaining.min(poll));
    }
}
