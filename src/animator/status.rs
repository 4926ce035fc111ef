//! Background status animator
//!
//! A dedicated thread renders spinner frame, rotating message and the
//! caller's progress detail at a fixed tick. The caller shares only a stop
//! channel and the mutex-guarded detail with it; frame and message indices
//! live on the thread.

use super::config::AnimationConfig;
use super::sink::{RenderSink, StatusLine};
use crate::error::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result of asking an animator to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopStatus {
    /// The thread cleared its line and exited
    Acknowledged,
    /// The bounded wait elapsed; output on the line may be stale
    TimedOut,
}

/// Indices owned by the render thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatorState {
    pub frame_index: usize,
    pub message_index: usize,
    pub last_message_switch: Instant,
}

impl AnimatorState {
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            frame_index: 0,
            message_index: 0,
            last_message_switch: now,
        }
    }

    /// Step to the next tick
    ///
    /// The frame always advances; the message advances once
    /// `message_interval` has elapsed since the last switch.
    pub fn advance(&mut self, now: Instant, message_interval: Duration) {
        self.frame_index = self.frame_index.wrapping_add(1);
        if now.saturating_duration_since(self.last_message_switch) >= message_interval {
            self.message_index = self.message_index.wrapping_add(1);
            self.last_message_switch = now;
        }
    }
}

/// Spawns status animators
pub struct StatusAnimator;

impl StatusAnimator {
    /// Start a render thread
    ///
    /// Every instance starts at frame 0 and message 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the config is unusable, or
    /// `Error::Io` if the thread cannot be spawned.
    pub fn start(config: &AnimationConfig, sink: Arc<dyn RenderSink>) -> Result<AnimatorHandle> {
        config.validate()?;

        let (stop_tx, stop_rx) = bounded::<()>(1);
        let (done_tx, done_rx) = bounded::<()>(1);
        let detail = Arc::new(Mutex::new(String::new()));

        let render_loop = RenderLoop {
            frames: config.frames.clone(),
            messages: config.messages.clone(),
            message_width: config.message_width(),
            tick: config.tick,
            message_interval: config.message_interval,
            detail: Arc::clone(&detail),
            sink,
        };

        let thread = thread::Builder::new()
            .name("status-animator".to_string())
            .spawn(move || {
                render_loop.run(&stop_rx);
                // Receiver may already be gone after a timed-out stop
                let _ = done_tx.send(());
            })?;

        debug!("status animator started");

        Ok(AnimatorHandle {
            stop_tx: Some(stop_tx),
            done_rx,
            thread: Some(thread),
            detail,
            stop_timeout: config.stop_timeout,
        })
    }
}

/// Caller side of a running animator
///
/// Dropping the handle stops the animator.
pub struct AnimatorHandle {
    stop_tx: Option<Sender<()>>,
    done_rx: Receiver<()>,
    thread: Option<JoinHandle<()>>,
    detail: Arc<Mutex<String>>,
    stop_timeout: Duration,
}

impl AnimatorHandle {
    /// Publish progress text shown after the message
    pub fn set_detail(&self, text: &str) {
        // A poisoned lock means the render thread already died
        if let Ok(mut detail) = self.detail.lock() {
            detail.clear();
            detail.push_str(text);
        }
    }

    /// Signal stop and wait, bounded by the configured timeout
    pub fn stop(mut self) -> StopStatus {
        self.shutdown()
    }

    fn shutdown(&mut self) -> StopStatus {
        let Some(thread) = self.thread.take() else {
            return StopStatus::Acknowledged;
        };

        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.try_send(());
        }

        match self.done_rx.recv_timeout(self.stop_timeout) {
            // Disconnected: the thread unwound without acknowledging
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                if thread.join().is_err() {
                    debug!("status animator panicked; ignoring");
                }
                StopStatus::Acknowledged
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    timeout_ms = self.stop_timeout.as_millis() as u64,
                    "status animator did not stop in time; detaching"
                );
                StopStatus::TimedOut
            }
        }
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct RenderLoop {
    frames: Vec<String>,
    messages: Vec<String>,
    message_width: usize,
    tick: Duration,
    message_interval: Duration,
    detail: Arc<Mutex<String>>,
    sink: Arc<dyn RenderSink>,
}

impl RenderLoop {
    fn run(&self, stop_rx: &Receiver<()>) {
        let mut state = AnimatorState::new(Instant::now());
        let mut rendered_width = 0;

        loop {
            let Some(line) = self.line_for(&state) else {
                debug!("status detail lock poisoned; animation stopped");
                break;
            };
            rendered_width = rendered_width.max(line.display_width());

            if let Err(err) = self.sink.render(&line) {
                debug!(%err, "status render failed; animation stopped");
                break;
            }

            match stop_rx.recv_timeout(self.tick) {
                Err(RecvTimeoutError::Timeout) => {
                    state.advance(Instant::now(), self.message_interval);
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        if let Err(err) = self.sink.clear(rendered_width) {
            debug!(%err, "status clear failed");
        }
    }

    fn line_for(&self, state: &AnimatorState) -> Option<StatusLine> {
        let detail = self.detail.lock().ok()?.clone();
        Some(StatusLine {
            frame: self.frames[state.frame_index % self.frames.len()].clone(),
            message: self.messages[state.message_index % self.messages.len()].clone(),
            message_width: self.message_width,
            detail,
        })
    }
}
