//! Prefix-search guess engine
//!
//! Reconstructs a known target one position at a time by scanning the
//! alphabet in order. A rate limit can force cooldown pauses; the status
//! animator runs alongside and is always stopped before the engine pauses
//! or returns.

use super::cancel::CancelToken;
use super::pacing::{self, Pause};
use crate::animator::{AnimationConfig, AnimatorHandle, RenderSink, StatusAnimator, StopStatus};
use crate::core::{Alphabet, BreakRequest, RunPlan};
use crate::error::Result;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Tunables that do not change results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sleep after every attempt so the animation is visible
    pub attempt_delay: Duration,
    /// Slice size for cancellation checks during cooldowns
    pub cooldown_poll: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            attempt_delay: Duration::ZERO,
            cooldown_poll: Duration::from_millis(50),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The full target was reconstructed
    Cracked(String),
    /// Cancelled; carries the prefix matched so far
    Interrupted(String),
    /// The run could not continue
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_cracked(&self) -> bool {
        matches!(self, Self::Cracked(_))
    }

    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted(_))
    }

    /// The string carried by the outcome
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Cracked(s) | Self::Interrupted(s) | Self::Failed(s) => s,
        }
    }
}

/// Matched prefix after one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixStep {
    pub prefix: String,
    /// Attempts spent on this position
    pub attempts: u64,
}

/// Result of a run
#[derive(Debug, Clone)]
pub struct BreakResult {
    pub outcome: Outcome,
    pub total_attempts: u64,
    pub cooldowns: u64,
    pub steps: Vec<PrefixStep>,
    pub duration: Duration,
}

/// Receives cooldown progress from the control thread
///
/// Called only while the animator is stopped, so implementations may write
/// to the terminal.
pub trait RunObserver {
    fn cooldown_started(&mut self, _cooldown: Duration, _attempts: u64) {}
    fn cooldown_tick(&mut self, _remaining: Duration) {}
    fn cooldown_finished(&mut self) {}
}

/// Observer that ignores everything
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Run-local mutable state
#[derive(Debug, Default)]
struct GuessState {
    matched_prefix: String,
    /// Attempts since the last cooldown
    attempt_count: u64,
    total_attempts: u64,
    cooldowns: u64,
    steps: Vec<PrefixStep>,
}

/// Drives the prefix search and the status animator
pub struct GuessEngine<'a> {
    alphabet: &'a Alphabet,
    animation: &'a AnimationConfig,
    sink: Arc<dyn RenderSink>,
    config: EngineConfig,
    cancel: CancelToken,
}

impl<'a> GuessEngine<'a> {
    pub fn new(
        alphabet: &'a Alphabet,
        animation: &'a AnimationConfig,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        Self {
            alphabet,
            animation,
            sink,
            config: EngineConfig::default(),
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that cancels runs of this engine
    #[must_use]
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Run a request without cooldown reporting
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the request or animation config is
    /// rejected. Nothing is spawned in that case.
    pub fn run(&self, request: &BreakRequest) -> Result<BreakResult> {
        self.run_observed(request, &mut NoopObserver)
    }

    /// Run a request, reporting cooldowns to `observer`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the request or animation config is
    /// rejected. Nothing is spawned in that case.
    pub fn run_observed(
        &self,
        request: &BreakRequest,
        observer: &mut dyn RunObserver,
    ) -> Result<BreakResult> {
        let plan = request.validate()?;
        self.animation.validate()?;

        info!(
            target_len = plan.target.chars().count(),
            rate_limit = ?plan.limits.limit,
            cooldown_secs = plan.limits.cooldown.as_secs(),
            "break run started"
        );

        let started = Instant::now();
        let mut state = GuessState::default();
        let outcome = self.search(&plan, &mut state, observer);
        let duration = started.elapsed();

        info!(
            total_attempts = state.total_attempts,
            cooldowns = state.cooldowns,
            elapsed_ms = duration.as_millis() as u64,
            outcome = ?outcome,
            "break run finished"
        );

        Ok(BreakResult {
            outcome,
            total_attempts: state.total_attempts,
            cooldowns: state.cooldowns,
            steps: state.steps,
            duration,
        })
    }

    fn search(
        &self,
        plan: &RunPlan,
        state: &mut GuessState,
        observer: &mut dyn RunObserver,
    ) -> Outcome {
        let mut animator = self.start_animator();

        for position in 0..plan.target.chars().count() {
            let mut position_attempts = 0;
            let mut matched = false;

            for symbol in self.alphabet.iter() {
                if self.cancel.is_cancelled() {
                    halt(animator.take());
                    debug!(position, "run cancelled");
                    return Outcome::Interrupted(state.matched_prefix.clone());
                }

                let mut candidate = String::with_capacity(state.matched_prefix.len() + 1);
                candidate.push_str(&state.matched_prefix);
                candidate.push(symbol);

                state.attempt_count += 1;
                state.total_attempts += 1;
                position_attempts += 1;

                if let Some(handle) = &animator {
                    handle.set_detail(&candidate);
                }
                if !self.config.attempt_delay.is_zero() {
                    thread::sleep(self.config.attempt_delay);
                }

                if plan.target.starts_with(&candidate) {
                    debug!(position, attempts = position_attempts, "position matched");
                    state.matched_prefix = candidate;
                    state.steps.push(PrefixStep {
                        prefix: state.matched_prefix.clone(),
                        attempts: position_attempts,
                    });
                    matched = true;
                }

                // The limit applies to every attempt, the final one included
                if plan.limits.is_exhausted(state.attempt_count)
                    && self.cool_down(plan, state, observer, &mut animator) == Pause::Cancelled
                {
                    debug!(position, "run cancelled during cooldown");
                    return Outcome::Interrupted(state.matched_prefix.clone());
                }

                if matched {
                    break;
                }
            }

            if !matched {
                halt(animator.take());
                warn!(position, "no alphabet symbol matches target position");
                return Outcome::Failed(format!(
                    "no symbol in the alphabet matches position {position} (matched so far: {:?})",
                    state.matched_prefix
                ));
            }

            if state.matched_prefix == plan.target {
                break;
            }
        }

        halt(animator.take());
        Outcome::Cracked(state.matched_prefix.clone())
    }

    /// Stop the animator, wait out the cooldown and start a fresh animator
    ///
    /// On cancellation the animator stays stopped.
    fn cool_down(
        &self,
        plan: &RunPlan,
        state: &mut GuessState,
        observer: &mut dyn RunObserver,
        animator: &mut Option<AnimatorHandle>,
    ) -> Pause {
        halt(animator.take());
        state.cooldowns += 1;
        info!(
            attempts = state.attempt_count,
            cooldown_secs = plan.limits.cooldown.as_secs(),
            "rate limit reached"
        );

        observer.cooldown_started(plan.limits.cooldown, state.attempt_count);
        let pause = pacing::pause(
            plan.limits.cooldown,
            self.config.cooldown_poll,
            &self.cancel,
            |remaining| observer.cooldown_tick(remaining),
        );
        observer.cooldown_finished();

        if pause == Pause::Completed {
            state.attempt_count = 0;
            *animator = self.start_animator();
        }
        pause
    }

    /// Start a fresh animator; failures leave the run without live feedback
    fn start_animator(&self) -> Option<AnimatorHandle> {
        match StatusAnimator::start(self.animation, Arc::clone(&self.sink)) {
            Ok(handle) => Some(handle),
            Err(err) => {
                debug!(%err, "status animator unavailable");
                None
            }
        }
    }
}

fn halt(animator: Option<AnimatorHandle>) {
    if let Some(handle) = animator
        && handle.stop() == StopStatus::TimedOut
    {
        warn!("continuing with a possibly stale status line");
    }
}
