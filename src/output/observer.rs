//! Cooldown countdown for terminal sessions

use crate::engine::RunObserver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Shows a countdown bar while the engine waits out a rate limit
#[derive(Default)]
pub struct TerminalObserver {
    bar: Option<ProgressBar>,
    total: Duration,
}

impl TerminalObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunObserver for TerminalObserver {
    fn cooldown_started(&mut self, cooldown: Duration, attempts: u64) {
        println!(
            "{}",
            format!(
                "[!] RATE LIMIT EXCEEDED after {attempts} attempts - Cooldown: {}s",
                cooldown.as_secs()
            )
            .magenta()
        );

        self.total = cooldown;
        if cooldown.is_zero() {
            return;
        }

        let bar = ProgressBar::new(cooldown.as_millis() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.magenta} cooling down [{bar:30.magenta/blue}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        self.bar = Some(bar);
    }

    fn cooldown_tick(&mut self, remaining: Duration) {
        if let Some(bar) = &self.bar {
            let elapsed = self.total.saturating_sub(remaining);
            bar.set_position(elapsed.as_millis() as u64);
            bar.set_message(format!("{:.1}s left", remaining.as_secs_f64()));
        }
    }

    fn cooldown_finished(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cooldown_creates_no_bar() {
        let mut observer = TerminalObserver::new();
        observer.cooldown_started(Duration::ZERO, 3);
        assert!(observer.bar.is_none());
        observer.cooldown_finished();
    }

    #[test]
    fn bar_tracks_elapsed_time() {
        let mut observer = TerminalObserver::new();
        observer.cooldown_started(Duration::from_secs(2), 10);
        observer.cooldown_tick(Duration::from_millis(1500));

        let position = observer.bar.as_ref().map(ProgressBar::position);
        assert_eq!(position, Some(500));

        observer.cooldown_finished();
        assert!(observer.bar.is_none());
    }
}
