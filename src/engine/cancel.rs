//! Cooperative cancellation
//!
//! The engine polls a shared flag at attempt boundaries and during cooldown
//! slices. Ctrl+C sets the flag instead of unwinding the process.

use crate::error::Result;
use signal_hook::{consts::SIGINT, flag};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the current run
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Clear a previous request before the next run
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    /// Route SIGINT to this token
    ///
    /// A first Ctrl+C sets the flag. A second one while the flag is still set
    /// terminates the process, so an unresponsive session can always be left.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the signal handler cannot be registered.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        flag::register_conditional_shutdown(SIGINT, 1, Arc::clone(&self.flag))?;
        flag::register(SIGINT, Arc::clone(&self.flag))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        other.cancel();
        assert!(token.is_cancelled());

        token.reset();
        assert!(!other.is_cancelled());
    }
}
