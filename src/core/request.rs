//! Break requests and rate-limit configuration
//!
//! A `BreakRequest` carries raw values as parsed from user input. Validation
//! turns it into a `RunPlan` the engine can execute.

use crate::error::{Error, Result};
use std::time::Duration;

/// Cooldown applied when a rate limit is set without an explicit pause
pub const DEFAULT_COOLDOWN_SECS: i64 = 5;

/// Input boundary object handed to the engine by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakRequest {
    pub target: String,
    pub rate_limit: Option<i64>,
    pub cooldown_secs: i64,
}

impl BreakRequest {
    /// Request without a rate limit
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            rate_limit: None,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }

    #[must_use]
    pub fn with_rate_limit(mut self, limit: i64) -> Self {
        self.rate_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_cooldown_secs(mut self, secs: i64) -> Self {
        self.cooldown_secs = secs;
        self
    }

    /// Validate the request
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if:
    /// - The target is empty
    /// - A rate limit is given and is below 1
    /// - The cooldown is negative
    pub fn validate(&self) -> Result<RunPlan> {
        if self.target.is_empty() {
            return Err(Error::invalid("target must not be empty"));
        }

        let limit = match self.rate_limit {
            Some(limit) if limit < 1 => {
                return Err(Error::invalid(format!(
                    "rate limit must be at least 1, got {limit}"
                )));
            }
            Some(limit) => Some(limit as u64),
            None => None,
        };

        let cooldown_secs = u64::try_from(self.cooldown_secs).map_err(|_| {
            Error::invalid(format!(
                "cooldown must not be negative, got {}",
                self.cooldown_secs
            ))
        })?;

        Ok(RunPlan {
            target: self.target.clone(),
            limits: RateLimitConfig {
                limit,
                cooldown: Duration::from_secs(cooldown_secs),
            },
        })
    }
}

/// Optional attempt limit plus the pause taken when it is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub limit: Option<u64>,
    pub cooldown: Duration,
}

impl RateLimitConfig {
    /// No limit; attempts never pause
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            limit: None,
            cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECS as u64),
        }
    }

    /// True once `attempts` since the last reset reached the limit
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self, attempts: u64) -> bool {
        match self.limit {
            Some(limit) => attempts >= limit,
            None => false,
        }
    }
}

/// A validated request, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub target: String,
    pub limits: RateLimitConfig,
}
