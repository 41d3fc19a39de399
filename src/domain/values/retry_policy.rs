use std::time::Duration;

/// Bounded retry for outbound calls. Attempts are counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Result<Self, String> {
        if max_attempts == 0 {
            return Err("RetryPolicy needs at least one attempt".to_string());
        }
        Ok(RetryPolicy {
            max_attempts,
            backoff,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fixed delay between attempts.
    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Whether another attempt is allowed after `attempt` failed.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 2,
            backoff: Duration::ZERO,
        }
    }
}
