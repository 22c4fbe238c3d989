// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Error threshold circuit breaking for reconciliation retries.

use crate::constants::{backoff, ERROR_THRESHOLD};
use crate::state::ReconciliationState;
use std::time::Duration;

/// What a reconciler should do with a failing resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep retrying automatically
    Retry,
    /// Stop retrying and surface the failure
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBudget {
    pub threshold: u32,
}

impl Default for ErrorBudget {
    fn default() -> Self {
        Self {
            threshold: ERROR_THRESHOLD,
        }
    }
}

impl ErrorBudget {
    /// True once `error_count` reached the threshold. Negative counts are treated as 0.
    pub fn should_block(&self, error_count: i64) -> bool {
        error_count.max(0) >= i64::from(self.threshold)
    }

    pub fn verdict(&self, state: &ReconciliationState) -> Verdict {
        if self.should_block(i64::from(state.error_count)) {
            Verdict::Blocked
        } else {
            Verdict::Retry
        }
    }

    /// Requeue delay after `error_count` consecutive failures.
    /// Doubles from `backoff::INITIAL_SECS` and is capped at `backoff::MAX_SECS`.
    pub fn requeue_after(&self, error_count: u32) -> Duration {
        let exponent = error_count.saturating_sub(1).min(16);
        let secs = backoff::INITIAL_SECS
            .saturating_mul(1u64 << exponent)
            .min(backoff::MAX_SECS);
        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_block_below_threshold() {
        let budget = ErrorBudget::default();
        for count in 0..10 {
            assert!(!budget.should_block(count), "count {}", count);
        }
    }

    #[test]
    fn test_should_block_at_and_above_threshold() {
        let budget = ErrorBudget::default();
        for count in [10, 11, 50, i64::MAX] {
            assert!(budget.should_block(count), "count {}", count);
        }
    }

    #[test]
    fn test_should_block_boundary() {
        let budget = ErrorBudget::default();
        assert!(!budget.should_block(0));
        assert!(!budget.should_block(9));
        assert!(budget.should_block(10));
    }

    #[test]
    fn test_negative_count_is_not_blocked() {
        let budget = ErrorBudget::default();
        assert!(!budget.should_block(-1));
        assert!(!budget.should_block(i64::MIN));
    }

    #[test]
    fn test_custom_threshold() {
        let budget = ErrorBudget { threshold: 3 };
        assert!(!budget.should_block(2));
        assert!(budget.should_block(3));
    }

    #[test]
    fn test_verdict_from_state() {
        let budget = ErrorBudget::default();
        let mut state = ReconciliationState::default();
        assert_eq!(budget.verdict(&state), Verdict::Retry);

        for _ in 0..9 {
            state.record_failure("provision");
        }
        assert_eq!(budget.verdict(&state), Verdict::Retry);

        state.record_failure("provision");
        assert_eq!(budget.verdict(&state), Verdict::Blocked);
    }

    #[test]
    fn test_requeue_after_backs_off_exponentially() {
        let budget = ErrorBudget::default();
        assert_eq!(budget.requeue_after(0), Duration::from_secs(10));
        assert_eq!(budget.requeue_after(1), Duration::from_secs(10));
        assert_eq!(budget.requeue_after(2), Duration::from_secs(20));
        assert_eq!(budget.requeue_after(3), Duration::from_secs(40));
        assert_eq!(budget.requeue_after(6), Duration::from_secs(300));
        assert_eq!(budget.requeue_after(u32::MAX), Duration::from_secs(300));
    }
}
