//! Mutable failover state, guarded by the controller's mutex

use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

use super::types::SwitchEvent;

/// Outcome of reporting a capacity failure against a chain position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Advance {
    /// This report moved `current` forward one step
    Switched { from: usize, to: usize },
    /// Another caller already moved `current`; use it as-is
    AlreadyMoved { to: usize },
    /// The failed provider is the last in the chain
    Exhausted,
}

/// Chain position plus the revert timer. Index 0 is always the original provider.
#[derive(Debug)]
pub(super) struct FailoverState {
    pub current: usize,
    pub switched_at: Option<Instant>,
    pub history: VecDeque<SwitchEvent>,
    max_history: usize,
}

impl FailoverState {
    pub fn new(max_history: usize) -> Self {
        Self {
            current: 0,
            switched_at: None,
            history: VecDeque::new(),
            max_history,
        }
    }

    /// Whether the cooldown has elapsed since the last switch
    pub fn revert_due(&self, now: Instant, cooldown: Duration) -> bool {
        self.switched_at
            .is_some_and(|at| now.saturating_duration_since(at) >= cooldown)
    }

    /// Restore the original provider and clear the timer.
    ///
    /// Returns the index that was current if it was not already the original.
    pub fn revert(&mut self) -> Option<usize> {
        let previous = self.current;
        self.current = 0;
        self.switched_at = None;
        (previous != 0).then_some(previous)
    }

    /// Move forward one step if `tried` is still current and has a successor
    pub fn advance_from(&mut self, tried: usize, chain_len: usize, now: Instant) -> Advance {
        if self.current != tried {
            return Advance::AlreadyMoved { to: self.current };
        }

        let next = tried + 1;
        if next >= chain_len {
            return Advance::Exhausted;
        }

        self.current = next;
        self.switched_at = Some(now);
        Advance::Switched {
            from: tried,
            to: next,
        }
    }

    pub fn record(&mut self, event: SwitchEvent) {
        self.history.push_back(event);
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
    }
}
