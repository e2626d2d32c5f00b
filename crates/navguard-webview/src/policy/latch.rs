//! One-shot allowance state.

use std::sync::atomic::{AtomicBool, Ordering};

/// Observable state of a [`OneShotLatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    /// The single allowance is still available.
    Fresh,
    /// The allowance was spent. Terminal.
    Consumed,
}

/// Grants exactly one pass for its whole lifetime.
///
/// `try_consume` is a single compare-and-swap, so at most one caller ever
/// observes `true` even if a host delivers events from several threads.
#[derive(Debug, Default)]
pub struct OneShotLatch {
    consumed: AtomicBool,
}

impl OneShotLatch {
    pub const fn new() -> Self {
        Self {
            consumed: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> LatchState {
        if self.is_consumed() {
            LatchState::Consumed
        } else {
            LatchState::Fresh
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.load(Ordering::Acquire)
    }

    /// Transition `Fresh -> Consumed`. Returns `true` only for the caller
    /// that performed the transition.
    pub fn try_consume(&self) -> bool {
        self.consumed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
