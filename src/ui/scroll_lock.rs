// SPDX-License-Identifier: MPL-2.0
//! Background scroll suspension while a modal viewer is open.
//!
//! The application owns one [`ScrollGate`]. Each modal viewer holds a
//! [`ScrollLock`] taken from it; pages render without a scrollable while any
//! lock is alive. Releasing happens in `Drop`, so closing the modal, leaving
//! the screen or unwinding all restore scrolling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of live [`ScrollLock`]s.
#[derive(Debug, Clone, Default)]
pub struct ScrollGate {
    holders: Arc<AtomicUsize>,
}

impl ScrollGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends background scrolling until the returned guard is dropped.
    #[must_use]
    pub fn lock(&self) -> ScrollLock {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(holders = previous + 1, "background scrolling suspended");
        ScrollLock {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns true while at least one lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }
}

/// RAII guard returned by [`ScrollGate::lock`].
#[derive(Debug)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::debug!("background scrolling restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gate_is_unlocked() {
        assert!(!ScrollGate::new().is_locked());
    }

    #[test]
    fn lock_is_released_on_drop() {
        let gate = ScrollGate::new();
        let lock = gate.lock();
        assert!(gate.is_locked());
        drop(lock);
        assert!(!gate.is_locked());
    }

    #[test]
    fn nested_locks_release_independently() {
        let gate = ScrollGate::new();
        let first = gate.lock();
        let second = gate.lock();
        drop(first);
        assert!(gate.is_locked());
        drop(second);
        assert!(!gate.is_locked());
    }

    #[test]
    fn clones_share_the_same_counter() {
        let gate = ScrollGate::new();
        let other = gate.clone();
        let _lock = other.lock();
        assert!(gate.is_locked());
    }

    #[test]
    fn lock_is_released_when_unwinding() {
        let gate = ScrollGate::new();
        let inner = gate.clone();
        let result = std::panic::catch_unwind(move || {
            let _lock = inner.lock();
            panic!("viewer crashed");
        });
        assert!(result.is_err());
        assert!(!gate.is_locked());
    }
}
