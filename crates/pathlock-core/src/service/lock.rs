// In-memory advisory lock registry
// Provides non-blocking acquire/release of string-keyed locks

use std::collections::HashSet;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::model::LockOutcome;

/// Registry of currently held locks.
///
/// A key is held iff a `try_acquire` on it succeeded and no `release` on it has
/// happened since. Every read and write goes through the single mutex guarding
/// the whole set, so check-then-insert is atomic across callers.
#[derive(Debug, Default)]
pub struct LockRegistry {
    locked_paths: Mutex<HashSet<String>>,
}

impl LockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        info!("LockRegistry initialized");
        Self::default()
    }

    /// Try to acquire the lock for the given key
    ///
    /// Returns `true` if the lock was acquired, `false` if it is already held.
    /// Never waits for the current holder.
    pub fn try_acquire(&self, key: &str) -> bool {
        let mut locked = self.locked_paths.lock();
        if locked.contains(key) {
            debug!(key = %key, "Lock already held");
            return false;
        }
        locked.insert(key.to_string());
        drop(locked);

        info!(key = %key, "just locked");
        true
    }

    /// Acquire the lock for the given key, reporting the boundary outcome
    pub fn acquire(&self, key: &str) -> LockOutcome {
        if self.try_acquire(key) {
            LockOutcome::Acquired
        } else {
            LockOutcome::AlreadyLocked
        }
    }

    /// Release the lock for the given key
    ///
    /// Releasing a key that is not held is a no-op. There is no ownership
    /// check: any caller may release any key. Returns whether a held key was
    /// removed.
    pub fn release(&self, key: &str) -> bool {
        let removed = self.locked_paths.lock().remove(key);
        if removed {
            info!(key = %key, "unlocked");
        } else {
            debug!(key = %key, "Release of unheld key ignored");
        }
        removed
    }

    /// Snapshot of the currently held keys, in no particular order
    pub fn list_held(&self) -> Vec<String> {
        self.locked_paths.lock().iter().cloned().collect()
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.locked_paths.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.locked_paths.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked_paths.lock().is_empty()
    }
}
