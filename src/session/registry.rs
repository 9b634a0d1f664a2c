//! Session Registry
//!
//! Counts open page sessions and enforces the session limit. Sessions own
//! their dashboards outright; the registry only tracks how many exist.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Tracks live page sessions
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    active: Arc<AtomicUsize>,
    opened: Arc<AtomicU64>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            active: Arc::new(AtomicUsize::new(0)),
            opened: Arc::new(AtomicU64::new(0)),
            max_sessions,
        }
    }

    /// Reserve a slot for a new session
    ///
    /// The slot is released when the returned guard is dropped.
    pub fn try_open(&self) -> Result<SessionGuard, SessionError> {
        let reserved = self
            .active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.max_sessions).then_some(n + 1)
            });

        match reserved {
            Ok(_) => {
                self.opened.fetch_add(1, Ordering::Relaxed);
                Ok(SessionGuard {
                    active: Arc::clone(&self.active),
                })
            }
            Err(_) => Err(SessionError::TooManySessions(self.max_sessions)),
        }
    }

    /// Sessions currently open
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Sessions opened since startup
    pub fn total_opened(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }
}

/// Holds one session slot until dropped
#[derive(Debug)]
pub struct SessionGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Session errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Too many open sessions (limit {0})")]
    TooManySessions(usize),
}
