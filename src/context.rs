//! Request Context
//!
//! Cancellation-bearing context threaded through projection into
//! computed-field handlers. Carries a request ID for tracing and an
//! optional deadline. Clones share the same cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use uuid::Uuid;

/// Reasons a context is done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The caller canceled the request
    #[error("context canceled")]
    Canceled,

    /// The configured deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Context carried through a projection run
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request ID for tracing
    pub request_id: Uuid,

    /// Start time for duration tracking
    started_at: Instant,

    /// Optional absolute deadline
    deadline: Option<Instant>,

    /// Cancellation flag shared with all clones and handles
    canceled: Arc<AtomicBool>,
}

impl RequestContext {
    /// Create a context with no deadline
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            started_at: Instant::now(),
            deadline: None,
            canceled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a context that expires after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Create a context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::new()
        }
    }

    /// Get a handle that can cancel this context from another owner
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            canceled: Arc::clone(&self.canceled),
        }
    }

    /// Why the context is done, if it is. Cancellation wins over an
    /// expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.canceled.load(Ordering::Relaxed) {
            return Some(ContextError::Canceled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Some(ContextError::DeadlineExceeded);
            }
        }
        None
    }

    /// Returns true if the context is canceled or past its deadline
    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// Get elapsed time since creation
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Clonable handle that cancels its originating context
#[derive(Debug, Clone)]
pub struct CancelHandle {
    canceled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Cancel the context. Idempotent.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }
}
