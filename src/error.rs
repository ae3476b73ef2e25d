//! Error types used by the dispatcher, the listener store and notifiers.
//!
//! - [`FireError`] — the only error a `fire_*` call can return (listener selection failed).
//! - [`NotifyError`] — per-listener resolution/delivery failures; always contained.
//! - [`StoreError`] — raised by a [`ListenerStore`](crate::ListenerStore) implementation.
//! - [`ListenerError`] — invalid listener records.
//!
//! Every enum provides `as_label` (stable snake_case for logs) and, where useful,
//! `as_message`.

use std::time::Duration;
use thiserror::Error;

/// # Errors that abort a single fire call.
///
/// Without listener data no dispatch can proceed, so this is the one failure
/// that crosses the dispatch boundary.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FireError {
    /// The listener store could not be queried.
    #[error("listener selection failed: {0}")]
    Selection(#[from] StoreError),
}

impl FireError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use repovent::{FireError, StoreError};
    ///
    /// let err = FireError::from(StoreError::Unavailable { reason: "down".into() });
    /// assert_eq!(err.as_label(), "fire_selection_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FireError::Selection(_) => "fire_selection_failed",
        }
    }
}

/// # Errors produced by the listener store.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store is unreachable (connection refused, pool exhausted, ...).
    #[error("listener store unavailable: {reason}")]
    Unavailable {
        /// The underlying error message.
        reason: String,
    },

    /// Store answered but the query failed.
    #[error("listener query failed: {reason}")]
    Query {
        /// The underlying error message.
        reason: String,
    },
}

impl StoreError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            StoreError::Unavailable { .. } => "store_unavailable",
            StoreError::Query { .. } => "store_query_failed",
        }
    }
}

/// # Errors produced while resolving or invoking a notifier.
///
/// These never escape [`Dispatcher::dispatch`](crate::Dispatcher::dispatch);
/// they are handed to the [`DiagnosticSink`](crate::DiagnosticSink) instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// No notifier is registered under this kind.
    #[error("unknown notifier kind: {kind}")]
    UnknownNotifier {
        /// The offending notifier kind.
        kind: String,
    },

    /// The notifier ran and reported a failure.
    #[error("delivery failed: {reason}")]
    Delivery {
        /// The underlying error message.
        reason: String,
    },

    /// The notifier did not finish within the configured delivery timeout.
    #[error("delivery timed out after {timeout:?}")]
    Timeout {
        /// The timeout that was exceeded.
        timeout: Duration,
    },

    /// The notifier panicked.
    #[error("notifier panicked: {info}")]
    Panicked {
        /// Panic payload, if it was a string.
        info: String,
    },
}

impl NotifyError {
    /// Shorthand for [`NotifyError::Delivery`].
    pub fn delivery(reason: impl Into<String>) -> Self {
        NotifyError::Delivery {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use repovent::NotifyError;
    ///
    /// let err = NotifyError::UnknownNotifier { kind: "amqp".into() };
    /// assert_eq!(err.as_label(), "notifier_unknown");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::UnknownNotifier { .. } => "notifier_unknown",
            NotifyError::Delivery { .. } => "notifier_delivery_failed",
            NotifyError::Timeout { .. } => "notifier_timeout",
            NotifyError::Panicked { .. } => "notifier_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::UnknownNotifier { kind } => format!("unknown kind: {kind}"),
            NotifyError::Delivery { reason } => format!("error: {reason}"),
            NotifyError::Timeout { timeout } => format!("timeout: {timeout:?}"),
            NotifyError::Panicked { info } => format!("panic: {info}"),
        }
    }

    /// True when the failure happened before the notifier was invoked.
    pub fn is_resolution(&self) -> bool {
        matches!(self, NotifyError::UnknownNotifier { .. })
    }
}

/// # Errors produced when building a listener record.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// A listener must subscribe to at least one event kind (or the wildcard).
    #[error("listener {id} has no event kinds")]
    NoEventKinds {
        /// The listener id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_into_selection() {
        let err: FireError = StoreError::Query {
            reason: "bad filter".into(),
        }
        .into();
        assert!(matches!(err, FireError::Selection(StoreError::Query { .. })));
        assert_eq!(err.to_string(), "listener selection failed: listener query failed: bad filter");
    }

    #[test]
    fn test_only_unknown_kind_is_resolution() {
        assert!(NotifyError::UnknownNotifier { kind: "x".into() }.is_resolution());
        assert!(!NotifyError::delivery("boom").is_resolution());
        assert!(
            !NotifyError::Timeout {
                timeout: Duration::from_secs(1)
            }
            .is_resolution()
        );
    }
}
