//! # Dispatcher configuration.
//!
//! Provides [`Config`], the settings shared by the
//! [`EventFireManager`](crate::EventFireManager) and [`Dispatcher`](crate::Dispatcher).
//!
//! The struct deserializes with per-field defaults so a host can embed it in its own
//! configuration file:
//! ```rust
//! use repovent::Config;
//!
//! let cfg: Config = serde_json::from_str(r#"{ "delivery_timeout_ms": 5000 }"#).unwrap();
//! assert_eq!(cfg.max_concurrent, 1);
//! assert_eq!(cfg.internal_id_key, "_id");
//! ```
//!
//! ## Sentinel values
//! - `max_concurrent = 0` → unlimited (every matched listener attempted at once)
//! - `delivery_timeout_ms = 0` → no timeout imposed by the dispatcher

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runtime configuration for event dispatch.
///
/// ## Field semantics
/// - `delivery_timeout_ms`: upper bound for a single notifier delivery (`0` = none)
/// - `max_concurrent`: listener attempts in flight per dispatch (`0` = unlimited, `1` = sequential)
/// - `internal_id_key`: store-internal key stripped from sync/publish result payloads
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum time a single delivery may take before it counts as failed.
    ///
    /// A timed-out delivery is reported like any other failure; the remaining
    /// listeners are still attempted.
    pub delivery_timeout_ms: u64,

    /// Maximum number of listener attempts running concurrently within one dispatch.
    pub max_concurrent: usize,

    /// Key of the store's internal record identifier in result payloads.
    pub internal_id_key: String,
}

impl Config {
    /// Returns the per-dispatch concurrency limit as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → at most `n` attempts in flight
    #[inline]
    pub fn concurrency_limit(&self) -> Option<usize> {
        if self.max_concurrent == 0 {
            None
        } else {
            Some(self.max_concurrent)
        }
    }

    /// Returns the delivery timeout as an `Option`.
    ///
    /// - `None` → no timeout
    /// - `Some(d)` → applied to every delivery
    #[inline]
    pub fn delivery_timeout(&self) -> Option<Duration> {
        if self.delivery_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.delivery_timeout_ms))
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `delivery_timeout_ms = 0` (the surrounding system supplies timeouts)
    /// - `max_concurrent = 1` (listeners attempted one after another)
    /// - `internal_id_key = "_id"`
    fn default() -> Self {
        Self {
            delivery_timeout_ms: 0,
            max_concurrent: 1,
            internal_id_key: "_id".to_string(),
        }
    }
}
