//! # Core notifier trait
//!
//! `Notify` is the extension point for plugging delivery mechanisms into the
//! dispatcher. Each listener names one notifier kind; the
//! [`NotifierRegistry`](crate::NotifierRegistry) maps that kind to an implementation.
//!
//! ## Contract
//! - Return `Err` to report a failed delivery. The dispatcher logs it and moves on to
//!   the next listener; nothing is retried.
//! - Panics are caught by the dispatcher and treated as failed deliveries.
//! - Deliveries may be slow. The dispatcher bounds them with its configured delivery
//!   timeout; implementations should also apply their own I/O timeouts.

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::events::Event;
use crate::listeners::NotifierConfig;

/// Contract for delivery mechanisms.
#[async_trait]
pub trait Notify: Send + Sync + 'static {
    /// Delivers `event` using the listener-provided `config`.
    ///
    /// # Parameters
    /// - `config`: the listener's notifier configuration, verbatim
    /// - `event`: the event being dispatched (does not transfer ownership)
    async fn deliver(&self, config: &NotifierConfig, event: &Event) -> Result<(), NotifyError>;

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
