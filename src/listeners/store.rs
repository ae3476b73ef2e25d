//! # Listener store seam
//!
//! `ListenerStore` is the query interface to wherever listeners are persisted.
//! The crate never writes through it.
//!
//! ## Contract
//! - Return every listener whose subscription contains `kind` **or** the wildcard.
//! - An empty result is `Ok(vec![])`, not an error.
//! - Return `Err` only when the store itself cannot answer; that aborts the fire call.

use async_trait::async_trait;

use super::Listener;
use crate::error::StoreError;
use crate::events::EventKind;

/// Read access to persisted listeners.
#[async_trait]
pub trait ListenerStore: Send + Sync + 'static {
    /// Listeners subscribed to `kind` or to every kind.
    async fn find_by_kind(&self, kind: EventKind) -> Result<Vec<Listener>, StoreError>;
}
