//! # Listener selection for one event kind.
//!
//! [`ListenerSelector`] wraps a [`ListenerStore`] and returns the listeners an event
//! must be delivered to.
//!
//! ## Rules
//! - No match → empty vector (not an error).
//! - Store error → propagated unchanged; the caller aborts that single fire.
//! - Records are re-checked with [`Listener::matches`], so a store whose query is
//!   looser than requested cannot widen delivery.
//! - Order is whatever the store returns and carries no meaning.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{Listener, ListenerStore};
use crate::error::StoreError;
use crate::events::EventKind;

/// Selects listeners by event kind.
#[derive(Clone)]
pub struct ListenerSelector {
    store: Arc<dyn ListenerStore>,
}

impl ListenerSelector {
    /// Creates a selector over `store`.
    pub fn new(store: Arc<dyn ListenerStore>) -> Self {
        Self { store }
    }

    /// Listeners subscribed to `kind` or the wildcard.
    pub async fn select(&self, kind: EventKind) -> Result<Vec<Listener>, StoreError> {
        let mut listeners = self.store.find_by_kind(kind).await.inspect_err(|e| {
            warn!(kind = %kind, error = %e, label = e.as_label(), "listener selection failed");
        })?;

        let before = listeners.len();
        listeners.retain(|l| l.matches(kind));
        if listeners.len() != before {
            debug!(
                kind = %kind,
                dropped = before - listeners.len(),
                "store returned listeners not subscribed to this kind"
            );
        }
        Ok(listeners)
    }
}
