//! # Dispatcher: one isolated pass over the listeners of an event.
//!
//! ```text
//! dispatch(&event)
//!     │
//!     ├──► ListenerSelector::select(kind) ──── Err ──► FireError::Selection (abort)
//!     │
//!     ├──► listener 1 ──► resolve ──► deliver_once ──► Ok / report failure
//!     ├──► listener 2 ──► resolve ──► deliver_once ──► Ok / report failure
//!     └──► listener N ──► ...
//!           (at most `max_concurrent` in flight)
//! ```
//!
//! ## Rules
//! - Every selected listener is attempted **exactly once**; nothing is retried.
//! - A failure in resolution or delivery is reported to the [`DiagnosticSink`] and
//!   never aborts the pass nor reaches the caller.
//! - Only a listener-store failure is returned as an error.
//! - No ordering across listeners.
//! - No state is shared between passes; concurrent dispatches are independent.

use std::sync::Arc;

use futures::{StreamExt, stream};
use tracing::debug;

use super::{DispatchReport, attempt::deliver_once};
use crate::config::Config;
use crate::diagnostics::{DiagnosticSink, DispatchFailure, TracingSink};
use crate::error::{FireError, NotifyError};
use crate::events::Event;
use crate::listeners::{Listener, ListenerSelector};
use crate::notifiers::NotifierRegistry;

/// Delivers events to matching listeners with per-listener failure isolation.
#[derive(Clone)]
pub struct Dispatcher {
    cfg: Config,
    selector: ListenerSelector,
    registry: Arc<NotifierRegistry>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Dispatcher {
    /// Creates a dispatcher reporting failures to a [`TracingSink`].
    pub fn new(cfg: Config, selector: ListenerSelector, registry: Arc<NotifierRegistry>) -> Self {
        Self {
            cfg,
            selector,
            registry,
            sink: Arc::new(TracingSink::new()),
        }
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Notifier registry used for resolution.
    pub fn registry(&self) -> &NotifierRegistry {
        &self.registry
    }

    /// Delivers `event` to every listener subscribed to its kind or to the wildcard.
    ///
    /// Returns once each selected listener has been attempted. The only error is a
    /// listener-store failure, in which case no listener was attempted.
    pub async fn dispatch(&self, event: &Event) -> Result<DispatchReport, FireError> {
        let listeners = self.selector.select(event.kind).await?;

        let mut report = DispatchReport::new(event.kind, event.seq);
        if listeners.is_empty() {
            debug!(event_type = %event.kind, seq = event.seq, "no listeners for event");
            return Ok(report);
        }

        let limit = self
            .cfg
            .concurrency_limit()
            .unwrap_or(listeners.len())
            .max(1);

        let outcomes: Vec<Result<(), DispatchFailure>> = stream::iter(&listeners)
            .map(|listener| self.attempt(listener, event))
            .buffer_unordered(limit)
            .collect()
            .await;

        for outcome in outcomes {
            report.attempted += 1;
            match outcome {
                Ok(()) => report.delivered += 1,
                Err(failure) => report.failures.push(failure),
            }
        }

        debug!(
            event_type = %event.kind,
            seq = event.seq,
            attempted = report.attempted,
            delivered = report.delivered,
            failed = report.failures.len(),
            "event dispatched"
        );
        Ok(report)
    }

    /// Resolves and invokes one listener's notifier; failures are reported as they happen.
    async fn attempt(&self, listener: &Listener, event: &Event) -> Result<(), DispatchFailure> {
        let outcome = match self.registry.resolve(listener.notifier_kind()) {
            Ok(notifier) => {
                deliver_once(
                    notifier.as_ref(),
                    listener.notifier_config(),
                    event,
                    self.cfg.delivery_timeout(),
                )
                .await
            }
            Err(e) => Err(e),
        };

        outcome.map_err(|error: NotifyError| {
            let failure = DispatchFailure {
                listener_id: listener.id().to_string(),
                notifier_kind: listener.notifier_kind().to_string(),
                event_kind: event.kind,
                seq: event.seq,
                error,
            };
            self.sink.report(&failure);
            failure
        })
    }
}
