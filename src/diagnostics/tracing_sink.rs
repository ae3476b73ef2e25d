//! # TracingSink — default diagnostic sink
//!
//! Writes each failure as one structured `tracing` event:
//! - unknown notifier kind → `WARN`, carries the offending kind
//! - failed / timed-out / panicked delivery → `ERROR`, carries the notifier kind
//!
//! ## Example output
//! ```text
//! WARN repovent: no notifier registered for listener listener_id=l1 notifier_kind=amqp event_type=repo.sync.start seq=4
//! ERROR repovent: notifier failed listener_id=l2 notifier_kind=http event_type=repo.sync.start seq=4 label=notifier_timeout error=timeout: 5s
//! ```

use tracing::{error, warn};

use super::{DiagnosticSink, DispatchFailure};

/// Sink forwarding failures to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Construct a new [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, f: &DispatchFailure) {
        if f.is_resolution() {
            warn!(
                target: "repovent",
                listener_id = %f.listener_id,
                notifier_kind = %f.notifier_kind,
                event_type = %f.event_kind,
                seq = f.seq,
                "no notifier registered for listener"
            );
        } else {
            error!(
                target: "repovent",
                listener_id = %f.listener_id,
                notifier_kind = %f.notifier_kind,
                event_type = %f.event_kind,
                seq = f.seq,
                label = f.error.as_label(),
                error = %f.error.as_message(),
                "notifier failed"
            );
        }
    }
}
