use crate::error::NotifyError;
use crate::events::EventKind;

/// One listener that could not be notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchFailure {
    /// Listener that missed the event.
    pub listener_id: String,
    /// Notifier kind the listener asked for.
    pub notifier_kind: String,
    /// Kind of the event being dispatched.
    pub event_kind: EventKind,
    /// Sequence number of the event being dispatched.
    pub seq: u64,
    /// Why the attempt failed.
    pub error: NotifyError,
}

impl DispatchFailure {
    /// True if the notifier kind could not be resolved (no delivery was attempted).
    pub fn is_resolution(&self) -> bool {
        self.error.is_resolution()
    }
}
