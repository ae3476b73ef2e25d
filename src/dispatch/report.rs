use crate::diagnostics::DispatchFailure;
use crate::events::EventKind;

/// Summary of one dispatch pass.
///
/// `attempted == delivered + failures.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Kind of the dispatched event.
    pub kind: EventKind,
    /// Sequence number of the dispatched event.
    pub seq: u64,
    /// Listeners selected and attempted.
    pub attempted: usize,
    /// Listeners whose notifier returned `Ok`.
    pub delivered: usize,
    /// Contained failures, in completion order.
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub(crate) fn new(kind: EventKind, seq: u64) -> Self {
        Self {
            kind,
            seq,
            attempted: 0,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// True if every selected listener was notified.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
