//! # Diagnostic sink trait
//!
//! Called inline by the dispatcher once per failed listener attempt. Implementations
//! must be cheap and must not panic; anything slow (shipping to a remote collector)
//! belongs behind a channel.

use super::DispatchFailure;

/// Receiver of contained dispatch failures.
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Records one failed listener attempt.
    fn report(&self, failure: &DispatchFailure);
}
