//! # Diagnostic channel for contained dispatch failures.
//!
//! Per-listener failures never reach the caller of a `fire_*` operation. They are
//! handed to a [`DiagnosticSink`] held by the [`Dispatcher`](crate::Dispatcher).
//!
//! - [`DispatchFailure`] what failed, for which listener and event
//! - [`DiagnosticSink`] where failures go
//! - [`TracingSink`] default sink writing to the `tracing` log
//!
//! Tests substitute a capturing sink to assert on reported failures.

mod failure;
mod sink;
mod tracing_sink;

pub use failure::DispatchFailure;
pub use sink::DiagnosticSink;
pub use tracing_sink::TracingSink;
