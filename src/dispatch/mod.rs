//! Dispatch loop: listener selection, notifier resolution, isolated delivery.
//!
//! - [`Dispatcher`] runs one pass over the listeners matching an event
//! - [`DispatchReport`] summary of that pass
//!
//! Internal modules:
//! - [`attempt`]: one delivery with timeout and panic isolation;
//! - [`dispatcher`]: the per-event loop;
//! - [`report`]: pass summary.

mod attempt;
mod dispatcher;
mod report;

pub use dispatcher::Dispatcher;
pub use report::DispatchReport;
