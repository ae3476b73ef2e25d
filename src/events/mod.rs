//! Repository lifecycle events.
//!
//! This module holds the event **data model** handed to notifiers:
//! - [`EventKind`] closed classification of lifecycle occurrences
//! - [`Event`] kind + immutable payload, plus ordering/timestamp metadata
//! - [`Payload`] string-keyed JSON object carried by an event
//!
//! Events are built by [`EventFireManager`](crate::EventFireManager), passed by
//! reference through the [`Dispatcher`](crate::Dispatcher) and dropped once every
//! listener has been attempted. Nothing here is persisted.

mod event;

pub use event::{Event, EventKind, Payload, UnknownEventKind, WILDCARD};
