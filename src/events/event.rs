//! # Events fired around repository sync and publish actions.
//!
//! The [`EventKind`] enum is the closed set of lifecycle occurrences. Each kind has a
//! stable dotted identifier (`repo.sync.start`, ...) which is what listeners store in
//! their subscriptions.
//!
//! The [`Event`] struct carries the kind, an immutable [`Payload`] shared behind an
//! `Arc`, and metadata (`seq`, `at`) used only for diagnostics.
//!
//! ## Ordering
//! Each event has a process-wide sequence number (`seq`) that increases monotonically.
//! Delivery order across listeners is **not** guaranteed; use `seq` to correlate.
//!
//! ## Example
//! ```rust
//! use repovent::{Event, EventKind};
//! use serde_json::json;
//!
//! let ev = Event::with_json(EventKind::RepoSyncStarted, json!({ "repo_id": "zoo" }));
//!
//! assert_eq!(ev.kind, EventKind::RepoSyncStarted);
//! assert_eq!(ev.payload["repo_id"], "zoo");
//! assert_eq!(ev.data()["event_type"], "repo.sync.start");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Subscription token matching every event kind, present or future.
pub const WILDCARD: &str = "*";

/// Event payload: string keys to arbitrary JSON values.
pub type Payload = Map<String, Value>;

/// Classification of repository lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A repository sync has started.
    ///
    /// Payload: `{"repo_id": string}`
    #[serde(rename = "repo.sync.start")]
    RepoSyncStarted,

    /// A repository sync has finished (successfully or not).
    ///
    /// Payload: the sync result record without its internal identifier.
    #[serde(rename = "repo.sync.finish")]
    RepoSyncFinished,

    /// A distributor has started publishing a repository.
    ///
    /// Payload: `{"repo_id": string, "distributor_id": string}`
    #[serde(rename = "repo.publish.start")]
    RepoPublishStarted,

    /// A distributor has finished publishing a repository.
    ///
    /// Payload: the publish result record without its internal identifier.
    #[serde(rename = "repo.publish.finish")]
    RepoPublishFinished,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 4] = [
        EventKind::RepoSyncStarted,
        EventKind::RepoSyncFinished,
        EventKind::RepoPublishStarted,
        EventKind::RepoPublishFinished,
    ];

    /// Stable identifier stored in listener subscriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RepoSyncStarted => "repo.sync.start",
            EventKind::RepoSyncFinished => "repo.sync.finish",
            EventKind::RepoPublishStarted => "repo.publish.start",
            EventKind::RepoPublishFinished => "repo.publish.finish",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an identifier that names no [`EventKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown event kind: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// Lifecycle event with its payload.
///
/// - `seq`: monotonic process-wide sequence
/// - `at`: wall-clock timestamp
/// - `payload`: shared, never mutated after construction
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Kind-specific data.
    pub payload: Arc<Payload>,
}

impl Event {
    /// Creates a new event with the current timestamp and next sequence number.
    pub fn new(kind: EventKind, payload: Payload) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            payload: Arc::new(payload),
        }
    }

    /// Creates an event from a JSON value.
    ///
    /// Objects become the payload as-is; any other value is wrapped under `"value"`.
    pub fn with_json(kind: EventKind, value: Value) -> Self {
        let payload = match value {
            Value::Object(map) => map,
            other => {
                let mut map = Payload::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Self::new(kind, payload)
    }

    /// Wire representation handed to notifiers that serialize events.
    ///
    /// `{"event_type": "<identifier>", "payload": {...}}`
    pub fn data(&self) -> Value {
        json!({
            "event_type": self.kind.as_str(),
            "payload": Value::Object(self.payload.as_ref().clone()),
        })
    }
}
