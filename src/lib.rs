//! # repovent
//!
//! **repovent** fires repository lifecycle events (sync and publish, started and
//! finished) to every registered listener interested in them.
//!
//! Firing is best-effort and isolated: one listener's misconfiguration, failure,
//! timeout or panic never affects delivery to the others and never propagates back
//! to the action that triggered the event.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐
//!     │  sync action │   │publish action│
//!     └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventFireManager                                                 │
//! │  - fire_repo_sync_started / _finished                             │
//! │  - fire_repo_publish_started / _finished                          │
//! │  (shapes payload, strips internal id, builds Event)               │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Dispatcher                                                       │
//! │  - ListenerSelector ──► ListenerStore (kind OR "*")               │
//! │  - NotifierRegistry (notifier_kind ──► Notify)                    │
//! │  - DiagnosticSink   (contained failures)                          │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!   ┌──────────┐       ┌──────────┐       ┌──────────┐
//!   │listener 1│       │listener 2│       │listener N│
//!   │ resolve  │       │ resolve  │       │ resolve  │
//!   │ deliver  │       │ deliver  │       │ deliver  │
//!   └────┬─────┘       └────┬─────┘       └────┬─────┘
//!        │ Ok               │ Err/timeout/panic│ unknown kind
//!        ▼                  ▼                  ▼
//!    delivered       DiagnosticSink::report (never reaches the caller)
//! ```
//!
//! ### Failure handling
//! ```text
//! fire_*()
//!   ├─► select listeners ── store error ──► Err(FireError::Selection)
//!   └─► for each listener (at most `max_concurrent` in flight):
//!         ├─ resolve notifier_kind ── unknown ──► report, next
//!         ├─ deliver (timeout, catch_unwind) ── Err ──► report, next
//!         └─ Ok ──► next
//!   ─► Ok(())
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                            |
//! |-------------------|---------------------------------------------------------------|-----------------------------------------------|
//! | **Firing**        | One operation per lifecycle event, payload shaping.           | [`EventFireManager`]                          |
//! | **Events**        | Closed set of kinds with stable identifiers, JSON payloads.   | [`Event`], [`EventKind`], [`Payload`]         |
//! | **Listeners**     | Subscription records, store seam, in-memory store.            | [`Listener`], [`ListenerStore`]               |
//! | **Notifiers**     | Delivery trait, closure notifiers, startup-built registry.    | [`Notify`], [`NotifierFn`], [`NotifierRegistry`] |
//! | **Diagnostics**   | Explicit sink for contained failures.                         | [`DiagnosticSink`], [`TracingSink`]           |
//! | **Errors**        | Typed errors for selection, resolution and delivery.          | [`FireError`], [`NotifyError`]                |
//! | **Configuration** | Delivery timeout, concurrency, internal id key.               | [`Config`]                                    |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use repovent::{
//!     Event, EventFireManager, InMemoryListenerStore, Listener, NotifierConfig, NotifierFn,
//!     NotifierRegistry, NotifyError,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Listeners normally come from the platform's database.
//!     let store = Arc::new(InMemoryListenerStore::with_listeners([
//!         Listener::new("ops", ["repo.sync.finish"], "stdout", NotifierConfig::new())?,
//!     ]));
//!
//!     // Notifier kinds are registered once at startup.
//!     let registry = NotifierRegistry::builder()
//!         .register(
//!             "stdout",
//!             NotifierFn::arc("stdout", |_cfg: NotifierConfig, ev: Event| async move {
//!                 println!("{}", ev.data());
//!                 Ok::<_, NotifyError>(())
//!             }),
//!         )
//!         .build();
//!
//!     let manager = EventFireManager::builder(store).with_registry(registry).build();
//!
//!     let result = json!({ "_id": "65f0", "repo_id": "zoo", "result": "success" });
//!     if let serde_json::Value::Object(sync_result) = result {
//!         manager.fire_repo_sync_finished(sync_result).await?;
//!     }
//!     Ok(())
//! }
//! ```
mod config;
mod diagnostics;
mod dispatch;
mod error;
mod events;
mod listeners;
mod manager;
mod notifiers;

// ---- Public re-exports ----

pub use config::Config;
pub use diagnostics::{DiagnosticSink, DispatchFailure, TracingSink};
pub use dispatch::{DispatchReport, Dispatcher};
pub use error::{FireError, ListenerError, NotifyError, StoreError};
pub use events::{Event, EventKind, Payload, UnknownEventKind, WILDCARD};
pub use listeners::{InMemoryListenerStore, Listener, ListenerSelector, ListenerStore, NotifierConfig};
pub use manager::{EventFireManager, EventFireManagerBuilder};
pub use notifiers::{LogNotifier, NotifierFn, NotifierRegistry, NotifierRegistryBuilder, Notify};
