//! # Fire lifecycle events to their listeners.
//!
//! Each `fire_*` operation shapes an action's raw data into the canonical payload for
//! its [`EventKind`] and dispatches the event.
//!
//! | Operation                      | Kind                  | Payload                              |
//! |--------------------------------|-----------------------|--------------------------------------|
//! | `fire_repo_sync_started`       | `repo.sync.start`     | `{"repo_id"}`                        |
//! | `fire_repo_sync_finished`      | `repo.sync.finish`    | sync result without internal id      |
//! | `fire_repo_publish_started`    | `repo.publish.start`  | `{"repo_id", "distributor_id"}`      |
//! | `fire_repo_publish_finished`   | `repo.publish.finish` | publish result without internal id   |
//!
//! ## Failure contract
//! Firing never fails because of a listener: unknown notifier kinds, notifier errors,
//! timeouts and panics are reported to the diagnostic sink and swallowed. The only
//! error returned is [`FireError::Selection`], when the listener store cannot answer.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use repovent::{EventFireManager, InMemoryListenerStore, Listener, LogNotifier, NotifierConfig, NotifierRegistry};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryListenerStore::with_listeners([
//!         Listener::new("audit", ["*"], "log", NotifierConfig::new())?,
//!     ]));
//!     let registry = NotifierRegistry::builder()
//!         .register("log", Arc::new(LogNotifier::new()))
//!         .build();
//!
//!     let manager = EventFireManager::builder(store).with_registry(registry).build();
//!     manager.fire_repo_sync_started("zoo").await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use serde_json::Value;

use super::EventFireManagerBuilder;
use crate::{
    dispatch::{DispatchReport, Dispatcher},
    error::FireError,
    events::{Event, EventKind, Payload},
    listeners::ListenerStore,
};

/// Entry point used by sync/publish code to announce lifecycle events.
///
/// Cheap to clone; clones share the registry and store.
#[derive(Clone)]
pub struct EventFireManager {
    dispatcher: Dispatcher,
}

impl EventFireManager {
    /// Starts a builder reading listeners from `store`.
    pub fn builder(store: Arc<dyn ListenerStore>) -> EventFireManagerBuilder {
        EventFireManagerBuilder::new(store)
    }

    /// Wraps an already configured dispatcher.
    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Fires an event indicating the given repository has started a sync.
    pub async fn fire_repo_sync_started(&self, repo_id: &str) -> Result<(), FireError> {
        let mut payload = Payload::new();
        payload.insert("repo_id".into(), Value::from(repo_id));
        self.fire_kind(EventKind::RepoSyncStarted, payload).await
    }

    /// Fires an event indicating the given repository has completed a sync.
    ///
    /// `sync_result` is the stored sync record (outcome, timestamps, importer report);
    /// its internal identifier key is removed before dispatch.
    pub async fn fire_repo_sync_finished(&self, sync_result: Payload) -> Result<(), FireError> {
        let payload = self.strip_internal_id(sync_result);
        self.fire_kind(EventKind::RepoSyncFinished, payload).await
    }

    /// Fires an event indicating a distributor has started publishing the repository.
    pub async fn fire_repo_publish_started(
        &self,
        repo_id: &str,
        distributor_id: &str,
    ) -> Result<(), FireError> {
        let mut payload = Payload::new();
        payload.insert("repo_id".into(), Value::from(repo_id));
        payload.insert("distributor_id".into(), Value::from(distributor_id));
        self.fire_kind(EventKind::RepoPublishStarted, payload).await
    }

    /// Fires an event indicating the given repository has completed a publish.
    ///
    /// `publish_result` is the stored publish record; its internal identifier key is
    /// removed before dispatch.
    pub async fn fire_repo_publish_finished(
        &self,
        publish_result: Payload,
    ) -> Result<(), FireError> {
        let payload = self.strip_internal_id(publish_result);
        self.fire_kind(EventKind::RepoPublishFinished, payload).await
    }

    /// Dispatches an already built event and returns the pass summary.
    pub async fn fire(&self, event: &Event) -> Result<DispatchReport, FireError> {
        self.dispatcher.dispatch(event).await
    }

    async fn fire_kind(&self, kind: EventKind, payload: Payload) -> Result<(), FireError> {
        self.fire(&Event::new(kind, payload)).await.map(drop)
    }

    fn strip_internal_id(&self, mut result: Payload) -> Payload {
        result.remove(&self.dispatcher.config().internal_id_key);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::config::Config;
    use crate::diagnostics::{DiagnosticSink, DispatchFailure};
    use crate::error::{NotifyError, StoreError};
    use crate::listeners::{InMemoryListenerStore, Listener, NotifierConfig};
    use crate::notifiers::{Notify, NotifierFn, NotifierRegistry};

    /// Records every delivered event together with the listener config it came with.
    #[derive(Default)]
    struct Recorder(Mutex<Vec<(NotifierConfig, Event)>>);

    impl Recorder {
        fn seen(&self) -> Vec<(NotifierConfig, Event)> {
            self.0.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notify for Recorder {
        async fn deliver(&self, config: &NotifierConfig, event: &Event) -> Result<(), NotifyError> {
            self.0.lock().unwrap().push((config.clone(), event.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingSink(Mutex<usize>);

    impl DiagnosticSink for CountingSink {
        fn report(&self, _failure: &DispatchFailure) {
            *self.0.lock().unwrap() += 1;
        }
    }

    struct DownStore;

    #[async_trait]
    impl ListenerStore for DownStore {
        async fn find_by_kind(&self, _kind: EventKind) -> Result<Vec<Listener>, StoreError> {
            Err(StoreError::Query {
                reason: "collection missing".into(),
            })
        }
    }

    fn manager(listeners: Vec<Listener>, recorder: &Arc<Recorder>) -> EventFireManager {
        let registry = NotifierRegistry::builder()
            .register("rec", Arc::clone(recorder) as Arc<dyn Notify>)
            .build();
        EventFireManager::builder(Arc::new(InMemoryListenerStore::with_listeners(listeners)))
            .with_registry(registry)
            .build()
    }

    fn listener(id: &str, kinds: &[&str]) -> Listener {
        let mut cfg = NotifierConfig::new();
        cfg.insert("url".into(), json!(format!("https://hooks.example/{id}")));
        Listener::new(id, kinds.iter().copied(), "rec", cfg).unwrap()
    }

    fn payload(v: Value) -> Payload {
        match v {
            Value::Object(map) => map,
            _ => unreachable!("test payloads are objects"),
        }
    }

    #[tokio::test]
    async fn test_sync_started_payload() {
        let rec = Arc::new(Recorder::default());
        let m = manager(vec![listener("l", &["repo.sync.start"])], &rec);

        m.fire_repo_sync_started("zoo").await.unwrap();

        let seen = rec.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1.kind, EventKind::RepoSyncStarted);
        assert_eq!(*seen[0].1.payload, payload(json!({ "repo_id": "zoo" })));
        assert_eq!(seen[0].0["url"], "https://hooks.example/l");
    }

    #[tokio::test]
    async fn test_sync_finished_strips_internal_id() {
        let rec = Arc::new(Recorder::default());
        let m = manager(vec![listener("l", &["repo.sync.finish"])], &rec);

        m.fire_repo_sync_finished(payload(json!({
            "_id": "x",
            "status": "success",
            "repo_id": "r1",
        })))
        .await
        .unwrap();

        let seen = rec.seen();
        assert_eq!(seen.len(), 1);
        let p = &seen[0].1.payload;
        assert!(!p.contains_key("_id"));
        assert_eq!(**p, payload(json!({ "status": "success", "repo_id": "r1" })));
    }

    #[tokio::test]
    async fn test_publish_finished_strips_configured_id_key() {
        let rec = Arc::new(Recorder::default());
        let registry = NotifierRegistry::builder()
            .register("rec", Arc::clone(&rec) as Arc<dyn Notify>)
            .build();
        let store = InMemoryListenerStore::with_listeners([listener("l", &["*"])]);
        let m = EventFireManager::builder(Arc::new(store))
            .with_config(Config {
                internal_id_key: "id".into(),
                ..Config::default()
            })
            .with_registry(registry)
            .build();

        m.fire_repo_publish_finished(payload(json!({
            "id": 7,
            "_id": "kept",
            "result": "failed",
            "exception": "rsync exited 23",
        })))
        .await
        .unwrap();

        let seen = rec.seen();
        assert_eq!(seen[0].1.kind, EventKind::RepoPublishFinished);
        assert!(!seen[0].1.payload.contains_key("id"));
        assert_eq!(seen[0].1.payload["_id"], "kept");
        assert_eq!(seen[0].1.payload["exception"], "rsync exited 23");
    }

    #[tokio::test]
    async fn test_publish_started_routing() {
        let rec = Arc::new(Recorder::default());
        let m = manager(vec![listener("sync-only", &["repo.sync.start"])], &rec);
        m.fire_repo_publish_started("r1", "d1").await.unwrap();
        assert!(rec.seen().is_empty());

        let rec = Arc::new(Recorder::default());
        let m = manager(vec![listener("pub", &["repo.publish.start"])], &rec);
        m.fire_repo_publish_started("r1", "d1").await.unwrap();

        let seen = rec.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            *seen[0].1.payload,
            payload(json!({ "repo_id": "r1", "distributor_id": "d1" }))
        );
    }

    #[tokio::test]
    async fn test_listener_failures_do_not_surface() {
        let rec = Arc::new(Recorder::default());
        let sink = Arc::new(CountingSink::default());
        let broken: Arc<dyn Notify> =
            NotifierFn::arc("broken", |_cfg: NotifierConfig, _ev: Event| async {
                Err::<(), _>(NotifyError::delivery("smtp refused"))
            });
        let registry = NotifierRegistry::builder()
            .register("rec", Arc::clone(&rec) as Arc<dyn Notify>)
            .register("broken", broken)
            .build();
        let store = InMemoryListenerStore::with_listeners([
            listener("a", &["*"]),
            Listener::new("b", ["*"], "broken", NotifierConfig::new()).unwrap(),
            Listener::new("c", ["*"], "missing", NotifierConfig::new()).unwrap(),
        ]);
        let m = EventFireManager::builder(Arc::new(store))
            .with_registry(registry)
            .with_sink(sink.clone())
            .build();

        assert!(m.fire_repo_sync_started("zoo").await.is_ok());
        assert_eq!(rec.seen().len(), 1);
        assert_eq!(*sink.0.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let m = EventFireManager::builder(Arc::new(DownStore)).build();
        let err = m.fire_repo_sync_started("zoo").await.unwrap_err();
        assert_eq!(err.as_label(), "fire_selection_failed");
    }

    #[tokio::test]
    async fn test_fire_returns_report() {
        let rec = Arc::new(Recorder::default());
        let m = manager(
            vec![listener("a", &["repo.sync.finish"]), listener("b", &["*"])],
            &rec,
        );
        let ev = Event::with_json(EventKind::RepoSyncFinished, json!({ "result": "success" }));

        let report = m.fire(&ev).await.unwrap();
        assert_eq!(report.seq, ev.seq);
        assert_eq!(report.attempted, 2);
        assert!(report.is_clean());
    }
}
