//! # LogNotifier — writes events to the `tracing` log
//!
//! Useful as a development listener (`notifier_kind = "log"`) or to audit what a
//! platform fires. The listener configuration may set `"level"` to `"debug"` or
//! `"info"` (default).
//!
//! ## Example output
//! ```text
//! INFO repovent::notifiers::log: event fired event_type=repo.sync.start seq=0 payload={"repo_id":"zoo"}
//! ```

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::NotifyError;
use crate::events::Event;
use crate::listeners::NotifierConfig;
use crate::notifiers::Notify;

/// Event logging notifier.
#[derive(Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Construct a new [`LogNotifier`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notify for LogNotifier {
    async fn deliver(&self, config: &NotifierConfig, event: &Event) -> Result<(), NotifyError> {
        let payload = serde_json::to_string(event.payload.as_ref())
            .map_err(|e| NotifyError::delivery(format!("payload not serializable: {e}")))?;

        match config.get("level").and_then(|v| v.as_str()) {
            Some("debug") => {
                debug!(event_type = %event.kind, seq = event.seq, payload = %payload, "event fired");
            }
            None | Some("info") => {
                info!(event_type = %event.kind, seq = event.seq, payload = %payload, "event fired");
            }
            Some(other) => {
                return Err(NotifyError::delivery(format!("unsupported log level: {other}")));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_rejects_unknown_level() {
        let ev = Event::with_json(EventKind::RepoSyncStarted, json!({ "repo_id": "zoo" }));
        let mut cfg = NotifierConfig::new();
        assert!(LogNotifier::new().deliver(&cfg, &ev).await.is_ok());

        cfg.insert("level".into(), json!("debug"));
        assert!(LogNotifier::new().deliver(&cfg, &ev).await.is_ok());

        cfg.insert("level".into(), json!("trace"));
        let err = LogNotifier::new().deliver(&cfg, &ev).await.unwrap_err();
        assert_eq!(err.as_label(), "notifier_delivery_failed");
    }
}
