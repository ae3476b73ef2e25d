//! Listener record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ListenerError;
use crate::events::{EventKind, WILDCARD};

/// Opaque notifier configuration, passed verbatim to the notifier.
pub type NotifierConfig = Map<String, Value>;

/// A persisted subscription binding event kinds to a notifier.
///
/// `event_kinds` is never empty; construct through [`Listener::new`] (or deserialize,
/// which applies the same check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ListenerRecord")]
pub struct Listener {
    id: String,
    event_kinds: BTreeSet<String>,
    notifier_kind: String,
    notifier_config: NotifierConfig,
}

/// Unchecked shape used for deserialization.
#[derive(Deserialize)]
struct ListenerRecord {
    id: String,
    event_kinds: BTreeSet<String>,
    notifier_kind: String,
    #[serde(default)]
    notifier_config: NotifierConfig,
}

impl TryFrom<ListenerRecord> for Listener {
    type Error = ListenerError;

    fn try_from(r: ListenerRecord) -> Result<Self, Self::Error> {
        Listener::new(r.id, r.event_kinds, r.notifier_kind, r.notifier_config)
    }
}

impl Listener {
    /// Builds a listener, rejecting an empty subscription set.
    ///
    /// # Example
    /// ```
    /// use repovent::{Listener, NotifierConfig};
    ///
    /// let l = Listener::new("l1", ["repo.sync.start"], "http", NotifierConfig::new()).unwrap();
    /// assert_eq!(l.notifier_kind(), "http");
    ///
    /// let empty: [&str; 0] = [];
    /// assert!(Listener::new("l2", empty, "http", NotifierConfig::new()).is_err());
    /// ```
    pub fn new<I, S>(
        id: impl Into<String>,
        event_kinds: I,
        notifier_kind: impl Into<String>,
        notifier_config: NotifierConfig,
    ) -> Result<Self, ListenerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        let event_kinds: BTreeSet<String> = event_kinds.into_iter().map(Into::into).collect();
        if event_kinds.is_empty() {
            return Err(ListenerError::NoEventKinds { id });
        }
        Ok(Self {
            id,
            event_kinds,
            notifier_kind: notifier_kind.into(),
            notifier_config,
        })
    }

    /// Opaque listener identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Subscribed event identifiers (may contain [`WILDCARD`]).
    pub fn event_kinds(&self) -> &BTreeSet<String> {
        &self.event_kinds
    }

    /// Registry key of the notifier delivering to this listener.
    pub fn notifier_kind(&self) -> &str {
        &self.notifier_kind
    }

    /// Configuration handed to the notifier on every delivery.
    pub fn notifier_config(&self) -> &NotifierConfig {
        &self.notifier_config
    }

    /// True if subscribed to every kind.
    pub fn is_wildcard(&self) -> bool {
        self.event_kinds.contains(WILDCARD)
    }

    /// True if an event of `kind` should be delivered to this listener.
    pub fn matches(&self, kind: EventKind) -> bool {
        self.is_wildcard() || self.event_kinds.contains(kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listener(kinds: &[&str]) -> Listener {
        Listener::new("l", kinds.iter().copied(), "test", NotifierConfig::new()).unwrap()
    }

    #[test]
    fn test_matches_exact_kind_only() {
        let l = listener(&["repo.sync.start"]);
        assert!(l.matches(EventKind::RepoSyncStarted));
        assert!(!l.matches(EventKind::RepoSyncFinished));
        assert!(!l.matches(EventKind::RepoPublishStarted));
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let l = listener(&[WILDCARD]);
        assert!(l.is_wildcard());
        for kind in EventKind::ALL {
            assert!(l.matches(kind));
        }
    }

    #[test]
    fn test_empty_kinds_rejected() {
        let err = Listener::new("l9", Vec::<String>::new(), "test", NotifierConfig::new())
            .unwrap_err();
        assert_eq!(err, ListenerError::NoEventKinds { id: "l9".into() });
    }

    #[test]
    fn test_deserialize_checks_kinds() {
        let ok: Listener = serde_json::from_value(json!({
            "id": "a",
            "event_kinds": ["*"],
            "notifier_kind": "http",
        }))
        .unwrap();
        assert!(ok.notifier_config().is_empty());

        let bad = serde_json::from_value::<Listener>(json!({
            "id": "b",
            "event_kinds": [],
            "notifier_kind": "http",
        }));
        assert!(bad.is_err());
    }
}
