//! # Notifier registry
//!
//! Maps notifier kinds (the `notifier_kind` stored on a listener) to [`Notify`]
//! implementations.
//!
//! ## Rules
//! - Populated once through [`NotifierRegistryBuilder`]; immutable afterwards, so it
//!   can be shared across concurrent dispatches without locking.
//! - Unknown kinds resolve to [`NotifyError::UnknownNotifier`]; the dispatcher contains
//!   that per listener.
//!
//! ## Example
//! ```rust
//! use repovent::{LogNotifier, NotifierRegistry};
//! use std::sync::Arc;
//!
//! let registry = NotifierRegistry::builder()
//!     .register("log", Arc::new(LogNotifier::new()))
//!     .build();
//!
//! assert!(registry.resolve("log").is_ok());
//! assert!(registry.resolve("amqp").is_err());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::Notify;
use crate::error::NotifyError;

/// Immutable lookup from notifier kind to delivery capability.
#[derive(Clone, Default)]
pub struct NotifierRegistry {
    notifiers: HashMap<String, Arc<dyn Notify>>,
}

impl NotifierRegistry {
    /// Starts an empty builder.
    pub fn builder() -> NotifierRegistryBuilder {
        NotifierRegistryBuilder::default()
    }

    /// Returns the notifier registered under `kind`.
    pub fn resolve(&self, kind: &str) -> Result<Arc<dyn Notify>, NotifyError> {
        self.notifiers
            .get(kind)
            .cloned()
            .ok_or_else(|| NotifyError::UnknownNotifier {
                kind: kind.to_string(),
            })
    }

    /// True if a notifier is registered under `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.notifiers.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.notifiers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Number of registered notifiers.
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

/// Builder populating a [`NotifierRegistry`] at startup.
#[derive(Default)]
pub struct NotifierRegistryBuilder {
    notifiers: HashMap<String, Arc<dyn Notify>>,
}

impl NotifierRegistryBuilder {
    /// Registers `notifier` under `kind`. A later registration for the same kind wins.
    pub fn register(mut self, kind: impl Into<String>, notifier: Arc<dyn Notify>) -> Self {
        let kind = kind.into();
        if let Some(prev) = self.notifiers.insert(kind.clone(), notifier) {
            warn!(kind = %kind, replaced = prev.name(), "notifier kind registered twice");
        }
        self
    }

    /// Freezes the registry.
    pub fn build(self) -> NotifierRegistry {
        NotifierRegistry {
            notifiers: self.notifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::listeners::NotifierConfig;
    use crate::notifiers::NotifierFn;

    fn named(name: &'static str) -> Arc<dyn Notify> {
        NotifierFn::arc(name, |_cfg: NotifierConfig, _ev: Event| async {
            Ok::<_, NotifyError>(())
        })
    }

    #[test]
    fn test_resolve_unknown_kind() {
        let registry = NotifierRegistry::builder().register("http", named("http")).build();
        let err = registry.resolve("amqp").err().unwrap();
        assert_eq!(err, NotifyError::UnknownNotifier { kind: "amqp".into() });
    }

    #[test]
    fn test_later_registration_wins() {
        let registry = NotifierRegistry::builder()
            .register("http", named("first"))
            .register("http", named("second"))
            .build();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("http").unwrap().name(), "second");
    }

    #[test]
    fn test_kinds_sorted() {
        let registry = NotifierRegistry::builder()
            .register("webhook", named("w"))
            .register("amqp", named("a"))
            .build();
        assert_eq!(registry.kinds(), vec!["amqp", "webhook"]);
        assert!(registry.contains("amqp"));
        assert!(!NotifierRegistry::default().contains("amqp"));
        assert!(NotifierRegistry::default().is_empty());
    }
}
