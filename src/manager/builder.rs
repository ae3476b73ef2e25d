use std::sync::Arc;

use crate::{
    config::Config,
    diagnostics::DiagnosticSink,
    dispatch::Dispatcher,
    listeners::{ListenerSelector, ListenerStore},
    notifiers::NotifierRegistry,
};

use super::EventFireManager;

/// Builder for constructing an [`EventFireManager`].
pub struct EventFireManagerBuilder {
    cfg: Config,
    store: Arc<dyn ListenerStore>,
    registry: NotifierRegistry,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl EventFireManagerBuilder {
    /// Creates a builder reading listeners from `store`.
    pub fn new(store: Arc<dyn ListenerStore>) -> Self {
        Self {
            cfg: Config::default(),
            store,
            registry: NotifierRegistry::default(),
            sink: None,
        }
    }

    /// Sets the dispatch configuration.
    pub fn with_config(mut self, cfg: Config) -> Self {
        self.cfg = cfg;
        self
    }

    /// Sets the notifier registry (built once at startup).
    pub fn with_registry(mut self, registry: NotifierRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the diagnostic sink. Defaults to [`TracingSink`](crate::TracingSink).
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the manager.
    ///
    /// An empty registry is allowed: every matched listener then fails resolution and
    /// is reported, but firing still succeeds.
    pub fn build(self) -> EventFireManager {
        if self.registry.is_empty() {
            tracing::warn!("event fire manager built without any registered notifier");
        }

        let selector = ListenerSelector::new(self.store);
        let mut dispatcher = Dispatcher::new(self.cfg, selector, Arc::new(self.registry));
        if let Some(sink) = self.sink {
            dispatcher = dispatcher.with_sink(sink);
        }
        EventFireManager::from_dispatcher(dispatcher)
    }
}
