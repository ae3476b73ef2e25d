//! # Function-backed notifier (`NotifierFn`)
//!
//! [`NotifierFn`] wraps a closure `F: Fn(NotifierConfig, Event) -> Fut`, producing a
//! fresh future per delivery. Arguments are passed owned (the event clone only bumps
//! the payload `Arc`), so the returned future can be `'static`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use repovent::{Event, Notify, NotifierConfig, NotifierFn, NotifyError};
//!
//! let n: Arc<dyn Notify> = NotifierFn::arc("stdout", |_cfg: NotifierConfig, ev: Event| async move {
//!     println!("{} {}", ev.kind, ev.data());
//!     Ok::<_, NotifyError>(())
//! });
//!
//! assert_eq!(n.name(), "stdout");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::events::Event;
use crate::listeners::NotifierConfig;
use crate::notifiers::Notify;

/// Function-backed notifier implementation.
pub struct NotifierFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> NotifierFn<F> {
    /// Creates a new function-backed notifier.
    ///
    /// Prefer [`NotifierFn::arc`] when registering directly.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the notifier and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Notify for NotifierFn<F>
where
    F: Fn(NotifierConfig, Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), NotifyError>> + Send + 'static,
{
    async fn deliver(&self, config: &NotifierConfig, event: &Event) -> Result<(), NotifyError> {
        (self.f)(config.clone(), event.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
