//! # Notifiers: named delivery capabilities.
//!
//! A notifier receives a listener's opaque configuration and an [`Event`](crate::Event)
//! and delivers it somewhere (message queue, HTTP callback, mail, log, ...).
//!
//! ## Contents
//! - [`Notify`] the delivery trait
//! - [`NotifierFn`] closure-backed notifier
//! - [`NotifierRegistry`] immutable kind → notifier map, built once at startup
//! - [`LogNotifier`] built-in notifier writing events to the `tracing` log
//!
//! ## Implementing a notifier
//! ```no_run
//! use async_trait::async_trait;
//! use repovent::{Event, Notify, NotifierConfig, NotifyError};
//!
//! struct Amqp;
//!
//! #[async_trait]
//! impl Notify for Amqp {
//!     async fn deliver(&self, config: &NotifierConfig, event: &Event) -> Result<(), NotifyError> {
//!         let exchange = config
//!             .get("exchange")
//!             .and_then(|v| v.as_str())
//!             .ok_or_else(|| NotifyError::delivery("missing exchange"))?;
//!         // publish event.data() to `exchange`...
//!         let _ = (exchange, event);
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "amqp" }
//! }
//! ```

mod log;
mod notify;
mod notify_fn;
mod registry;

pub use log::LogNotifier;
pub use notify::Notify;
pub use notify_fn::NotifierFn;
pub use registry::{NotifierRegistry, NotifierRegistryBuilder};
