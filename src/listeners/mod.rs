//! # Listener records and their selection.
//!
//! Listeners are owned by an external store; this crate only reads them.
//!
//! ## Contents
//! - [`Listener`] subscription record (event kinds → notifier kind + config)
//! - [`ListenerStore`] the query seam to the external store
//! - [`InMemoryListenerStore`] reference store for embedding and tests
//! - [`ListenerSelector`] picks the listeners matching an event kind
//!
//! ```text
//! Dispatcher ──► ListenerSelector::select(kind)
//!                    │
//!                    ├──► ListenerStore::find_by_kind(kind)   (kind OR "*")
//!                    └──► retain(Listener::matches)
//! ```

mod listener;
mod memory;
mod selector;
mod store;

pub use listener::{Listener, NotifierConfig};
pub use memory::InMemoryListenerStore;
pub use selector::ListenerSelector;
pub use store::ListenerStore;
