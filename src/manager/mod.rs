//! Public entry point for action code.
//!
//! - [`EventFireManager`] one `fire_*` operation per lifecycle event
//! - [`EventFireManagerBuilder`] wires store, registry, sink and config

mod builder;
mod fire;

pub use builder::EventFireManagerBuilder;
pub use fire::EventFireManager;
