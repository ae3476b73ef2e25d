//! # Run a single delivery to one listener.
//!
//! - **Invoke** the resolved notifier once with the listener's config
//! - **Apply timeout** if configured (wraps delivery in `tokio::time::timeout`)
//! - **Catch panics** (`catch_unwind`) so they become ordinary failures
//!
//! ## Outcomes
//! ```text
//! deliver() → Ok(())            → Ok(())
//! deliver() → Err(e)            → Err(e)
//! timeout exceeded              → Err(Timeout)   (delivery future dropped)
//! deliver() panics              → Err(Panicked)
//! ```
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave a notifier's shared state
//! inconsistent if it panics while holding a lock.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tokio::time;

use crate::error::NotifyError;
use crate::events::Event;
use crate::listeners::NotifierConfig;
use crate::notifiers::Notify;

/// Delivers `event` through `notifier`, converting every failure mode to [`NotifyError`].
///
/// `timeout` is already normalized by [`Config::delivery_timeout`](crate::Config::delivery_timeout);
/// `None` means the delivery is not bounded here.
pub(crate) async fn deliver_once(
    notifier: &dyn Notify,
    config: &NotifierConfig,
    event: &Event,
    timeout: Option<Duration>,
) -> Result<(), NotifyError> {
    // `deliver` itself may panic before handing out its future.
    let fut = AssertUnwindSafe(async move { notifier.deliver(config, event).await }).catch_unwind();

    let res = if let Some(dur) = timeout {
        match time::timeout(dur, fut).await {
            Ok(r) => r,
            Err(_elapsed) => return Err(NotifyError::Timeout { timeout: dur }),
        }
    } else {
        fut.await
    };

    res.unwrap_or_else(|panic_err| {
        Err(NotifyError::Panicked {
            info: panic_message(&*panic_err),
        })
    })
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
