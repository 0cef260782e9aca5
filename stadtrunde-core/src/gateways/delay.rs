use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current task without blocking the event loop.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}
