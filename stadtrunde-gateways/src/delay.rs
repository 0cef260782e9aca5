use std::time::Duration;

use async_trait::async_trait;
use stadtrunde_core::gateways::delay::Delay;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_advances_the_clock() {
        let start = tokio::time::Instant::now();
        TokioDelay.sleep(Duration::from_secs(1)).await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
