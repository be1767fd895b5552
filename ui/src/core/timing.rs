//! Timer utilities for the slide player.

/// Suspend the current task for `ms` milliseconds on either platform.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let clamped = ms.min(u64::from(u32::MAX)) as u32;
        gloo_timers::future::TimeoutFuture::new(clamped).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
