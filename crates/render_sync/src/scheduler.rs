//! Rendering-frame scheduling for cooperative polling waits.

use core::future::Future;
use core::pin::Pin;
use std::time::{Duration, Instant};

// Reduce type complexity with an alias for the per-frame wakeup future
pub type FrameFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Source of "run this continuation before the next frame is drawn" wakeups.
///
/// Deadlines are measured against the scheduler's own clock so that a fake
/// scheduler can advance time deterministically in tests.
pub trait FrameScheduler {
    /// Resolve once immediately before the next frame is drawn.
    fn next_frame(&mut self) -> FrameFuture<'_>;
    /// Current time on the scheduler's clock.
    fn now(&self) -> Instant;
}

/// Wall-clock scheduler that paces frames with the tokio timer.
pub struct FrameTicker {
    interval: Duration,
}

impl FrameTicker {
    /// Create a ticker that emits one frame per `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Return the configured frame interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameScheduler for FrameTicker {
    fn next_frame(&mut self) -> FrameFuture<'_> {
        let interval = self.interval;
        Box::pin(async move {
            tokio::time::sleep(interval).await;
        })
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
