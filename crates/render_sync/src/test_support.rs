//! Shared test support so integration tests and downstream harnesses can
//! drive the wait helpers without a real rendering loop.
//!
//! The pieces here are deterministic stand-ins for the injected
//! collaborators: a frame pump whose clock only advances when a frame is
//! awaited, a registry that replays a scripted sequence of observations, and
//! zoom drivers that count their invocations or rescale a geometry mirror.

use crate::registry::{ElementDimensions, ElementRegistry, GeometryMirror};
use crate::scheduler::{FrameFuture, FrameScheduler};
use crate::zoom::{ZoomDriver, ZoomFuture};
use anyhow::bail;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// One full-page zoom step, as test automation drivers apply it.
pub const PAGE_ZOOM_STEP: f32 = 1.2;

/// Frame scheduler driven by the test itself.
///
/// Every awaited frame advances a fake clock by a fixed interval and
/// resolves immediately, so polling loops run to completion synchronously
/// and deterministically. The shared frame counter can be handed to a
/// [`ScriptedRegistry`] so observations line up with frames.
pub struct ManualFramePump {
    origin: Instant,
    interval: Duration,
    frames: Arc<AtomicU64>,
}

impl ManualFramePump {
    /// Create a pump whose fake clock advances `interval` per frame.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            origin: Instant::now(),
            interval,
            frames: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of frames awaited so far.
    #[must_use]
    pub fn frames_elapsed(&self) -> u64 {
        self.frames.load(Ordering::SeqCst)
    }

    /// Shared frame counter, for collaborators that key off the frame number.
    #[must_use]
    pub fn frame_handle(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.frames)
    }
}

impl FrameScheduler for ManualFramePump {
    fn next_frame(&mut self) -> FrameFuture<'_> {
        self.frames.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }

    fn now(&self) -> Instant {
        let ticks = self.frames.load(Ordering::SeqCst) as u32;
        self.origin + self.interval.saturating_mul(ticks)
    }
}

/// Registry replaying one scripted observation per frame for a single id.
///
/// The observation for frame `n` is `observations[n]`, with the final entry
/// repeating once the script runs out; `None` entries model a missing
/// element. Reads within the same frame are idempotent, matching a layout
/// tree that only changes between frames.
#[derive(Clone)]
pub struct ScriptedRegistry {
    id: String,
    observations: Vec<Option<ElementDimensions>>,
    frame: Arc<AtomicU64>,
}

impl ScriptedRegistry {
    /// Create a registry scripting `observations` for `id`, keyed off the
    /// frame counter of a [`ManualFramePump`].
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        observations: Vec<Option<ElementDimensions>>,
        frame: Arc<AtomicU64>,
    ) -> Self {
        Self {
            id: id.into(),
            observations,
            frame,
        }
    }

    fn current(&self) -> Option<ElementDimensions> {
        if self.observations.is_empty() {
            return None;
        }
        let frame = self.frame.load(Ordering::SeqCst) as usize;
        let index = frame.min(self.observations.len() - 1);
        self.observations[index]
    }
}

impl ElementRegistry for ScriptedRegistry {
    fn contains(&self, id: &str) -> bool {
        id == self.id && self.current().is_some()
    }

    fn dimensions(&self, id: &str) -> Option<ElementDimensions> {
        if id != self.id {
            return None;
        }
        self.current()
    }
}

/// Zoom driver that records each invocation without touching any geometry.
#[derive(Clone, Default)]
pub struct CountingZoomDriver {
    out_calls: Arc<AtomicU32>,
    in_calls: Arc<AtomicU32>,
}

impl CountingZoomDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed zoom-out steps.
    #[must_use]
    pub fn zoom_out_calls(&self) -> u32 {
        self.out_calls.load(Ordering::SeqCst)
    }

    /// Number of completed zoom-in steps.
    #[must_use]
    pub fn zoom_in_calls(&self) -> u32 {
        self.in_calls.load(Ordering::SeqCst)
    }
}

impl ZoomDriver for CountingZoomDriver {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn zoom_page_out(&mut self) -> ZoomFuture<'_> {
        let calls = Arc::clone(&self.out_calls);
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn zoom_page_in(&mut self) -> ZoomFuture<'_> {
        let calls = Arc::clone(&self.in_calls);
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}

/// Zoom driver that rescales a shared geometry mirror by one page-zoom step
/// per invocation, simulating the layout effect of a real zoom.
pub struct ScalingZoomDriver {
    geometry: GeometryMirror,
}

impl ScalingZoomDriver {
    #[must_use]
    pub fn new(geometry: GeometryMirror) -> Self {
        Self { geometry }
    }
}

impl ZoomDriver for ScalingZoomDriver {
    fn name(&self) -> &'static str {
        "scaling"
    }

    fn zoom_page_out(&mut self) -> ZoomFuture<'_> {
        let geometry = self.geometry.clone();
        Box::pin(async move {
            geometry.scale_all(1.0 / PAGE_ZOOM_STEP);
            Ok(())
        })
    }

    fn zoom_page_in(&mut self) -> ZoomFuture<'_> {
        let geometry = self.geometry.clone();
        Box::pin(async move {
            geometry.scale_all(PAGE_ZOOM_STEP);
            Ok(())
        })
    }
}

/// Zoom driver whose steps always fail, for exercising error propagation.
#[derive(Default)]
pub struct FailingZoomDriver;

impl ZoomDriver for FailingZoomDriver {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn zoom_page_out(&mut self) -> ZoomFuture<'_> {
        Box::pin(async { bail!("zoom automation rejected the request") })
    }

    fn zoom_page_in(&mut self) -> ZoomFuture<'_> {
        Box::pin(async { bail!("zoom automation rejected the request") })
    }
}

/// Initialize `RUST_LOG`-controlled logging for tests; safe to call repeatedly.
pub fn init_test_logging() {
    drop(
        env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init(),
    );
}
