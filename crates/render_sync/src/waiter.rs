//! Wait helpers that line up test assertions with asynchronous rendering
//! and page-zoom effects.

use crate::config::SyncConfig;
use crate::registry::{ElementDimensions, ElementRegistry};
use crate::scheduler::FrameScheduler;
use crate::zoom::ZoomDriver;
use anyhow::{Result, bail};
use log::{debug, trace, warn};
use std::time::Duration;

/// Drives cooperative, frame-paced waits against an element registry.
///
/// Collaborators are injected: the frame scheduler supplies both the polling
/// cadence and the clock deadlines are measured against, the registry
/// answers geometry queries, and the optional zoom driver performs
/// automation steps when the environment provides one.
pub struct RenderSync<S, R> {
    scheduler: S,
    registry: R,
    zoom: Option<Box<dyn ZoomDriver>>,
    config: SyncConfig,
}

impl<S: FrameScheduler, R: ElementRegistry> RenderSync<S, R> {
    /// Create a waiter with no zoom capability.
    pub fn new(scheduler: S, registry: R, config: SyncConfig) -> Self {
        Self {
            scheduler,
            registry,
            zoom: None,
            config,
        }
    }

    /// Attach a zoom automation capability.
    #[must_use]
    pub fn with_zoom_driver(mut self, driver: Box<dyn ZoomDriver>) -> Self {
        self.zoom = Some(driver);
        self
    }

    /// Whether a zoom automation capability is attached.
    pub fn zoom_supported(&self) -> bool {
        self.zoom.is_some()
    }

    /// Borrow the injected scheduler (tests inspect fake clocks through this).
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Borrow the injected registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Poll once per frame until every id resolves to an element with a
    /// non-zero rendered box, then wait one more frame so rendering settles.
    ///
    /// Returns `true` when all elements became ready before the deadline and
    /// `false` when the deadline passed first. Timing out is not an error:
    /// this is a best-effort wait, and callers must assert their own
    /// post-conditions. The deadline is checked before each poll, so a zero
    /// timeout performs no poll at all.
    pub async fn wait_for_elements_ready(&mut self, ids: &[&str], timeout: Duration) -> bool {
        let start = self.scheduler.now();
        while self.scheduler.now().duration_since(start) < timeout {
            if ids.iter().all(|id| self.element_ready(id)) {
                trace!("all {} element(s) ready, settling one frame", ids.len());
                self.scheduler.next_frame().await;
                return true;
            }
            self.scheduler.next_frame().await;
        }
        warn!("elements {ids:?} not all ready after {timeout:?}, continuing anyway");
        false
    }

    /// [`Self::wait_for_elements_ready`] with the configured default deadline.
    pub async fn wait_for_elements_ready_simple(&mut self, ids: &[&str]) -> bool {
        let timeout = self.config.ready_timeout();
        self.wait_for_elements_ready(ids, timeout).await
    }

    /// Read the element's current rendered dimensions. Pure, synchronous.
    ///
    /// # Errors
    ///
    /// Fails when the id does not resolve to a tracked element; there is no
    /// defensive fallback, the caller owns the failure.
    pub fn element_dimensions(&self, id: &str) -> Result<ElementDimensions> {
        match self.registry.dimensions(id) {
            Some(dims) => Ok(dims),
            None => bail!("no element with id {id:?}"),
        }
    }

    /// Zoom the page out by `steps` discrete steps.
    ///
    /// Without an attached zoom capability this is an immediate no-op. With
    /// one, each step is awaited before the next begins, then exactly one
    /// frame passes so layout can pick up the new zoom factor. The zoom is
    /// not verified to have taken effect here; pair with
    /// [`Self::wait_for_zoom_effect`].
    ///
    /// # Errors
    ///
    /// Propagates zoom driver failures.
    pub async fn zoom_page_out(&mut self, steps: u32) -> Result<()> {
        let Some(driver) = self.zoom.as_mut() else {
            debug!("no zoom driver attached, zoom_page_out({steps}) is a no-op");
            return Ok(());
        };
        for step in 0..steps {
            trace!("zoom_page_out step {} of {steps} via {}", step + 1, driver.name());
            driver.zoom_page_out().await?;
        }
        self.scheduler.next_frame().await;
        Ok(())
    }

    /// Zoom the page in by `steps` discrete steps.
    ///
    /// Mirrors [`Self::zoom_page_out`]: no-op without a capability, steps are
    /// sequential, and one frame passes before returning.
    ///
    /// # Errors
    ///
    /// Propagates zoom driver failures.
    pub async fn zoom_page_in(&mut self, steps: u32) -> Result<()> {
        let Some(driver) = self.zoom.as_mut() else {
            debug!("no zoom driver attached, zoom_page_in({steps}) is a no-op");
            return Ok(());
        };
        for step in 0..steps {
            trace!("zoom_page_in step {} of {steps} via {}", step + 1, driver.name());
            driver.zoom_page_in().await?;
        }
        self.scheduler.next_frame().await;
        Ok(())
    }

    /// Poll once per frame until the element's width drops strictly below
    /// `initial_width` (a baseline captured before zooming).
    ///
    /// The first check happens immediately, before any frame wait.
    ///
    /// # Errors
    ///
    /// Fails when the id stops resolving, or when the deadline passes
    /// without the width shrinking.
    pub async fn wait_for_zoom_effect(
        &mut self,
        id: &str,
        initial_width: f32,
        timeout: Duration,
    ) -> Result<()> {
        let start = self.scheduler.now();
        loop {
            let dims = self.element_dimensions(id)?;
            if dims.width < initial_width {
                trace!(
                    "zoom effect on {id:?}: width {} below baseline {initial_width}",
                    dims.width
                );
                return Ok(());
            }
            let elapsed = self.scheduler.now().duration_since(start);
            if elapsed >= timeout {
                bail!(
                    "zoom effect on {id:?} not observed after {elapsed:?}: width {} never dropped below {initial_width}",
                    dims.width
                );
            }
            self.scheduler.next_frame().await;
        }
    }

    /// [`Self::wait_for_zoom_effect`] with the configured default deadline.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::wait_for_zoom_effect`].
    pub async fn wait_for_zoom_effect_simple(&mut self, id: &str, initial_width: f32) -> Result<()> {
        let timeout = self.config.zoom_timeout();
        self.wait_for_zoom_effect(id, initial_width, timeout).await
    }

    /// An element is ready once it exists and its box has non-zero area.
    fn element_ready(&self, id: &str) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        self.registry
            .dimensions(id)
            .is_some_and(|dims| dims.is_rendered())
    }
}
