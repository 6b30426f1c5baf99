//! Page-zoom automation capability.
//!
//! Environments driven by a test automation layer can zoom the page; plain
//! environments cannot. The capability is passed explicitly to the waiter
//! (never discovered through ambient global state), and its absence is a
//! valid runtime state: zoom requests then complete as no-ops.

use anyhow::Error;
use core::future::Future;
use core::pin::Pin;

// Reduce type complexity with an alias for the async zoom action future
pub type ZoomFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>>;

/// Asynchronous page-zoom automation actions, one discrete step per call.
pub trait ZoomDriver: Send {
    /// Driver name for logs.
    fn name(&self) -> &'static str;
    /// Zoom the page out by one step.
    fn zoom_page_out(&mut self) -> ZoomFuture<'_>;
    /// Zoom the page in by one step.
    fn zoom_page_in(&mut self) -> ZoomFuture<'_>;
}
