//! Render-synchronization helpers for layout and zoom tests.
//!
//! This crate provides the small waiting primitives a test driver needs to
//! line up assertions with asynchronous rendering: polling elements until
//! they have a non-zero rendered box, reading current dimensions, driving
//! page-zoom automation when the environment offers that capability, and
//! waiting for a zoom to visibly shrink an element. All suspension points
//! are explicit "wait for the next rendering frame" yields against an
//! injected scheduler, so the helpers stay testable without a real
//! rendering loop.

pub mod config;
pub mod registry;
pub mod scheduler;
/// Deterministic fakes for driving waits without a real rendering loop
pub mod test_support;
pub mod waiter;
pub mod zoom;

pub use config::SyncConfig;
pub use registry::{
    ElementDimensions, ElementRegistry, GeometryMirror, GeometryState, SharedGeometry,
};
pub use scheduler::{FrameFuture, FrameScheduler, FrameTicker};
pub use waiter::RenderSync;
pub use zoom::{ZoomDriver, ZoomFuture};
