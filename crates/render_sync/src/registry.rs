//! A minimal element geometry mirror for synchronization waits.
//!
//! This mirror tracks the subset of document state the wait helpers need:
//! which element ids currently resolve, and the rendered size of each. A
//! host (test runner, layout mirror) updates the shared state while waiters
//! poll it once per frame. It is intentionally simplified and only tracks
//! what is necessary for the wait helpers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Rendered size of an element, in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ElementDimensions {
    /// The width of the bounding box.
    pub width: f32,
    /// The height of the bounding box.
    pub height: f32,
}

impl ElementDimensions {
    /// Construct dimensions from an explicit width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both sides are strictly positive, i.e. the element has a
    /// visible rendered box.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Read-only view of current element geometry, keyed by element id.
pub trait ElementRegistry {
    /// Whether an element with the given id currently exists.
    fn contains(&self, id: &str) -> bool;
    /// Current bounding-box dimensions, or `None` when the id does not resolve.
    fn dimensions(&self, id: &str) -> Option<ElementDimensions>;
}

/// Internal mutable state for the geometry mirror.
#[derive(Default)]
pub struct GeometryState {
    /// Map element id -> current rendered dimensions.
    sizes: HashMap<String, ElementDimensions>,
}

impl GeometryState {
    /// Insert or replace the dimensions for an element id.
    pub fn set(&mut self, id: impl Into<String>, dims: ElementDimensions) {
        self.sizes.insert(id.into(), dims);
    }

    /// Remove an element id from the mirror.
    pub fn remove(&mut self, id: &str) {
        self.sizes.remove(id);
    }

    /// Current dimensions for an id, if tracked.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<ElementDimensions> {
        self.sizes.get(id).copied()
    }

    /// Number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Apply a uniform scale factor to every tracked element, as a full-page
    /// zoom does.
    pub fn scale_all(&mut self, factor: f32) {
        for dims in self.sizes.values_mut() {
            dims.width *= factor;
            dims.height *= factor;
        }
    }
}

/// Shared handle type hosts use to mutate the mirror directly.
pub type SharedGeometry = Arc<Mutex<GeometryState>>;

/// Clonable geometry mirror over shared state.
///
/// The handle implements [`ElementRegistry`] for the polling side and exposes
/// mutation helpers for the host side; clones observe the same state.
#[derive(Clone, Default)]
pub struct GeometryMirror {
    inner: Arc<Mutex<GeometryState>>,
}

impl GeometryMirror {
    /// Create a new mirror and return the handle and its shared state Arc.
    #[must_use]
    pub fn new() -> (Self, SharedGeometry) {
        let inner = Arc::new(Mutex::new(GeometryState::default()));
        (
            Self {
                inner: Arc::clone(&inner),
            },
            inner,
        )
    }

    /// Insert or replace the dimensions for an element id.
    pub fn set(&self, id: impl Into<String>, dims: ElementDimensions) {
        if let Ok(mut state) = self.inner.lock() {
            state.set(id, dims);
        }
    }

    /// Remove an element id from the mirror.
    pub fn remove(&self, id: &str) {
        if let Ok(mut state) = self.inner.lock() {
            state.remove(id);
        }
    }

    /// Apply a uniform scale factor to every tracked element.
    pub fn scale_all(&self, factor: f32) {
        if let Ok(mut state) = self.inner.lock() {
            state.scale_all(factor);
        }
    }
}

impl ElementRegistry for GeometryMirror {
    fn contains(&self, id: &str) -> bool {
        self.inner
            .lock()
            .map(|state| state.get(id).is_some())
            .unwrap_or(false)
    }

    fn dimensions(&self, id: &str) -> Option<ElementDimensions> {
        self.inner.lock().ok().and_then(|state| state.get(id))
    }
}
