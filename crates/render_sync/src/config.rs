//! Configuration settings for render-synchronization waits.
//!
//! This module defines the frame pacing and default deadlines used by the
//! wait helpers. Configuration can be loaded from environment variables or
//! constructed programmatically.

use core::time::Duration;
use std::env;

/// Runtime configuration for the render-sync helpers.
///
/// Controls the frame polling interval and the default timeouts applied when
/// a caller does not pass an explicit deadline.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Frame polling interval in milliseconds
    pub frame_interval_ms: u64,
    /// Default deadline for element readiness waits, in milliseconds
    pub ready_timeout_ms: u64,
    /// Default deadline for zoom-effect waits, in milliseconds
    pub zoom_timeout_ms: u64,
}

impl SyncConfig {
    /// Construct a new `SyncConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `frame_interval_ms` - Frame polling interval in milliseconds (minimum 1ms)
    /// * `ready_timeout_ms` - Default readiness deadline in milliseconds
    /// * `zoom_timeout_ms` - Default zoom-effect deadline in milliseconds
    ///
    /// # Returns
    ///
    /// A new `SyncConfig` instance with the specified settings
    #[inline]
    #[must_use]
    pub const fn new(frame_interval_ms: u64, ready_timeout_ms: u64, zoom_timeout_ms: u64) -> Self {
        let interval = if frame_interval_ms < 1 {
            1
        } else {
            frame_interval_ms
        };
        Self {
            frame_interval_ms: interval,
            ready_timeout_ms,
            zoom_timeout_ms,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `RENDER_SYNC_FRAME_INTERVAL_MS`: Frame polling interval in milliseconds (default: 16)
    /// - `RENDER_SYNC_READY_TIMEOUT_MS`: Default readiness deadline (default: 5000)
    /// - `RENDER_SYNC_ZOOM_TIMEOUT_MS`: Default zoom-effect deadline (default: 5000)
    ///
    /// # Returns
    ///
    /// A new `SyncConfig` instance populated from environment variables
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let frame_interval_ms = env::var("RENDER_SYNC_FRAME_INTERVAL_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(16)
            .max(1);
        let ready_timeout_ms = env::var("RENDER_SYNC_READY_TIMEOUT_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(5000);
        let zoom_timeout_ms = env::var("RENDER_SYNC_ZOOM_TIMEOUT_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(5000);
        Self {
            frame_interval_ms,
            ready_timeout_ms,
            zoom_timeout_ms,
        }
    }

    /// Get the frame polling interval as a `Duration`.
    ///
    /// # Returns
    ///
    /// The frame interval duration
    #[inline]
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Get the default readiness deadline as a `Duration`.
    ///
    /// # Returns
    ///
    /// The readiness timeout duration
    #[inline]
    #[must_use]
    pub const fn ready_timeout(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }

    /// Get the default zoom-effect deadline as a `Duration`.
    ///
    /// # Returns
    ///
    /// The zoom-effect timeout duration
    #[inline]
    #[must_use]
    pub const fn zoom_timeout(&self) -> Duration {
        Duration::from_millis(self.zoom_timeout_ms)
    }
}

impl Default for SyncConfig {
    /// Defaults match a 60Hz frame cadence and the conventional 5s test deadline.
    fn default() -> Self {
        Self::new(16, 5000, 5000)
    }
}

#[cfg(test)]
mod tests {
    use super::SyncConfig;
    use core::time::Duration;

    #[test]
    fn zero_frame_interval_is_clamped_to_one() {
        let config = SyncConfig::new(0, 5000, 5000);
        assert_eq!(config.frame_interval_ms, 1);
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn duration_accessors_reflect_millis() {
        let config = SyncConfig::new(16, 250, 750);
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.ready_timeout(), Duration::from_millis(250));
        assert_eq!(config.zoom_timeout(), Duration::from_millis(750));
    }
}
