use futures::executor::block_on;
use render_sync::test_support::{
    CountingZoomDriver, FailingZoomDriver, ManualFramePump, ScalingZoomDriver, ScriptedRegistry,
};
use render_sync::{ElementDimensions, GeometryMirror, RenderSync, SyncConfig};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn zoom_out_invokes_driver_once_per_step_then_settles() {
    let (mirror, _state) = GeometryMirror::new();
    let driver = CountingZoomDriver::new();
    let mut sync = RenderSync::new(ManualFramePump::new(FRAME), mirror, SyncConfig::default())
        .with_zoom_driver(Box::new(driver.clone()));

    assert!(sync.zoom_supported());
    block_on(sync.zoom_page_out(3)).unwrap();
    assert_eq!(driver.zoom_out_calls(), 3);
    assert_eq!(driver.zoom_in_calls(), 0);
    // All steps complete before the single settle frame.
    assert_eq!(sync.scheduler().frames_elapsed(), 1);
}

#[test]
fn zoom_without_capability_is_an_immediate_noop() {
    let (mirror, _state) = GeometryMirror::new();
    let mut sync = RenderSync::new(ManualFramePump::new(FRAME), mirror, SyncConfig::default());

    assert!(!sync.zoom_supported());
    block_on(sync.zoom_page_out(4)).unwrap();
    block_on(sync.zoom_page_in(2)).unwrap();
    // Nothing invoked, no frames consumed.
    assert_eq!(sync.scheduler().frames_elapsed(), 0);
}

#[test]
fn zoom_in_mirrors_zoom_out() {
    let (mirror, _state) = GeometryMirror::new();
    let driver = CountingZoomDriver::new();
    let mut sync = RenderSync::new(ManualFramePump::new(FRAME), mirror, SyncConfig::default())
        .with_zoom_driver(Box::new(driver.clone()));

    block_on(sync.zoom_page_in(2)).unwrap();
    assert_eq!(driver.zoom_in_calls(), 2);
    assert_eq!(driver.zoom_out_calls(), 0);
    assert_eq!(sync.scheduler().frames_elapsed(), 1);
}

#[test]
fn zero_steps_skips_the_driver_but_still_settles() {
    let (mirror, _state) = GeometryMirror::new();
    let driver = CountingZoomDriver::new();
    let mut sync = RenderSync::new(ManualFramePump::new(FRAME), mirror, SyncConfig::default())
        .with_zoom_driver(Box::new(driver.clone()));

    block_on(sync.zoom_page_out(0)).unwrap();
    assert_eq!(driver.zoom_out_calls(), 0);
    assert_eq!(sync.scheduler().frames_elapsed(), 1);
}

#[test]
fn driver_failure_propagates_before_the_settle_frame() {
    let (mirror, _state) = GeometryMirror::new();
    let mut sync = RenderSync::new(ManualFramePump::new(FRAME), mirror, SyncConfig::default())
        .with_zoom_driver(Box::new(FailingZoomDriver));

    assert!(block_on(sync.zoom_page_out(1)).is_err());
    assert_eq!(sync.scheduler().frames_elapsed(), 0);
}

#[test]
fn zoom_effect_resolves_on_the_first_shrunken_observation() {
    let pump = ManualFramePump::new(FRAME);
    // Baseline width twice, then the zoomed-out layout lands.
    let registry = ScriptedRegistry::new(
        "svg",
        vec![
            Some(ElementDimensions::new(200.0, 100.0)),
            Some(ElementDimensions::new(200.0, 100.0)),
            Some(ElementDimensions::new(150.0, 75.0)),
        ],
        pump.frame_handle(),
    );
    let mut sync = RenderSync::new(pump, registry, SyncConfig::default());

    block_on(sync.wait_for_zoom_effect("svg", 200.0, Duration::from_secs(5))).unwrap();
    // Third observation: two frame waits separate the three reads.
    assert_eq!(sync.scheduler().frames_elapsed(), 2);
}

#[test]
fn unchanged_width_times_out_with_an_error() {
    let pump = ManualFramePump::new(FRAME);
    let registry = ScriptedRegistry::new(
        "svg",
        vec![Some(ElementDimensions::new(200.0, 100.0))],
        pump.frame_handle(),
    );
    let mut sync = RenderSync::new(pump, registry, SyncConfig::default());

    let result = block_on(sync.wait_for_zoom_effect("svg", 200.0, Duration::from_millis(64)));
    assert!(result.is_err());
    // Observations at 0/16/32/48/64ms; the deadline check fires on the last.
    assert_eq!(sync.scheduler().frames_elapsed(), 4);
}

#[test]
fn equal_width_does_not_count_as_shrunken() {
    let pump = ManualFramePump::new(FRAME);
    let registry = ScriptedRegistry::new(
        "svg",
        vec![Some(ElementDimensions::new(200.0, 100.0))],
        pump.frame_handle(),
    );
    let mut sync = RenderSync::new(pump, registry, SyncConfig::default());

    // Strictly-less comparison: an exactly-equal width must keep waiting.
    assert!(block_on(sync.wait_for_zoom_effect("svg", 200.0, Duration::from_millis(16))).is_err());
}

#[test]
fn missing_element_fails_the_zoom_wait() {
    let (mirror, _state) = GeometryMirror::new();
    let mut sync = RenderSync::new(ManualFramePump::new(FRAME), mirror, SyncConfig::default());

    let result = block_on(sync.wait_for_zoom_effect("gone", 200.0, Duration::from_secs(5)));
    assert!(result.is_err());
    assert_eq!(sync.scheduler().frames_elapsed(), 0);
}

#[test]
fn scaling_driver_shrinks_geometry_end_to_end() {
    let (mirror, _state) = GeometryMirror::new();
    mirror.set("svg", ElementDimensions::new(240.0, 120.0));
    let mut sync = RenderSync::new(
        ManualFramePump::new(FRAME),
        mirror.clone(),
        SyncConfig::default(),
    )
    .with_zoom_driver(Box::new(ScalingZoomDriver::new(mirror.clone())));

    assert!(block_on(
        sync.wait_for_elements_ready(&["svg"], Duration::from_secs(5))
    ));
    let baseline = sync.element_dimensions("svg").unwrap();
    assert_eq!(baseline.width, 240.0);

    block_on(sync.zoom_page_out(1)).unwrap();
    block_on(sync.wait_for_zoom_effect_simple("svg", baseline.width)).unwrap();

    let zoomed = sync.element_dimensions("svg").unwrap();
    assert!(zoomed.width < baseline.width);
    // One zoom-out step divides by the 1.2 page-zoom factor.
    assert!((zoomed.width - 200.0).abs() < 0.01);
    assert!((zoomed.height - 100.0).abs() < 0.01);
}
