use render_sync::test_support::ManualFramePump;
use render_sync::{ElementDimensions, GeometryMirror, RenderSync, SyncConfig};
use std::time::Duration;

fn mirror_sync() -> (RenderSync<ManualFramePump, GeometryMirror>, GeometryMirror) {
    let (mirror, _state) = GeometryMirror::new();
    let sync = RenderSync::new(
        ManualFramePump::new(Duration::from_millis(16)),
        mirror.clone(),
        SyncConfig::default(),
    );
    (sync, mirror)
}

#[test]
fn dimensions_reflect_the_current_rendered_box() {
    let (sync, mirror) = mirror_sync();
    mirror.set("content", ElementDimensions::new(200.0, 100.0));

    let dims = sync.element_dimensions("content").unwrap();
    assert_eq!(dims, ElementDimensions::new(200.0, 100.0));
    // Reading is pure: no frames consumed.
    assert_eq!(sync.scheduler().frames_elapsed(), 0);
}

#[test]
fn dimensions_track_host_updates() {
    let (sync, mirror) = mirror_sync();
    mirror.set("content", ElementDimensions::new(200.0, 100.0));
    mirror.set("content", ElementDimensions::new(160.0, 80.0));

    let dims = sync.element_dimensions("content").unwrap();
    assert_eq!(dims, ElementDimensions::new(160.0, 80.0));
}

#[test]
fn missing_element_is_a_caller_visible_error() {
    let (sync, mirror) = mirror_sync();
    mirror.set("content", ElementDimensions::new(200.0, 100.0));
    mirror.remove("content");

    let result = sync.element_dimensions("content");
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("content"));
}
