// Host-side tests for the scroll-progress scale mapping.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{scroll_scale, scroll_scale_limit, scroll, DeviceClass, SceneConfig};

fn limit(class: DeviceClass) -> f32 {
    SceneConfig::for_device(class).max_scroll_scale_factor
}

#[test]
fn zero_progress_is_identity_for_every_device() {
    for class in [DeviceClass::Mobile, DeviceClass::Tablet, DeviceClass::Desktop] {
        assert_eq!(scroll_scale(0.0, limit(class)), 1.0);
    }
}

#[test]
fn full_progress_reaches_the_device_limit() {
    assert!((scroll_scale(2.0, limit(DeviceClass::Mobile)) - 0.6).abs() < 1e-6);
    assert!((scroll_scale(2.0, limit(DeviceClass::Tablet)) - 0.65).abs() < 1e-6);
    assert!((scroll_scale(2.0, limit(DeviceClass::Desktop)) - 0.6).abs() < 1e-6);
}

#[test]
fn mapping_is_linear_in_progress() {
    let f = limit(DeviceClass::Mobile);
    let mid = scroll_scale(1.0, f);
    assert!((mid - (1.0 + f) / 2.0).abs() < 1e-6);
}

#[test]
fn output_is_not_clamped() {
    // out-of-range progress keeps shrinking the scene; callers own the bound
    let f = limit(DeviceClass::Mobile);
    let beyond = scroll_scale(6.0, f);
    assert!(beyond < f);
    let inverted = scroll_scale(20.0, f);
    assert!(inverted < 0.0, "far overscroll inverts the scale");
}

#[test]
fn doubling_maps_page_progress_into_engine_range() {
    assert_eq!(scroll::doubled(0.0), 0.0);
    assert_eq!(scroll::doubled(0.5), 1.0);
    assert_eq!(scroll::doubled(1.0), 2.0);
}

#[test]
fn live_limit_follows_the_current_viewport_width() {
    // startup class never changes, but the scroll ceiling tracks live width
    assert_eq!(scroll_scale_limit(500), 0.6);
    assert_eq!(scroll_scale_limit(900), 0.65);
    assert_eq!(scroll_scale_limit(1600), 0.6);
}
