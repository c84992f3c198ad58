// Host-side tests for viewport classification and scene configuration.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{DeviceClass, SceneConfig};

#[test]
fn classifier_matches_thresholds_exactly_at_boundaries() {
    assert_eq!(DeviceClass::classify(768), DeviceClass::Mobile);
    assert_eq!(DeviceClass::classify(769), DeviceClass::Tablet);
    assert_eq!(DeviceClass::classify(1024), DeviceClass::Tablet);
    assert_eq!(DeviceClass::classify(1025), DeviceClass::Desktop);
}

#[test]
fn classifier_covers_extremes() {
    assert_eq!(DeviceClass::classify(0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::classify(320), DeviceClass::Mobile);
    assert_eq!(DeviceClass::classify(3840), DeviceClass::Desktop);
}

#[test]
fn config_scales_up_with_device_class() {
    let mobile = SceneConfig::for_device(DeviceClass::Mobile);
    let tablet = SceneConfig::for_device(DeviceClass::Tablet);
    let desktop = SceneConfig::for_device(DeviceClass::Desktop);

    assert!(mobile.star_count < tablet.star_count);
    assert!(tablet.star_count < desktop.star_count);
    assert!(mobile.sphere_radius < tablet.sphere_radius);
    assert!(tablet.sphere_radius < desktop.sphere_radius);
    assert!(mobile.star_field_radius > mobile.sphere_radius);
    assert!(desktop.star_field_radius > desktop.sphere_radius);
}

#[test]
fn config_orbit_range_brackets_camera_distance() {
    for class in [DeviceClass::Mobile, DeviceClass::Tablet, DeviceClass::Desktop] {
        let cfg = SceneConfig::for_device(class);
        assert!(cfg.orbit_min_distance <= cfg.camera_distance);
        assert!(cfg.camera_distance <= cfg.orbit_max_distance);
    }
}

#[test]
fn scroll_scale_factor_is_device_dependent() {
    assert_eq!(
        SceneConfig::for_device(DeviceClass::Mobile).max_scroll_scale_factor,
        0.6
    );
    assert_eq!(
        SceneConfig::for_device(DeviceClass::Tablet).max_scroll_scale_factor,
        0.65
    );
    assert_eq!(
        SceneConfig::for_device(DeviceClass::Desktop).max_scroll_scale_factor,
        0.6
    );
}

#[test]
fn for_viewport_composes_classify_and_lookup() {
    let cfg = SceneConfig::for_viewport(500);
    assert_eq!(cfg.star_count, SceneConfig::for_device(DeviceClass::Mobile).star_count);
}
