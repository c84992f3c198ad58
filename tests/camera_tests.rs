// Host-side tests for the orbit camera rig.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{CameraRig, DeviceClass, SceneConfig, AUTO_ROTATE_RADIANS_PER_SEC};
use glam::Vec3;

fn make_rig() -> (SceneConfig, CameraRig) {
    let config = SceneConfig::for_device(DeviceClass::Desktop);
    let rig = CameraRig::new(&config, 16.0 / 9.0);
    (config, rig)
}

#[test]
fn rig_starts_at_the_configured_distance() {
    let (config, rig) = make_rig();
    assert_eq!(rig.distance(), config.camera_distance);
    let eye_dist = (rig.camera.eye - rig.camera.target).length();
    assert!((eye_dist - config.camera_distance).abs() < 1e-3);
}

#[test]
fn update_advances_the_auto_rotation() {
    let (_, mut rig) = make_rig();
    let before = rig.azimuth();
    rig.update(1.0);
    assert!((rig.azimuth() - before - AUTO_ROTATE_RADIANS_PER_SEC).abs() < 1e-6);
    // eye keeps orbiting at constant distance
    let eye_dist = (rig.camera.eye - rig.camera.target).length();
    assert!((eye_dist - rig.distance()).abs() < 1e-3);
}

#[test]
fn zoom_is_clamped_to_the_orbit_range() {
    let (config, mut rig) = make_rig();
    rig.zoom(1.0e6);
    assert_eq!(rig.distance(), config.orbit_max_distance);
    rig.zoom(-1.0e7);
    assert_eq!(rig.distance(), config.orbit_min_distance);
}

#[test]
fn drag_rotation_clamps_the_polar_angle() {
    let (_, mut rig) = make_rig();
    // drag hard toward the pole; the eye must never cross it
    for _ in 0..100 {
        rig.rotate(0.0, 1.0);
    }
    let up_dot = (rig.camera.eye - rig.camera.target).normalize().dot(Vec3::Y);
    assert!(up_dot.abs() < 1.0 - 1e-4, "eye must stay off the pole");
}

#[test]
fn drag_inertia_decays_over_time() {
    let (_, mut rig) = make_rig();
    rig.rotate(0.5, 0.0);
    let just_after = rig.azimuth();
    rig.update(1.0);
    let drift_1 = rig.azimuth() - just_after - AUTO_ROTATE_RADIANS_PER_SEC;
    for _ in 0..20 {
        rig.update(1.0);
    }
    let before = rig.azimuth();
    rig.update(1.0);
    let drift_late = rig.azimuth() - before - AUTO_ROTATE_RADIANS_PER_SEC;
    assert!(drift_late.abs() < drift_1.abs() / 10.0, "inertia should die out");
}

#[test]
fn aspect_update_changes_projection_only() {
    let (config, mut rig) = make_rig();
    let eye = rig.camera.eye;
    rig.set_aspect(2.0);
    assert_eq!(rig.camera.aspect, 2.0);
    assert_eq!(rig.camera.eye, eye);
    assert_eq!(rig.distance(), config.camera_distance);
}

#[test]
fn projection_and_view_matrices_are_consistent() {
    let (_, rig) = make_rig();
    let view = rig.camera.view_matrix();
    // the eye maps to the view-space origin
    let eye_view = view.transform_point3(rig.camera.eye);
    assert!(eye_view.length() < 1e-3);
    let proj = rig.camera.projection_matrix();
    assert!(proj.to_cols_array().iter().all(|v| v.is_finite()));
}
