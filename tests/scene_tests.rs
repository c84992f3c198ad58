// Host-side tests for the scene graph state.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{
    DeviceClass, SceneConfig, SceneGraph, FIXED_LAYER_COUNT, FIXED_LAYER_POINT_COUNT,
    FIXED_LAYER_RADIUS_MAX, FIXED_LAYER_RADIUS_MIN,
};
use glam::{Vec3, Vec4};

fn make_scene() -> SceneGraph {
    SceneGraph::new(SceneConfig::for_device(DeviceClass::Desktop), 7)
}

#[test]
fn sphere_sits_half_below_the_frame() {
    let scene = make_scene();
    assert_eq!(
        scene.sphere_center(),
        Vec3::new(0.0, -scene.config.sphere_radius / 2.0, 0.0)
    );
    // the transform carries that translation
    let t = scene.sphere_transform();
    let origin = t * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin.y - scene.sphere_center().y).abs() < 1e-4);
}

#[test]
fn one_scale_factor_drives_sphere_and_logo_together() {
    let mut scene = make_scene();
    scene.scale(0.5);
    assert_eq!(scene.current_scale(), 0.5);

    // a unit x vector through each transform measures the applied scale
    let sx = (scene.sphere_transform() * Vec4::new(1.0, 0.0, 0.0, 0.0)).truncate();
    assert!((sx.length() - scene.config.sphere_radius * 0.5).abs() < 1e-3);

    let eye = Vec3::new(0.0, 0.0, 100.0);
    let lx = (scene.logo_transform(eye) * Vec4::new(1.0, 0.0, 0.0, 0.0)).truncate();
    assert!((lx.length() - scene.config.logo_size * 0.5).abs() < 1e-3);
}

#[test]
fn rotate_step_accumulates() {
    let mut scene = make_scene();
    scene.rotate_step(Vec3::new(0.0, 0.01, 0.0));
    scene.rotate_step(Vec3::new(0.0, 0.01, 0.0));
    assert!((scene.sphere_rotation().y - 0.02).abs() < 1e-6);
}

#[test]
fn logo_billboard_faces_the_camera_eye() {
    let scene = make_scene();
    for eye in [
        Vec3::new(0.0, 0.0, 80.0),
        Vec3::new(50.0, 10.0, -30.0),
        Vec3::new(-20.0, 40.0, 5.0),
    ] {
        let t = scene.logo_transform(eye);
        // the quad's +z axis (third column) points from the logo to the eye
        let normal = (t * Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate().normalize();
        let to_eye = (eye - scene.sphere_center()).normalize();
        assert!(
            normal.dot(to_eye) > 0.999,
            "billboard normal {normal:?} should face eye dir {to_eye:?}"
        );
    }
}

#[test]
fn logo_handles_a_camera_directly_overhead() {
    let scene = make_scene();
    let eye = scene.sphere_center() + Vec3::new(0.0, 90.0, 0.0);
    let t = scene.logo_transform(eye);
    assert!(t.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn fixed_layers_have_documented_shape() {
    let scene = make_scene();
    assert_eq!(scene.layers.len(), FIXED_LAYER_COUNT);
    for layer in scene.layers.iter() {
        assert_eq!(layer.positions.len(), FIXED_LAYER_POINT_COUNT * 3);
        assert!(layer.point_size > 0.0);
        for chunk in layer.positions.chunks_exact(3) {
            let r = Vec3::new(chunk[0], chunk[1], chunk[2]).length();
            assert!(
                (FIXED_LAYER_RADIUS_MIN - 1e-3..FIXED_LAYER_RADIUS_MAX).contains(&r),
                "shell radius {r} out of range"
            );
        }
    }
}

#[test]
fn layer_scatter_is_deterministic_per_seed() {
    let a = make_scene();
    let b = make_scene();
    assert_eq!(a.layers[0].positions, b.layers[0].positions);
}
