// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Timing
    assert!(SIM_STEP_SECS > 0.0);
    assert!((SIM_STEP_SECS - 1.0 / 60.0).abs() < 1e-12);

    // Particle tuning
    assert!(RESPAWN_WINDOW > 0.0);
    assert!(VELOCITY_DECAY_PER_TICK > 0.0);

    // Camera
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(AUTO_ROTATE_RADIANS_PER_SEC > 0.0);
    assert!(ORBIT_POLAR_MIN > 0.0);
    assert!(ORBIT_POLAR_MAX < std::f32::consts::PI);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn velocity_ranges_are_ordered() {
    assert!(INITIAL_VELOCITY_MIN < INITIAL_VELOCITY_MAX);
    assert!(RESPAWN_VELOCITY_MIN < RESPAWN_VELOCITY_MAX);
    // a respawned star can be slower or faster than a fresh one, but the
    // ranges share a floor
    assert_eq!(INITIAL_VELOCITY_MIN, RESPAWN_VELOCITY_MIN);
    assert!(RESPAWN_VELOCITY_MAX >= INITIAL_VELOCITY_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn device_thresholds_are_ordered() {
    assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fixed_layer_shell_range_is_well_formed() {
    assert!(FIXED_LAYER_RADIUS_MIN < FIXED_LAYER_RADIUS_MAX);
    assert_eq!(FIXED_LAYER_SIZE_FACTORS.len(), FIXED_LAYER_COUNT);
    for f in FIXED_LAYER_SIZE_FACTORS {
        assert!(f > 0.0 && f <= 1.0);
    }
}
