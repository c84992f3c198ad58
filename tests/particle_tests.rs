// Host-side tests for the falling-star particle field.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{
    DeviceClass, ParticleField, SceneConfig, INITIAL_VELOCITY_MAX, INITIAL_VELOCITY_MIN,
    RESPAWN_VELOCITY_MAX, RESPAWN_VELOCITY_MIN, VELOCITY_DECAY_PER_TICK,
};
use glam::Vec3;

fn make_field() -> (SceneConfig, ParticleField) {
    let config = SceneConfig::for_device(DeviceClass::Mobile);
    let field = ParticleField::new(&config, 42);
    (config, field)
}

#[test]
fn init_places_every_particle_on_the_field_sphere() {
    let (config, field) = make_field();
    assert_eq!(field.particles.len(), config.star_count);
    for p in &field.particles {
        let r = p.position.length();
        assert!(
            (r - config.star_field_radius).abs() < 1e-3,
            "expected |position| ~= {}, got {r}",
            config.star_field_radius
        );
        assert_eq!(p.origin_position, p.position);
    }
}

#[test]
fn init_draws_velocity_from_documented_range() {
    let (_, field) = make_field();
    for p in &field.particles {
        assert!(p.velocity >= INITIAL_VELOCITY_MIN as f32);
        assert!(p.velocity < INITIAL_VELOCITY_MAX as f32);
        assert_eq!(p.velocity.fract(), 0.0, "initial velocity is integral");
    }
}

#[test]
fn positions_buffer_is_three_floats_per_particle() {
    let (config, mut field) = make_field();
    assert_eq!(field.positions().len(), 3 * config.star_count);
    field.step();
    assert_eq!(field.positions().len(), 3 * config.star_count);
    let p0 = &field.particles[0];
    assert_eq!(field.positions()[0], p0.position.x);
    assert_eq!(field.positions()[1], p0.position.y);
    assert_eq!(field.positions()[2], p0.position.z);
}

#[test]
fn particle_inside_respawn_window_resets_in_one_step() {
    let (_, mut field) = make_field();
    let origin = field.particles[0].origin_position;
    field.particles[0].position = Vec3::new(0.1, 80.0, 0.2);
    field.particles[0].velocity = 1.0;

    field.step();

    let p = &field.particles[0];
    assert_eq!(p.position, origin, "respawn returns the particle to its origin");
    assert!(p.velocity >= RESPAWN_VELOCITY_MIN as f32);
    assert!(p.velocity < RESPAWN_VELOCITY_MAX as f32);
}

#[test]
fn respawn_window_checks_x_and_z_only() {
    let (_, mut field) = make_field();
    let origin = field.particles[0].origin_position;
    // y far outside any 3D-distance window; x/z already at the axis
    field.particles[0].position = Vec3::new(0.0, 500.0, 0.0);
    field.particles[0].velocity = 1000.0;

    field.step();

    assert_eq!(field.particles[0].position, origin);
}

#[test]
fn velocity_decays_by_exactly_point_three_per_step_until_respawn() {
    let (_, mut field) = make_field();
    field.particles[0].position = Vec3::new(50.0, 10.0, 50.0);
    field.particles[0].velocity = 100.0;

    let mut expected = 100.0f32;
    for _ in 0..10 {
        field.step();
        expected -= VELOCITY_DECAY_PER_TICK;
        let p = &field.particles[0];
        assert!(
            p.position.x.abs() > 5.0 || p.position.z.abs() > 5.0,
            "particle should still be outside the respawn window"
        );
        assert!((p.velocity - expected).abs() < 1e-4);
    }
}

#[test]
fn zero_velocity_does_not_divide() {
    let (_, mut field) = make_field();
    field.particles[0].position = Vec3::new(40.0, 0.0, 40.0);
    field.particles[0].velocity = 0.0;

    field.step();

    let p = &field.particles[0];
    // no displacement that tick, only the decay
    assert_eq!(p.position, Vec3::new(40.0, 0.0, 40.0));
    assert!((p.velocity + VELOCITY_DECAY_PER_TICK).abs() < 1e-6);
    assert!(p.position.x.is_finite() && p.position.y.is_finite() && p.position.z.is_finite());
}

#[test]
fn negative_velocity_pushes_away_until_respawn_is_reached() {
    let (_, mut field) = make_field();
    field.particles[0].position = Vec3::new(10.0, 0.0, 10.0);
    field.particles[0].velocity = -2.0;

    field.step();

    // (0 - 10) / -2 = +5 on each axis
    let p = &field.particles[0];
    assert_eq!(p.position, Vec3::new(15.0, 0.0, 15.0));
}

#[test]
fn same_seed_reproduces_the_same_scatter() {
    let config = SceneConfig::for_device(DeviceClass::Tablet);
    let a = ParticleField::new(&config, 7);
    let b = ParticleField::new(&config, 7);
    for (pa, pb) in a.particles.iter().zip(b.particles.iter()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
    }
}
