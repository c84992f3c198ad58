//! The dynamic "falling star" particle field.
//!
//! A fixed arena of particles is scattered over a sphere shell at startup and
//! then decays toward the world origin under a fixed-rate step. Particles are
//! never destroyed; when one reaches the vertical axis it is reset in place
//! to its spawn point with a fresh velocity, so the field pulses forever with
//! no allocation after construction.

use glam::Vec3;
use rand::prelude::*;

use crate::config::SceneConfig;
use crate::constants::{
    INITIAL_VELOCITY_MAX, INITIAL_VELOCITY_MIN, RESPAWN_VELOCITY_MAX, RESPAWN_VELOCITY_MIN,
    RESPAWN_WINDOW, VELOCITY_DECAY_PER_TICK,
};

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: f32,
    pub origin_position: Vec3,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    positions: Vec<f32>,
    rng: StdRng,
}

/// Uniform random point on a sphere surface via inverse-transform sampling.
pub fn random_point_on_sphere(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let theta = 2.0 * std::f32::consts::PI * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

impl ParticleField {
    pub fn new(config: &SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::with_capacity(config.star_count);
        for _ in 0..config.star_count {
            let position = random_point_on_sphere(&mut rng, config.star_field_radius);
            let velocity = rng.gen_range(INITIAL_VELOCITY_MIN..INITIAL_VELOCITY_MAX) as f32;
            particles.push(Particle {
                position,
                velocity,
                origin_position: position,
            });
        }
        log::debug!(
            "particle field: {} stars on a shell of radius {}",
            particles.len(),
            config.star_field_radius
        );
        let mut field = Self {
            positions: vec![0.0; particles.len() * 3],
            particles,
            rng,
        };
        field.write_positions();
        field
    }

    /// Advance every particle by one fixed simulation tick.
    ///
    /// Each axis steps by `(0 - position) / velocity`, an exponential approach
    /// toward the origin; the velocity then decays linearly and may cross
    /// zero, which flips the step away from the origin until respawn catches
    /// the particle. The respawn test looks at x/z only; a particle that
    /// overshoots on y alone still resets once it crosses the vertical axis.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            if p.velocity != 0.0 {
                p.position += (Vec3::ZERO - p.position) / p.velocity;
            }
            p.velocity -= VELOCITY_DECAY_PER_TICK;

            if p.position.x.abs() <= RESPAWN_WINDOW && p.position.z.abs() <= RESPAWN_WINDOW {
                p.position = p.origin_position;
                p.velocity = self
                    .rng
                    .gen_range(RESPAWN_VELOCITY_MIN..RESPAWN_VELOCITY_MAX)
                    as f32;
            }
        }
        self.write_positions();
    }

    /// Flat xyz buffer for the renderer. Length is always `3 * star_count`.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    fn write_positions(&mut self) {
        for (i, p) in self.particles.iter().enumerate() {
            self.positions[i * 3] = p.position.x;
            self.positions[i * 3 + 1] = p.position.y;
            self.positions[i * 3 + 2] = p.position.z;
        }
    }
}
