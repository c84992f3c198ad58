//! Static scene graph state: the background sphere, the billboarded logo
//! plane and the three fixed decorative star shells.
//!
//! Geometry and materials live with the renderer; this module owns the
//! transforms and the immutable point scatter, constructed once and mutated
//! only through [`SceneGraph::scale`] and [`SceneGraph::rotate_step`].

use glam::{Mat4, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;

use crate::config::SceneConfig;
use crate::constants::{
    FIXED_LAYER_COUNT, FIXED_LAYER_POINT_COUNT, FIXED_LAYER_RADIUS_MAX, FIXED_LAYER_RADIUS_MIN,
    FIXED_LAYER_SIZE_FACTORS,
};
use crate::particles::random_point_on_sphere;

/// One decorative shell: a fixed point scatter with a per-layer sprite size.
pub struct StarLayer {
    pub positions: Vec<f32>,
    pub point_size: f32,
}

pub struct SceneGraph {
    pub config: SceneConfig,
    pub layers: SmallVec<[StarLayer; FIXED_LAYER_COUNT]>,
    sphere_rotation: Vec3,
    scale: f32,
}

impl SceneGraph {
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut layers = SmallVec::new();
        for factor in FIXED_LAYER_SIZE_FACTORS {
            let mut positions = Vec::with_capacity(FIXED_LAYER_POINT_COUNT * 3);
            for _ in 0..FIXED_LAYER_POINT_COUNT {
                // uniform direction, randomized shell radius per point
                let dir = random_point_on_sphere(&mut rng, 1.0);
                let radius = rng.gen_range(FIXED_LAYER_RADIUS_MIN..FIXED_LAYER_RADIUS_MAX);
                let p = dir * radius;
                positions.extend_from_slice(&[p.x, p.y, p.z]);
            }
            layers.push(StarLayer {
                positions,
                point_size: config.particle_size * factor,
            });
        }
        Self {
            config,
            layers,
            sphere_rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Uniform scale applied to the sphere and the logo together. There is
    /// no independent per-node scaling.
    pub fn scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    pub fn current_scale(&self) -> f32 {
        self.scale
    }

    /// Increment the sphere rotation by one tick's worth of spin.
    pub fn rotate_step(&mut self, delta: Vec3) {
        self.sphere_rotation += delta;
    }

    pub fn sphere_rotation(&self) -> Vec3 {
        self.sphere_rotation
    }

    /// Sphere center: half the sphere protrudes below the visible frame.
    pub fn sphere_center(&self) -> Vec3 {
        Vec3::new(0.0, -self.config.sphere_radius / 2.0, 0.0)
    }

    /// Model matrix for the unit-sphere mesh.
    pub fn sphere_transform(&self) -> Mat4 {
        let r = self.sphere_rotation;
        Mat4::from_translation(self.sphere_center())
            * Mat4::from_euler(glam::EulerRot::XYZ, r.x, r.y, r.z)
            * Mat4::from_scale(Vec3::splat(self.config.sphere_radius * self.scale))
    }

    /// Model matrix for the unit logo quad, re-oriented to face the camera
    /// eye. Sits at the sphere's vertical center, inside the half-visible
    /// sphere.
    pub fn logo_transform(&self, camera_eye: Vec3) -> Mat4 {
        let position = self.sphere_center();
        let mut forward = (camera_eye - position).normalize_or_zero();
        if forward.length_squared() == 0.0 {
            forward = Vec3::Z;
        }
        let mut right = Vec3::Y.cross(forward).normalize_or_zero();
        if right.length_squared() == 0.0 {
            // camera straight above or below; pick an arbitrary horizontal
            right = Vec3::X;
        }
        let up = forward.cross(right);
        let rotation = Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            position.extend(1.0),
        );
        rotation * Mat4::from_scale(Vec3::splat(self.config.logo_size * self.scale))
    }
}
