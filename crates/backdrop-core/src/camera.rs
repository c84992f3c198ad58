//! Perspective camera and the orbit rig that drives it.
//!
//! The rig auto-rotates continuously, accepts pointer-drag rotation with
//! damped inertia and wheel zoom clamped to the configured distance range,
//! and deliberately has no panning input. Every size parameter is fixed at
//! startup; only the scroll-scale limit is re-derived from the live viewport
//! width each frame.

use glam::{Mat4, Vec3};

use crate::config::{DeviceClass, SceneConfig};
use crate::constants::{
    AUTO_ROTATE_RADIANS_PER_SEC, CAMERA_FAR, CAMERA_FOV_RADIANS, CAMERA_NEAR,
    ORBIT_DAMPING_PER_SEC, ORBIT_POLAR_MAX, ORBIT_POLAR_MIN, ORBIT_ZOOM_SENSITIVITY,
};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

pub struct CameraRig {
    pub camera: Camera,
    azimuth: f32,
    polar: f32,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    azimuth_velocity: f32,
    polar_velocity: f32,
}

impl CameraRig {
    pub fn new(config: &SceneConfig, aspect: f32) -> Self {
        let mut rig = Self {
            camera: Camera {
                eye: Vec3::ZERO,
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy_radians: CAMERA_FOV_RADIANS,
                znear: CAMERA_NEAR,
                zfar: CAMERA_FAR,
            },
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: config.camera_distance,
            min_distance: config.orbit_min_distance,
            max_distance: config.orbit_max_distance,
            azimuth_velocity: 0.0,
            polar_velocity: 0.0,
        };
        rig.sync_eye();
        rig
    }

    /// Advance auto-rotation and drag inertia; called once per rendered frame.
    pub fn update(&mut self, dt_sec: f32) {
        self.azimuth += AUTO_ROTATE_RADIANS_PER_SEC * dt_sec;
        self.azimuth += self.azimuth_velocity * dt_sec;
        self.polar = (self.polar + self.polar_velocity * dt_sec)
            .clamp(ORBIT_POLAR_MIN, ORBIT_POLAR_MAX);
        let decay = (-ORBIT_DAMPING_PER_SEC * dt_sec).exp();
        self.azimuth_velocity *= decay;
        self.polar_velocity *= decay;
        self.sync_eye();
    }

    /// Pointer drag input in radians (already scaled by drag sensitivity).
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar = (self.polar + d_polar).clamp(ORBIT_POLAR_MIN, ORBIT_POLAR_MAX);
        // impulse so the orbit keeps drifting briefly after release
        self.azimuth_velocity = d_azimuth * ORBIT_DAMPING_PER_SEC;
        self.polar_velocity = d_polar * ORBIT_DAMPING_PER_SEC;
        self.sync_eye();
    }

    /// Wheel zoom; positive delta moves the eye away. Distance stays inside
    /// the configured [min, max] range.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta * ORBIT_ZOOM_SENSITIVITY)
            .clamp(self.min_distance, self.max_distance);
        self.sync_eye();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    fn sync_eye(&mut self) {
        let sin_polar = self.polar.sin();
        self.camera.eye = self.camera.target
            + self.distance
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                );
    }
}

/// Scroll-scale limit for the *current* viewport width.
///
/// Unlike every other camera parameter this is re-evaluated live each frame,
/// so a window dragged across a device-class boundary changes the scroll
/// ceiling without rebuilding the scene. Source behavior, kept as is.
pub fn scroll_scale_limit(live_viewport_width: u32) -> f32 {
    SceneConfig::for_device(DeviceClass::classify(live_viewport_width)).max_scroll_scale_factor
}
