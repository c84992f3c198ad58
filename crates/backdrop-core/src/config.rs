//! Viewport classification and the per-device scene configuration.
//!
//! The device class is derived once from the viewport width at engine
//! startup and fixes every size constant for the engine's lifetime. Only the
//! scroll-scale limit is re-read from the live width each frame (see
//! [`crate::camera::scroll_scale_limit`]).

use crate::constants::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Bucket a viewport width (CSS px) into a device class.
    pub fn classify(viewport_width: u32) -> Self {
        if viewport_width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if viewport_width <= TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Constant bundle selected per device class. Immutable once selected.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub sphere_radius: f32,
    pub star_field_radius: f32,
    pub star_count: usize,
    pub particle_size: f32,
    pub logo_size: f32,
    pub camera_distance: f32,
    pub orbit_min_distance: f32,
    pub orbit_max_distance: f32,
    pub max_scroll_scale_factor: f32,
}

impl SceneConfig {
    pub fn for_device(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Mobile => Self {
                sphere_radius: 30.0,
                star_field_radius: 60.0,
                star_count: 800,
                particle_size: 1.2,
                logo_size: 12.0,
                camera_distance: 40.0,
                orbit_min_distance: 30.0,
                orbit_max_distance: 80.0,
                max_scroll_scale_factor: 0.6,
            },
            DeviceClass::Tablet => Self {
                sphere_radius: 40.0,
                star_field_radius: 75.0,
                star_count: 1200,
                particle_size: 1.4,
                logo_size: 16.0,
                camera_distance: 50.0,
                orbit_min_distance: 35.0,
                orbit_max_distance: 100.0,
                max_scroll_scale_factor: 0.65,
            },
            DeviceClass::Desktop => Self {
                sphere_radius: 50.0,
                star_field_radius: 90.0,
                star_count: 2000,
                particle_size: 1.5,
                logo_size: 20.0,
                camera_distance: 60.0,
                orbit_min_distance: 40.0,
                orbit_max_distance: 120.0,
                max_scroll_scale_factor: 0.6,
            },
        }
    }

    /// Classify a viewport and resolve its configuration in one call.
    pub fn for_viewport(viewport_width: u32) -> Self {
        Self::for_device(DeviceClass::classify(viewport_width))
    }
}
