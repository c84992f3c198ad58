// Shared tuning constants used by both the web and native frontends.

// Device classification (CSS px)
pub const MOBILE_MAX_WIDTH: u32 = 768;
pub const TABLET_MAX_WIDTH: u32 = 1024;

// Simulation timing
pub const SIM_STEP_SECS: f64 = 1.0 / 60.0; // fixed simulation interval

// Particle field
pub const RESPAWN_WINDOW: f32 = 5.0; // |x| and |z| threshold near the vertical axis
pub const VELOCITY_DECAY_PER_TICK: f32 = 0.3;
pub const INITIAL_VELOCITY_MIN: i32 = 50;
pub const INITIAL_VELOCITY_MAX: i32 = 200; // exclusive
pub const RESPAWN_VELOCITY_MIN: i32 = 50;
pub const RESPAWN_VELOCITY_MAX: i32 = 300; // exclusive

// Fixed decorative star shells
pub const FIXED_LAYER_COUNT: usize = 3;
pub const FIXED_LAYER_POINT_COUNT: usize = 250;
pub const FIXED_LAYER_RADIUS_MIN: f32 = 70.0;
pub const FIXED_LAYER_RADIUS_MAX: f32 = 149.0; // exclusive
pub const FIXED_LAYER_SIZE_FACTORS: [f32; FIXED_LAYER_COUNT] = [1.0, 0.8, 0.6];

// Sphere spin applied once per simulated tick (radians)
pub const SPHERE_SPIN_STEP: [f32; 3] = [0.0, 0.0008, 0.0];

// Camera
pub const CAMERA_FOV_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const AUTO_ROTATE_RADIANS_PER_SEC: f32 = 0.12;
pub const ORBIT_DRAG_SENSITIVITY: f32 = 0.005; // radians per css px dragged
pub const ORBIT_DAMPING_PER_SEC: f32 = 6.0; // exponential decay rate of drag inertia
pub const ORBIT_POLAR_MIN: f32 = 0.15; // keep away from the poles
pub const ORBIT_POLAR_MAX: f32 = std::f32::consts::PI - 0.15;
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.05; // world units per wheel delta unit

// Scroll
pub const SCROLL_PROGRESS_MULTIPLIER: f32 = 2.0; // engine doubles the page's [0,1] progress
