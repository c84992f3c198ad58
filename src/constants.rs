// Web-harness tuning constants

// Resize debounce: one reconfigure after this much quiescence
pub const RESIZE_DEBOUNCE_MS: i32 = 80;

// Seeds for the deterministic scatter (fixed, like the rest of the layout)
pub const PARTICLE_FIELD_SEED: u64 = 42;
pub const STAR_LAYER_SEED: u64 = 7;
