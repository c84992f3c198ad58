//! Scroll-progress to scene-scale mapping.

use crate::constants::SCROLL_PROGRESS_MULTIPLIER;

/// Map doubled scroll progress to a uniform scene scale.
///
/// `progress` is expected in [0, 2] (the caller doubles the page's [0, 1]
/// value, see [`doubled`]); `max_factor` is the device-dependent scale the
/// scene reaches at full progress, so the output runs linearly from 1.0 down
/// to `max_factor`. The output is intentionally unclamped: progress past 2
/// keeps shrinking the scene and can eventually invert it. Callers own the
/// input bound.
pub fn scroll_scale(progress: f32, max_factor: f32) -> f32 {
    1.0 - (progress / SCROLL_PROGRESS_MULTIPLIER) * (1.0 - max_factor)
}

/// Double an incoming [0, 1] page progress value into engine range.
pub fn doubled(page_progress: f64) -> f32 {
    page_progress as f32 * SCROLL_PROGRESS_MULTIPLIER
}
