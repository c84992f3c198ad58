// Host-side tests for the fixed-step frame scheduler.
// The main crate is wasm-only, so these exercise the shared core crate.

use backdrop_core::{FrameScheduler, SIM_STEP_SECS};
use std::time::Duration;

fn interval() -> Duration {
    Duration::from_secs_f64(SIM_STEP_SECS)
}

#[test]
fn short_callback_is_skipped() {
    let mut sched = FrameScheduler::new();
    assert!(!sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 0.5)));
}

#[test]
fn one_interval_yields_one_step() {
    let mut sched = FrameScheduler::new();
    assert!(sched.advance(interval()));
    // immediately afterwards there is nothing left to consume
    assert!(!sched.advance(Duration::ZERO));
}

#[test]
fn triple_interval_in_one_callback_yields_exactly_one_step() {
    let mut sched = FrameScheduler::new();
    assert!(sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 3.0)));
    // the backlog is dropped, not replayed on later callbacks
    assert!(!sched.advance(Duration::ZERO));
    assert!(!sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 0.25)));
}

#[test]
fn fractional_remainder_carries_across_callbacks() {
    let mut sched = FrameScheduler::new();
    assert!(!sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 0.75)));
    // 0.75 + 0.5 = 1.25 intervals: step now, keep the 0.25 leftover
    assert!(sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 0.5)));
    assert!((sched.accumulator_secs() - SIM_STEP_SECS * 0.25).abs() < 1e-9);
    // the leftover finishes the next interval early
    assert!(sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 0.8)));
}

#[test]
fn steady_sixty_hz_steps_every_callback() {
    let mut sched = FrameScheduler::new();
    let mut steps = 0;
    for _ in 0..120 {
        if sched.advance(interval()) {
            steps += 1;
        }
    }
    assert_eq!(steps, 120);
}

#[test]
fn thirty_hz_display_still_steps_once_per_callback() {
    // a 30 Hz display delivers two intervals at a time; the policy is still
    // one step per callback, the surplus is discarded
    let mut sched = FrameScheduler::new();
    let mut steps = 0;
    for _ in 0..60 {
        if sched.advance(Duration::from_secs_f64(SIM_STEP_SECS * 2.0)) {
            steps += 1;
        }
    }
    assert_eq!(steps, 60);
}
