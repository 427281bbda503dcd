// Host-side tests for the per-frame animation driver.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod animation {
    include!("../src/core/animation.rs");
}

use animation::*;

#[test]
fn tick_writes_elapsed_into_both_scalars() {
    let mut animator = FrameAnimator::new(AnimationClock::start());
    let mut scalars = AnimationScalars::default();

    assert_eq!(animator.advance(1.5, &mut scalars), 1.5);
    assert_eq!(scalars.fireflies_time, 1.5);
    assert_eq!(scalars.portal_time, 1.5);

    animator.advance(1.7, &mut scalars);
    assert_eq!(scalars.fireflies_time, 1.7);
    assert_eq!(scalars.portal_time, 1.7);
}

#[test]
fn regressing_time_source_is_held() {
    let mut animator = FrameAnimator::new(AnimationClock::start());
    let mut scalars = AnimationScalars::default();
    animator.advance(2.0, &mut scalars);
    assert_eq!(animator.advance(1.0, &mut scalars), 2.0);
    assert_eq!(scalars.portal_time, 2.0);
    assert_eq!(animator.elapsed(), 2.0);
}

#[test]
fn non_finite_time_is_ignored() {
    let mut animator = FrameAnimator::new(AnimationClock::start());
    let mut scalars = AnimationScalars::default();
    animator.advance(0.5, &mut scalars);
    animator.advance(f32::NAN, &mut scalars);
    assert_eq!(scalars.fireflies_time, 0.5);
    animator.advance(f32::INFINITY, &mut scalars);
    assert_eq!(scalars.fireflies_time, 0.5);
}

#[test]
fn counts_every_tick() {
    let mut animator = FrameAnimator::new(AnimationClock::start());
    let mut scalars = AnimationScalars::default();
    assert_eq!(animator.ticks(), 0);
    for i in 0..5 {
        animator.advance(i as f32 * 0.016, &mut scalars);
    }
    assert_eq!(animator.ticks(), 5);
}

#[test]
fn real_clock_never_decreases() {
    let mut animator = FrameAnimator::new(AnimationClock::start());
    let mut scalars = AnimationScalars::default();
    let mut last = 0.0;
    for _ in 0..100 {
        let t = animator.tick(&mut scalars);
        assert!(t >= last);
        assert_eq!(scalars.fireflies_time, scalars.portal_time);
        last = t;
    }
}
