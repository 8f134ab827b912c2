//! Motion Primitive Tests
//!
//! Tests for:
//! - Oscillator sampling and the default bank's detuning
//! - PointerFollow exponential smoothing (convergence, no overshoot)
//! - Input pointer normalization

use anima::input::Input;
use anima::rig::{Oscillator, OscillatorBank, PointerFollow};
use glam::Vec2;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Oscillator
// ============================================================================

#[test]
fn oscillator_is_pure_sine() {
    let osc = Oscillator::new(1.0, 0.0);
    assert!(approx(osc.sample(0.0), 0.0));
    assert!(approx(osc.sample(std::f32::consts::FRAC_PI_2), 1.0));
    assert!(approx(osc.sample(std::f32::consts::PI), 0.0));
}

#[test]
fn oscillator_phase_offsets_the_signal() {
    let osc = Oscillator::new(1.1, 0.5);
    assert!(approx(osc.sample(0.0), 0.5_f32.sin()));
    assert!(approx(osc.sample(2.0), (2.0_f32 * 1.1 + 0.5).sin()));
}

#[test]
fn oscillator_stays_in_unit_range() {
    let bank = OscillatorBank::default();
    for i in 0..2000 {
        let t = i as f32 * 0.037;
        let frame = bank.sample(t);
        for v in [frame.head, frame.spine, frame.body, frame.arm, frame.leg] {
            assert!(v.abs() <= 1.0 + EPSILON, "t={t}: {v} out of range");
        }
    }
}

#[test]
fn oscillator_sampling_has_no_state() {
    let bank = OscillatorBank::default();
    let a = bank.sample(3.7);
    let b = bank.sample(3.7);
    assert_eq!(a, b, "Sampling must not mutate the bank");
}

#[test]
fn default_bank_is_detuned() {
    let bank = OscillatorBank::default();
    assert!(approx(bank.head.frequency, 0.7));
    assert!(approx(bank.spine.frequency, 1.0));
    assert!(approx(bank.body.frequency, 1.3));
    assert!(approx(bank.arm.frequency, 1.1));
    assert!(approx(bank.leg.frequency, 1.3));

    // The body and leg cycles share a frequency but are held apart by phase
    assert!(approx(bank.body.phase, 0.0));
    assert!(approx(bank.leg.phase, 1.0));
    assert!(approx(bank.arm.phase, 0.5));

    let frame = bank.sample(0.0);
    assert!(
        !approx(frame.body, frame.leg),
        "Phase offset must desynchronize body and leg cycles"
    );
}

// ============================================================================
// PointerFollow: Smoothing
// ============================================================================

#[test]
fn smoothing_single_step() {
    let mut follow = PointerFollow::new();
    follow.retarget(Vec2::new(1.0, -0.5));
    follow.advance(0.03);

    assert!(approx(follow.current.x, 0.03));
    assert!(approx(follow.current.y, -0.015));
    // The raw target is untouched by smoothing
    assert!(approx(follow.target.x, 1.0));
    assert!(approx(follow.target.y, -0.5));
}

#[test]
fn smoothing_converges_monotonically_without_overshoot() {
    // From below and from above, with an asymmetric start
    for start in [-5.0_f32, 0.0, 7.5] {
        let target = 2.0_f32;
        let mut follow = PointerFollow {
            target: Vec2::splat(target),
            current: Vec2::splat(start),
        };

        let mut prev_dist = (target - start).abs();
        for step in 0..2000 {
            follow.advance(0.03);
            let dist = (target - follow.current.x).abs();
            assert!(
                dist <= prev_dist + EPSILON,
                "start={start} step={step}: distance grew from {prev_dist} to {dist}"
            );
            // Never crosses the target
            if start < target {
                assert!(follow.current.x <= target + EPSILON);
            } else {
                assert!(follow.current.x >= target - EPSILON);
            }
            prev_dist = dist;
        }
        assert!(
            prev_dist < 1e-3,
            "start={start}: did not converge, residual {prev_dist}"
        );
    }
}

#[test]
fn smoothing_axes_are_independent() {
    let mut follow = PointerFollow::new();
    follow.retarget(Vec2::new(1.0, 0.0));
    for _ in 0..100 {
        follow.advance(0.03);
    }
    assert!(follow.current.x > 0.9);
    assert!(approx(follow.current.y, 0.0), "Idle axis must stay put");
}

#[test]
fn retarget_mid_flight_redirects_smoothly() {
    let mut follow = PointerFollow::new();
    follow.retarget(Vec2::new(1.0, 0.0));
    for _ in 0..50 {
        follow.advance(0.03);
    }
    let before = follow.current.x;

    follow.retarget(Vec2::new(-1.0, 0.0));
    follow.advance(0.03);
    assert!(
        follow.current.x < before,
        "New target pulls the smoothed value the other way"
    );
    assert!(
        follow.current.x > -1.0,
        "No snapping to the new target"
    );
}

// ============================================================================
// Input: Pointer Normalization
// ============================================================================

#[test]
fn pointer_ndc_maps_viewport_corners() {
    let mut input = Input::new();
    input.handle_resize(1280, 720);

    input.handle_cursor_move(0.0, 0.0);
    assert_eq!(input.pointer_ndc(), Vec2::new(-1.0, -1.0));

    input.handle_cursor_move(1280.0, 720.0);
    assert_eq!(input.pointer_ndc(), Vec2::new(1.0, 1.0));

    input.handle_cursor_move(640.0, 360.0);
    assert_eq!(input.pointer_ndc(), Vec2::ZERO);
}

#[test]
fn pointer_ndc_tracks_resize() {
    let mut input = Input::new();
    input.handle_resize(1000, 500);
    input.handle_cursor_move(750.0, 125.0);
    let ndc = input.pointer_ndc();
    assert!(approx(ndc.x, 0.5));
    assert!(approx(ndc.y, -0.5));

    // Same cursor, smaller window: normalized value shifts
    input.handle_resize(750, 250);
    let ndc = input.pointer_ndc();
    assert!(approx(ndc.x, 1.0));
    assert!(approx(ndc.y, 0.0));
}

#[test]
fn pointer_ndc_degenerate_viewport_is_zero() {
    let mut input = Input::new();
    input.handle_cursor_move(100.0, 100.0);
    // No resize yet: size is (0, 0)
    assert_eq!(input.pointer_ndc(), Vec2::ZERO);

    input.handle_resize(0, 720);
    assert_eq!(input.pointer_ndc(), Vec2::ZERO);
}
