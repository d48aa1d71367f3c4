//! Coordinate Transform Tests
//!
//! Tests for:
//! - Position axis swap (source Z-up to target Y-up)
//! - Euler composition order of the source rotation
//! - Reflection of the rotation into the target frame
//! - Consistency between the position and rotation mappings

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use glam::{Quat, Vec3};

use replay_animation::TelemetrySample;
use replay_animation::animation::coords::{
    source_rotation, to_target_position, to_target_rotation, transform,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    // q and -q encode the same rotation
    let d = a.dot(b).abs();
    (d - 1.0).abs() < EPSILON
}

// ============================================================================
// Position
// ============================================================================

#[test]
fn position_swaps_second_and_third_components() {
    assert_eq!(to_target_position([1.0, 2.0, 3.0]), Vec3::new(1.0, 3.0, 2.0));
}

#[test]
fn position_keeps_sign_and_magnitude() {
    let p = to_target_position([-4096.0, 5120.0, 17.5]);
    assert_eq!(p, Vec3::new(-4096.0, 17.5, 5120.0));
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn zero_angles_give_identity() {
    let q = to_target_rotation([0.0, 0.0, 0.0]);
    assert_eq!(q.to_array(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn source_rotation_applies_x_then_y_then_z() {
    let (a, b, c) = (0.3, -1.1, 2.4);
    let expected = Quat::from_rotation_x(a) * Quat::from_rotation_y(b) * Quat::from_rotation_z(c);
    assert!(quat_approx(source_rotation([a, b, c]), expected));
}

#[test]
fn source_up_axis_yaw_becomes_negative_target_y_rotation() {
    // Source z is target y; the reflection flips the handedness of the angle.
    let q = to_target_rotation([0.0, 0.0, FRAC_PI_3]);
    assert!(quat_approx(q, Quat::from_rotation_y(-FRAC_PI_3)));
}

#[test]
fn source_x_roll_stays_on_target_x_with_flipped_sign() {
    let q = to_target_rotation([FRAC_PI_4, 0.0, 0.0]);
    assert!(quat_approx(q, Quat::from_rotation_x(-FRAC_PI_4)));
}

#[test]
fn source_y_pitch_becomes_target_z_rotation() {
    let q = to_target_rotation([0.0, FRAC_PI_2, 0.0]);
    assert!(quat_approx(q, Quat::from_rotation_z(-FRAC_PI_2)));
}

#[test]
fn rotation_is_unit_length() {
    for angles in [[PI, -PI, PI], [0.1, 0.2, 0.3], [-2.9, 1.7, -0.4], [7.0, -9.0, 12.5]] {
        let q = to_target_rotation(angles);
        assert!(approx(q.length(), 1.0), "{angles:?} -> |q| = {}", q.length());
    }
}

#[test]
fn rotation_agrees_with_position_mapping() {
    let angles = [0.7, -0.35, 2.2];
    let source = source_rotation(angles);
    let target = to_target_rotation(angles);

    for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, -2.0, 0.5)] {
        let rotated_then_mapped = to_target_position((source * v).to_array());
        let mapped_then_rotated = target * to_target_position(v.to_array());
        assert!(
            vec3_approx(rotated_then_mapped, mapped_then_rotated),
            "v={v}: {rotated_then_mapped} vs {mapped_then_rotated}"
        );
    }
}

// ============================================================================
// Full sample
// ============================================================================

#[test]
fn transform_sample_splits_position_and_rotation() {
    let sample = TelemetrySample::from([1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
    let (position, rotation) = transform(&sample);
    assert_eq!(position, Vec3::new(1.0, 3.0, 2.0));
    assert_eq!(rotation, Quat::IDENTITY);
}

#[test]
fn transform_is_deterministic() {
    let sample = TelemetrySample::new([12.0, -340.5, 93.25], [0.12, -2.9, 1.4]);
    let (p0, q0) = transform(&sample);
    let (p1, q1) = transform(&sample);
    assert_eq!(p0.to_array().map(f32::to_bits), p1.to_array().map(f32::to_bits));
    assert_eq!(q0.to_array().map(f32::to_bits), q1.to_array().map(f32::to_bits));
}
