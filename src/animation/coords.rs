//! Source-to-target coordinate conversion.
//!
//! Telemetry is recorded in a Z-up frame; the playback engine is Y-up. The
//! conversion is a single reflection `P` that swaps the second and third axes
//! and is applied uniformly to players and the ball.
//!
//! # Position
//!
//! | target | source |
//! |--------|--------|
//! | `x`    | `p0`   |
//! | `y`    | `p2`   |
//! | `z`    | `p1`   |
//!
//! # Orientation
//!
//! 1. The three angles build a source-frame rotation, applied about source
//!    `x` by `r0`, then `y` by `r1`, then `z` by `r2`, composed as
//!    `R = Rx(r0) * Ry(r1) * Rz(r2)`. No angle is negated.
//! 2. `R` is carried into the target frame as `P * R * P`. Because `P` is a
//!    reflection, the rotation axis is swapped like a position and the angle
//!    changes sign, so for the source quaternion `(x, y, z, w)` the target
//!    quaternion is `(-x, -z, -y, w)`.
//!
//! The result satisfies `to_target_position(R * v) == rotation * to_target_position(v)`
//! for every source vector `v`.

use glam::{Quat, Vec3};

use crate::telemetry::TelemetrySample;

/// Maps a source position `[p0, p1, p2]` to the target frame.
#[inline]
#[must_use]
pub fn to_target_position(p: [f32; 3]) -> Vec3 {
    Vec3::new(p[0], p[2], p[1])
}

/// Source-frame rotation from the raw Euler angles `[r0, r1, r2]`.
#[inline]
#[must_use]
pub fn source_rotation(r: [f32; 3]) -> Quat {
    Quat::from_rotation_x(r[0]) * Quat::from_rotation_y(r[1]) * Quat::from_rotation_z(r[2])
}

/// Maps the raw Euler angles `[r0, r1, r2]` to a unit quaternion in the target frame.
#[inline]
#[must_use]
pub fn to_target_rotation(r: [f32; 3]) -> Quat {
    let q = source_rotation(r);
    Quat::from_xyzw(-q.x, -q.z, -q.y, q.w)
}

/// Converts one telemetry sample into a target-frame position and orientation.
///
/// Total over finite input; angles outside `[-PI, PI]` simply wrap.
#[inline]
#[must_use]
pub fn transform(sample: &TelemetrySample) -> (Vec3, Quat) {
    (
        to_target_position(sample.position()),
        to_target_rotation(sample.rotation()),
    )
}
