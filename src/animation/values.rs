use glam::{Quat, Vec3};

/// A keyframe value that can be blended between two neighbouring keyframes.
pub trait Interpolatable: Copy + Sized {
    /// Number of scalars one value occupies in a flattened keyframe buffer.
    const COMPONENTS: usize;

    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    /// Rebuilds a value from exactly `COMPONENTS` scalars.
    fn from_components(components: &[f32]) -> Self;
}

impl Interpolatable for Vec3 {
    const COMPONENTS: usize = 3;

    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn from_components(components: &[f32]) -> Self {
        Vec3::from_slice(components)
    }
}

impl Interpolatable for Quat {
    const COMPONENTS: usize = 4;

    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }

    // x, y, z, w order
    fn from_components(components: &[f32]) -> Self {
        Quat::from_slice(components)
    }
}
