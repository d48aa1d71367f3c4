//! Cumulative-time keyframe construction.
//!
//! [`KeyframeSequence::build`] walks one actor's telemetry together with the
//! shared frame deltas and produces flattened keyframe buffers ready for
//! clip assembly.
//!
//! # Timing
//!
//! Each keyframe is stamped with the *start* of its frame:
//!
//! ```text
//! times[i]  = deltas[0] + ... + deltas[i - 1]      (times[0] = 0)
//! duration  = deltas[0] + ... + deltas[n - 1]
//! ```
//!
//! so the final frame's own delta is covered by `duration` but not by any
//! timestamp. Deltas are summed in order into an `f64` accumulator and each
//! timestamp is narrowed to `f32` on output, so hour-long replays stay on the
//! frame grid and rebuilds remain bit-identical.

use glam::{Quat, Vec3};

use crate::animation::binding::ActorId;
use crate::animation::coords;
use crate::animation::tracks::KeyframeTrack;
use crate::errors::{ReplayAnimError, Result};
use crate::telemetry::{FrameDeltas, TelemetrySample};

/// Keyframe buffers for one actor, produced once per build.
///
/// `position_values` holds `x, y, z` triplets and `rotation_values` holds
/// `x, y, z, w` quaternions, one per timestamp.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyframeSequence {
    pub duration: f32,
    pub position_times: Vec<f32>,
    pub position_values: Vec<f32>,
    pub rotation_times: Vec<f32>,
    pub rotation_values: Vec<f32>,
}

impl KeyframeSequence {
    /// Builds the keyframe sequence for one actor.
    ///
    /// Fails with [`ReplayAnimError::LengthMismatch`] when the track and the
    /// deltas are not paired one-to-one; nothing is truncated. An empty track
    /// with empty deltas yields an empty sequence of zero duration.
    pub fn build(actor: ActorId, track: &[TelemetrySample], deltas: &FrameDeltas) -> Result<Self> {
        check_pairing(actor, track, deltas)?;

        let n = track.len();
        let mut total_duration = 0.0_f64;
        let mut position_times = Vec::with_capacity(n);
        let mut position_values = Vec::with_capacity(n * 3);
        let mut rotation_values = Vec::with_capacity(n * 4);

        for (sample, &delta) in track.iter().zip(deltas.as_slice()) {
            position_times.push(total_duration as f32);

            let (position, rotation) = coords::transform(sample);
            position_values.extend_from_slice(&position.to_array());
            rotation_values.extend_from_slice(&rotation.to_array());

            total_duration += f64::from(delta);
        }

        let rotation_times = position_times.clone();

        Ok(Self {
            duration: total_duration as f32,
            position_times,
            position_values,
            rotation_times,
            rotation_values,
        })
    }

    /// Number of keyframes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.position_times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position_times.is_empty()
    }

    /// Position at keyframe `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Vec3> {
        let start = index.checked_mul(3)?;
        self.position_values
            .get(start..start.checked_add(3)?)
            .map(Vec3::from_slice)
    }

    /// Orientation at keyframe `index`.
    #[must_use]
    pub fn rotation(&self, index: usize) -> Option<Quat> {
        let start = index.checked_mul(4)?;
        self.rotation_values
            .get(start..start.checked_add(4)?)
            .map(Quat::from_slice)
    }

    /// Typed position channel.
    #[must_use]
    pub fn position_track(&self) -> KeyframeTrack<Vec3> {
        KeyframeTrack::from_flat(self.position_times.clone(), &self.position_values)
    }

    /// Typed rotation channel.
    #[must_use]
    pub fn rotation_track(&self) -> KeyframeTrack<Quat> {
        KeyframeTrack::from_flat(self.rotation_times.clone(), &self.rotation_values)
    }
}

/// Verifies that `track` and `deltas` pair one-to-one.
pub(crate) fn check_pairing(
    actor: ActorId,
    track: &[TelemetrySample],
    deltas: &FrameDeltas,
) -> Result<()> {
    if track.len() == deltas.len() {
        Ok(())
    } else {
        Err(ReplayAnimError::LengthMismatch {
            actor,
            track_len: track.len(),
            delta_len: deltas.len(),
        })
    }
}
