//! Decoded Replay Telemetry
//!
//! Input types consumed by the animation build. Replay file parsing happens
//! elsewhere; these types describe the already-decoded layout:
//!
//! - [`TelemetrySample`]: one frame of `[p0, p1, p2, r0, r1, r2]`
//! - [`ActorTrack`]: all samples recorded for one actor
//! - [`FrameDeltas`]: per-frame elapsed seconds shared by every actor
//! - [`ReplayData`]: the roster, per-player tracks, the ball track and frames
//!
//! Everything derives serde so a JSON-decoded replay can be fed in directly.

use serde::{Deserialize, Serialize};

use crate::errors::{ReplayAnimError, Result};

/// One recorded frame for one actor, in the source coordinate convention.
///
/// Layout is `[p0, p1, p2, r0, r1, r2]`: three position components followed by
/// three Euler angles (radians, nominally in `[-PI, PI]`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelemetrySample(pub [f32; 6]);

impl TelemetrySample {
    #[must_use]
    pub const fn new(position: [f32; 3], rotation: [f32; 3]) -> Self {
        Self([
            position[0],
            position[1],
            position[2],
            rotation[0],
            rotation[1],
            rotation[2],
        ])
    }

    /// Source-space position `[p0, p1, p2]`.
    #[inline]
    #[must_use]
    pub fn position(&self) -> [f32; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Source-space Euler angles `[r0, r1, r2]`.
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> [f32; 3] {
        [self.0[3], self.0[4], self.0[5]]
    }
}

impl From<[f32; 6]> for TelemetrySample {
    fn from(values: [f32; 6]) -> Self {
        Self(values)
    }
}

/// Ordered telemetry samples for one actor (player or ball).
pub type ActorTrack = Vec<TelemetrySample>;

/// Per-frame elapsed time in seconds.
///
/// Callers must supply non-negative deltas. Negative values are accepted
/// structurally but produce non-monotonic keyframe times.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameDeltas(pub Vec<f32>);

impl FrameDeltas {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Sum of every delta, i.e. the duration of a clip built from them.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.0.iter().map(|&d| f64::from(d)).sum::<f64>() as f32
    }
}

impl From<Vec<f32>> for FrameDeltas {
    fn from(deltas: Vec<f32>) -> Self {
        Self(deltas)
    }
}

/// A decoded replay: player roster, their tracks, the ball track and the
/// shared per-frame rows.
///
/// `players[i]` belongs to `names[i]`. Each row in `frames` holds the frame
/// delta in its first column; further columns (clock values etc.) are ignored.
/// A row without a first column is a decoding error, see [`ReplayData::deltas`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplayData {
    pub names: Vec<String>,
    pub players: Vec<ActorTrack>,
    pub ball: ActorTrack,
    pub frames: Vec<Vec<f32>>,
}

impl ReplayData {
    /// Extracts the delta column from the frame rows.
    ///
    /// Fails with [`ReplayAnimError::EmptyFrameRow`] on the first row that has
    /// no delta column.
    pub fn deltas(&self) -> Result<FrameDeltas> {
        self.frames
            .iter()
            .enumerate()
            .map(|(frame, row)| {
                row.first()
                    .copied()
                    .ok_or(ReplayAnimError::EmptyFrameRow { frame })
            })
            .collect::<Result<Vec<_>>>()
            .map(FrameDeltas)
    }

    /// Number of player actors in the roster.
    #[inline]
    #[must_use]
    pub fn roster_size(&self) -> usize {
        self.names.len()
    }
}
