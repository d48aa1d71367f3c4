//! Error Types
//!
//! This module defines the error types returned by the animation build.
//!
//! # Overview
//!
//! The main error type [`ReplayAnimError`] covers the structural failures a
//! build can hit:
//! - An actor track whose length differs from the shared frame deltas
//! - A roster whose names and tracks disagree in count
//! - A set of scene roots that does not match the roster
//! - A frame row without a delta column
//!
//! All of them are detected before any keyframe data is produced, so a failed
//! build never yields a partial [`AnimationManager`](crate::AnimationManager).
//!
//! # Usage
//!
//! ```rust,ignore
//! use replay_animation::errors::{ReplayAnimError, Result};
//!
//! fn rebuild() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::animation::binding::ActorId;

/// The main error type for the telemetry-to-animation pipeline.
///
/// Every variant describes an upstream data problem (decoding or pairing).
/// Retrying with the same input always produces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayAnimError {
    // ========================================================================
    // Track Errors
    // ========================================================================
    /// An actor's telemetry track is not paired one-to-one with the frame deltas.
    #[error("Track length mismatch for {actor}: {track_len} samples, {delta_len} frame deltas")]
    LengthMismatch {
        /// The actor whose track is inconsistent
        actor: ActorId,
        /// Number of telemetry samples in the track
        track_len: usize,
        /// Number of shared frame deltas
        delta_len: usize,
    },

    /// A decoded frame row has no delta column.
    #[error("Frame {frame} has no delta column")]
    EmptyFrameRow {
        /// Index of the offending row
        frame: usize,
    },

    // ========================================================================
    // Roster Errors
    // ========================================================================
    /// The roster names and the player tracks disagree in count.
    #[error("Invalid actor roster: {names} player names but {tracks} player tracks")]
    InvalidActorRoster {
        /// Number of player names supplied
        names: usize,
        /// Number of player tracks supplied
        tracks: usize,
    },

    /// The number of player scene roots does not match the roster size.
    #[error("Scene root mismatch: roster has {expected} players, {supplied} player roots supplied")]
    SceneRootMismatch {
        /// Roster size
        expected: usize,
        /// Number of player roots supplied
        supplied: usize,
    },
}

/// Alias for `Result<T, ReplayAnimError>`.
pub type Result<T> = std::result::Result<T, ReplayAnimError>;
