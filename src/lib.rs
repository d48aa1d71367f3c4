//! Replay Animation
//!
//! Converts recorded match telemetry (per-frame position and rotation samples
//! for every player and the ball) into keyframe animation clips and idle
//! playback bindings for a Y-up 3D playback engine.
//!
//! - [`telemetry`]: decoded replay input
//! - [`animation`]: coordinate conversion, keyframe building, clip assembly
//!   and playback bindings
//! - [`errors`]: the build's error type
//!
//! Rendering, scene resolution and advancing playback time belong to the host.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod animation;
pub mod errors;
pub mod telemetry;

pub use animation::{
    ActorId, ActorRoots, AnimationBuilder, AnimationClip, AnimationManager, BuildOptions,
    KeyframeSequence, NodeHandle, PlaybackBinding, build_animations,
};
pub use errors::{ReplayAnimError, Result};
pub use telemetry::{ActorTrack, FrameDeltas, ReplayData, TelemetrySample};
