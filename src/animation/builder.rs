//! Build Orchestration
//!
//! [`AnimationBuilder`] turns a decoded [`ReplayData`] plus the host scene's
//! actor roots into an [`AnimationManager`].
//!
//! # Pipeline
//!
//! ```text
//! TelemetrySample ──coords──▶ KeyframeSequence ──assemble──▶ AnimationClip
//!                                                              │
//! ActorRoots ─────────────────bind───────────────────▶ PlaybackBinding
//! ```
//!
//! The build is all-or-nothing: the roster, the scene roots and every track
//! length are validated before the first sequence is built, so an error never
//! leaves half-built output behind.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use replay_animation::{AnimationBuilder, ActorRoots, BuildOptions};
//!
//! let manager = AnimationBuilder::new(BuildOptions::default())
//!     .build(&replay, &roots)?;
//!
//! for clip in manager.clips() {
//!     println!("{} lasts {}s", clip.name, clip.duration);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::binding::{ActorId, BindingTable, NodeHandle};
use crate::animation::clip::AnimationClip;
use crate::animation::keyframes::{KeyframeSequence, check_pairing};
use crate::animation::manager::AnimationManager;
use crate::animation::mixer;
use crate::errors::{ReplayAnimError, Result};
use crate::telemetry::{FrameDeltas, ReplayData};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Host-facing build configuration.
///
/// Deserializes with defaults for missing fields:
///
/// ```rust,ignore
/// let options: BuildOptions = serde_json::from_str("{}")?;
/// assert!(options.use_ball_rotation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Whether the ball's clip carries a rotation channel.
    pub use_ball_rotation: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            use_ball_rotation: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene roots
// ---------------------------------------------------------------------------

/// Scene nodes the playback bindings attach to: one per player, in roster
/// order, and one for the ball.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorRoots {
    pub players: Vec<NodeHandle>,
    pub ball: NodeHandle,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

type Observer<'a> = Box<dyn FnMut(ActorId, &KeyframeSequence) + 'a>;

/// Builds every actor's clip and playback binding from a decoded replay.
pub struct AnimationBuilder<'a> {
    options: BuildOptions,
    observer: Option<Observer<'a>>,
}

impl<'a> AnimationBuilder<'a> {
    #[must_use]
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            observer: None,
        }
    }

    /// Installs a hook invoked with each computed sequence, players in roster
    /// order first, then the ball. Output is unaffected.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(ActorId, &KeyframeSequence) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// - [`ReplayAnimError::EmptyFrameRow`] if a frame row has no delta column
    /// - [`ReplayAnimError::InvalidActorRoster`] if names and player tracks differ in count
    /// - [`ReplayAnimError::SceneRootMismatch`] if player roots differ from the roster size
    /// - [`ReplayAnimError::LengthMismatch`] if any track differs in length from the frames
    pub fn build(&mut self, replay: &ReplayData, roots: &ActorRoots) -> Result<AnimationManager> {
        let deltas = replay.deltas()?;
        self.build_with_deltas(replay, &deltas, roots)
    }

    /// Runs the full pipeline against explicit frame deltas, ignoring
    /// `replay.frames`.
    pub fn build_with_deltas(
        &mut self,
        replay: &ReplayData,
        deltas: &FrameDeltas,
        roots: &ActorRoots,
    ) -> Result<AnimationManager> {
        validate(replay, roots, deltas)?;

        log::debug!(
            "Building replay animation: {} players, {} frames, {:.3}s",
            replay.roster_size(),
            deltas.len(),
            deltas.total()
        );

        let mut player_clips = Vec::with_capacity(replay.players.len());
        for (slot, (name, track)) in replay.names.iter().zip(&replay.players).enumerate() {
            let actor = ActorId::Player(slot);
            let keyframes = KeyframeSequence::build(actor, track, deltas)?;
            self.observe(actor, &keyframes);
            player_clips.push(AnimationClip::assemble(actor, name, &keyframes, true));
        }

        let keyframes = KeyframeSequence::build(ActorId::Ball, &replay.ball, deltas)?;
        self.observe(ActorId::Ball, &keyframes);
        let ball_clip = AnimationClip::assemble(
            ActorId::Ball,
            "ball",
            &keyframes,
            self.options.use_ball_rotation,
        );

        let player_bindings = mixer::bind_players(&roots.players);
        let ball_binding = mixer::bind_ball(roots.ball);

        let mut bindings = BindingTable::new();
        for binding in player_bindings.iter().chain(std::iter::once(&ball_binding)) {
            bindings.insert(binding.actor, binding.root);
        }

        Ok(AnimationManager {
            player_clips,
            ball_clip,
            player_bindings,
            ball_binding,
            bindings,
        })
    }

    fn observe(&mut self, actor: ActorId, keyframes: &KeyframeSequence) {
        log::trace!(
            "{actor}: {} keyframes, duration {:.3}s",
            keyframes.len(),
            keyframes.duration
        );
        if let Some(observer) = self.observer.as_mut() {
            observer(actor, keyframes);
        }
    }
}

impl Default for AnimationBuilder<'_> {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}

/// Checks every structural precondition up front.
fn validate(replay: &ReplayData, roots: &ActorRoots, deltas: &FrameDeltas) -> Result<()> {
    if replay.names.len() != replay.players.len() {
        return Err(ReplayAnimError::InvalidActorRoster {
            names: replay.names.len(),
            tracks: replay.players.len(),
        });
    }
    if roots.players.len() != replay.roster_size() {
        return Err(ReplayAnimError::SceneRootMismatch {
            expected: replay.roster_size(),
            supplied: roots.players.len(),
        });
    }
    for (slot, track) in replay.players.iter().enumerate() {
        check_pairing(ActorId::Player(slot), track, deltas)?;
    }
    check_pairing(ActorId::Ball, &replay.ball, deltas)
}

/// Builds with the given options and no observer.
pub fn build_animations(
    replay: &ReplayData,
    roots: &ActorRoots,
    options: BuildOptions,
) -> Result<AnimationManager> {
    AnimationBuilder::new(options).build(replay, roots)
}
