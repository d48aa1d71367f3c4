use crate::animation::binding::{ActorId, BindingTable};
use crate::animation::clip::AnimationClip;
use crate::animation::mixer::PlaybackBinding;

/// Output of one build: every actor's clip and idle playback binding.
///
/// Player entries follow roster order, so `player_clips[i]` and
/// `player_bindings[i]` both belong to `ActorId::Player(i)`.
#[derive(Debug, Clone)]
pub struct AnimationManager {
    pub player_clips: Vec<AnimationClip>,
    pub ball_clip: AnimationClip,
    pub player_bindings: Vec<PlaybackBinding>,
    pub ball_binding: PlaybackBinding,
    pub bindings: BindingTable,
}

impl AnimationManager {
    #[must_use]
    pub fn clip(&self, actor: ActorId) -> Option<&AnimationClip> {
        match actor {
            ActorId::Player(slot) => self.player_clips.get(slot),
            ActorId::Ball => Some(&self.ball_clip),
        }
    }

    #[must_use]
    pub fn binding(&self, actor: ActorId) -> Option<&PlaybackBinding> {
        match actor {
            ActorId::Player(slot) => self.player_bindings.get(slot),
            ActorId::Ball => Some(&self.ball_binding),
        }
    }

    /// All clips, players first in roster order, then the ball.
    pub fn clips(&self) -> impl Iterator<Item = &AnimationClip> {
        self.player_clips.iter().chain(std::iter::once(&self.ball_clip))
    }

    #[inline]
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_clips.len()
    }

    /// Longest clip duration across all actors.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clips().map(|c| c.duration).fold(0.0_f32, f32::max)
    }
}
