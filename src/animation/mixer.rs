use crate::animation::binding::{ActorId, NodeHandle};

/// Playback state carried by a binding. Advanced only by an external clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub time: f32,
    pub time_scale: f32,
    pub started: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            time: 0.0,
            time_scale: 1.0,
            started: false,
        }
    }
}

impl PlaybackState {
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.started
    }
}

/// Pairs an actor's scene root with its (initially idle) playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackBinding {
    pub actor: ActorId,
    pub root: NodeHandle,
    pub state: PlaybackState,
}

impl PlaybackBinding {
    #[must_use]
    pub fn new(actor: ActorId, root: NodeHandle) -> Self {
        Self {
            actor,
            root,
            state: PlaybackState::default(),
        }
    }
}

/// Creates one idle binding per player root, in roster order.
#[must_use]
pub fn bind_players(roots: &[NodeHandle]) -> Vec<PlaybackBinding> {
    roots
        .iter()
        .enumerate()
        .map(|(slot, &root)| PlaybackBinding::new(ActorId::Player(slot), root))
        .collect()
}

/// Creates the ball's idle binding.
#[must_use]
pub fn bind_ball(root: NodeHandle) -> PlaybackBinding {
    PlaybackBinding::new(ActorId::Ball, root)
}
