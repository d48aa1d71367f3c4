//! Clip assembly.
//!
//! One [`AnimationClip`] per actor, bundling its typed channels with the total
//! duration from the keyframe sequence. Channel targets are explicit
//! [`ChannelTarget`] values rather than formatted node-name strings.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::animation::binding::{ActorId, ActorPart, ChannelTarget, TargetPath};
use crate::animation::keyframes::KeyframeSequence;
use crate::animation::tracks::KeyframeTrack;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    #[must_use]
    pub fn times(&self) -> &[f32] {
        match self {
            TrackData::Vector3(track) => &track.times,
            TrackData::Quaternion(track) => &track.times,
        }
    }
}

/// A single animated property: where it goes and its keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub target: ChannelTarget,
    pub data: TrackData,
}

/// Stable clip identity for one actor.
///
/// Players combine the display name with their roster slot so duplicate names
/// never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipName(String);

impl ClipName {
    #[must_use]
    pub fn for_actor(actor: ActorId, display_name: &str) -> Self {
        match actor {
            ActorId::Player(slot) => Self(format!("{display_name}#{slot}-action")),
            ActorId::Ball => Self("ball-action".to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClipName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: ClipName,
    pub actor: ActorId,
    pub duration: f32,
    pub channels: SmallVec<[Channel; 2]>,
}

impl AnimationClip {
    /// Packages an actor's keyframes into a clip.
    ///
    /// The position channel is always present. The rotation channel is added
    /// only when `include_rotation` is set. A player's position drives its
    /// root group and its rotation drives the body; the ball's channels both
    /// drive its root.
    #[must_use]
    pub fn assemble(
        actor: ActorId,
        display_name: &str,
        keyframes: &KeyframeSequence,
        include_rotation: bool,
    ) -> Self {
        let rotation_part = match actor {
            ActorId::Player(_) => ActorPart::Body,
            ActorId::Ball => ActorPart::Root,
        };

        let mut channels = SmallVec::new();
        channels.push(Channel {
            target: ChannelTarget::new(actor, ActorPart::Root, TargetPath::Translation),
            data: TrackData::Vector3(keyframes.position_track()),
        });
        if include_rotation {
            channels.push(Channel {
                target: ChannelTarget::new(actor, rotation_part, TargetPath::Rotation),
                data: TrackData::Quaternion(keyframes.rotation_track()),
            });
        }

        Self {
            name: ClipName::for_actor(actor, display_name),
            actor,
            duration: keyframes.duration,
            channels,
        }
    }

    #[must_use]
    pub fn channel(&self, property: TargetPath) -> Option<&Channel> {
        self.channels.iter().find(|c| c.target.property == property)
    }

    /// Position at `time`, or `None` if the clip has no keyframes.
    #[must_use]
    pub fn sample_position(&self, time: f32) -> Option<Vec3> {
        match &self.channel(TargetPath::Translation)?.data {
            TrackData::Vector3(track) => track.sample(time),
            TrackData::Quaternion(_) => None,
        }
    }

    /// Orientation at `time`, or `None` without a rotation channel or keyframes.
    #[must_use]
    pub fn sample_rotation(&self, time: f32) -> Option<Quat> {
        match &self.channel(TargetPath::Rotation)?.data {
            TrackData::Quaternion(track) => track.sample(time),
            TrackData::Vector3(_) => None,
        }
    }
}
