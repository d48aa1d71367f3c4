pub mod values;
pub mod tracks;
pub mod coords;
pub mod keyframes;
pub mod binding;
pub mod clip;
pub mod mixer;
pub mod manager;
pub mod builder;

pub use clip::{AnimationClip, Channel, ClipName, TrackData};
pub use tracks::KeyframeTrack;
pub use keyframes::KeyframeSequence;
pub use binding::{ActorId, ActorPart, BindingTable, ChannelTarget, NodeHandle, TargetPath};
pub use mixer::{PlaybackBinding, PlaybackState};
pub use manager::AnimationManager;
pub use builder::{ActorRoots, AnimationBuilder, BuildOptions, build_animations};
