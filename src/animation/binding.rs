use std::fmt;

use rustc_hash::FxHashMap;
use slotmap::new_key_type;

new_key_type! {
    /// Opaque reference to a live scene node, owned by the host scene.
    pub struct NodeHandle;
}

/// Identity of an animated actor within one build.
///
/// Players are identified by their roster slot, so two players sharing a
/// display name remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActorId {
    Player(usize),
    Ball,
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorId::Player(slot) => write!(f, "player[{slot}]"),
            ActorId::Ball => f.write_str("ball"),
        }
    }
}

/// Which node of an actor's scene subtree a channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorPart {
    /// The actor's root node (a player's group, or the ball itself).
    Root,
    /// The visible body under a player's root (the car model).
    Body,
}

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
}

/// Fully qualified channel destination: actor, node within the actor, property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelTarget {
    pub actor: ActorId,
    pub part: ActorPart,
    pub property: TargetPath,
}

impl ChannelTarget {
    #[must_use]
    pub const fn new(actor: ActorId, part: ActorPart, property: TargetPath) -> Self {
        Self {
            actor,
            part,
            property,
        }
    }
}

impl fmt::Display for ChannelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = match self.part {
            ActorPart::Root => "root",
            ActorPart::Body => "body",
        };
        let property = match self.property {
            TargetPath::Translation => "position",
            TargetPath::Rotation => "quaternion",
        };
        write!(f, "{}/{part}.{property}", self.actor)
    }
}

/// Actor-keyed lookup from clip targets to scene roots.
///
/// Resolving [`ActorPart::Body`] below a root is left to the scene layer.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    roots: FxHashMap<ActorId, NodeHandle>,
}

impl BindingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: ActorId, root: NodeHandle) -> Option<NodeHandle> {
        self.roots.insert(actor, root)
    }

    #[must_use]
    pub fn root(&self, actor: ActorId) -> Option<NodeHandle> {
        self.roots.get(&actor).copied()
    }

    /// Scene root for the actor a channel belongs to.
    #[must_use]
    pub fn resolve(&self, target: &ChannelTarget) -> Option<NodeHandle> {
        self.root(target.actor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
