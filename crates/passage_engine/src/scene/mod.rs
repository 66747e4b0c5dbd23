//! Scene host capability interface
//!
//! The host application owns the scene graph: node lifetime, transforms, and
//! the active/inactive flag all belong to it. This module defines the narrow
//! trait the toggler consumes, plus an in-memory implementation used by tests
//! and headless hosts.
//!
//! Following the pluggable-trait-at-the-seam pattern: the toggling logic is
//! written against [`SceneHost`] so it can run against a live engine adapter
//! or against [`MemoryScene`] without changes.

mod memory;

pub use memory::{CollisionShape, ForceVolume, MemoryScene};

use crate::foundation::math::Vec3;
use thiserror::Error;

slotmap::new_key_type! {
    /// Stable handle to a node in a scene host
    ///
    /// Handles are opaque and only meaningful to the host that issued them.
    /// They are not guaranteed to survive a scene reload.
    pub struct NodeHandle;
}

/// Errors reported by a scene host
///
/// The only recoverable failure in this subsystem is an object that cannot be
/// resolved; callers are expected to log and continue, never to abort a batch
/// operation.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A path did not resolve to a live node
    #[error("object not found: '{0}'")]
    NotFound(String),

    /// A handle referred to a node that no longer exists
    #[error("stale node handle")]
    StaleHandle,
}

/// Capability interface over the host's scene graph
///
/// Exposes exactly what the toggler needs: enumeration of every node
/// (including inactive ones), identity and placement reads, active-state
/// writes, path resolution, and the clone operations used by the synthetic
/// element manager. Implementors must never hand out ownership of node
/// lifetime through this interface.
pub trait SceneHost {
    /// Enumerate every node the host manages, including inactive ones
    ///
    /// Broad spatial scans must see disabled objects, otherwise a closed door
    /// could never be re-opened.
    fn all_nodes(&self) -> Vec<NodeHandle>;

    /// Bare name of a node (no path, no parent context)
    fn name(&self, node: NodeHandle) -> Option<&str>;

    /// World-space position of a node
    fn world_position(&self, node: NodeHandle) -> Option<Vec3>;

    /// Parent of a node, `None` for roots and stale handles
    fn parent(&self, node: NodeHandle) -> Option<NodeHandle>;

    /// Whether a node is currently active
    fn is_active(&self, node: NodeHandle) -> Option<bool>;

    /// Set a node's active state; idempotent
    fn set_active(&mut self, node: NodeHandle, active: bool) -> Result<(), SceneError>;

    /// Resolve a full slash-separated hierarchical path to a node
    fn resolve_path(&self, path: &str) -> Option<NodeHandle>;

    /// Clone a node under the same parent with a new name
    ///
    /// The clone copies the template's world position, rotation, local
    /// transform, and any force-volume attached-body back-reference. By host
    /// convention the clone's collision shape starts disabled and must be
    /// re-enabled explicitly via [`SceneHost::set_shape_enabled`].
    fn clone_node(&mut self, template: NodeHandle, clone_name: &str)
        -> Result<NodeHandle, SceneError>;

    /// Offset a node's local position, updating world placement
    fn translate_local(&mut self, node: NodeHandle, offset: Vec3) -> Result<(), SceneError>;

    /// Replace a node's local scale
    fn set_local_scale(&mut self, node: NodeHandle, scale: Vec3) -> Result<(), SceneError>;

    /// Enable or disable a node's collision-shape component, if it has one
    fn set_shape_enabled(&mut self, node: NodeHandle, enabled: bool) -> Result<(), SceneError>;

    /// Total number of live nodes
    fn node_count(&self) -> usize;
}
