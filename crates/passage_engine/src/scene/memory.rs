//! In-memory scene host
//!
//! A `SlotMap`-backed hierarchy implementing [`SceneHost`]. Serves as the
//! reference semantics for host adapters and as the scene double for tests
//! and headless demo hosts.

use super::{NodeHandle, SceneError, SceneHost};
use crate::foundation::math::{Quat, Vec3};
use slotmap::SlotMap;

/// Directional force component carrying a back-reference to the body it
/// accelerates toward
#[derive(Debug, Clone)]
pub struct ForceVolume {
    /// Name of the rigid body this volume is attached to
    pub attached_body: Option<String>,
}

/// Collision-shape component with an enable flag
#[derive(Debug, Clone)]
pub struct CollisionShape {
    /// Whether the shape currently participates in collision
    pub enabled: bool,
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeHandle>,
    children: Vec<NodeHandle>,
    local_position: Vec3,
    world_position: Vec3,
    rotation: Quat,
    local_scale: Vec3,
    active: bool,
    force_volume: Option<ForceVolume>,
    collision_shape: Option<CollisionShape>,
}

/// In-memory scene graph
///
/// Nodes are addressed by stable [`NodeHandle`]s. World positions are kept in
/// sync with local positions whenever a node moves: a root's world position
/// equals its local position, a child's is the parent's world position plus
/// the child's local position.
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: SlotMap<NodeHandle, Node>,
    roots: Vec<NodeHandle>,
}

impl MemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, parented under `parent` when given
    ///
    /// Roots interpret `local_position` as their world position.
    pub fn add_node(
        &mut self,
        parent: Option<NodeHandle>,
        name: impl Into<String>,
        local_position: Vec3,
    ) -> NodeHandle {
        let world_position = match parent.and_then(|p| self.nodes.get(p)) {
            Some(parent_node) => parent_node.world_position + local_position,
            None => local_position,
        };

        let handle = self.nodes.insert(Node {
            name: name.into(),
            parent,
            children: Vec::new(),
            local_position,
            world_position,
            rotation: Quat::identity(),
            local_scale: Vec3::new(1.0, 1.0, 1.0),
            active: true,
            force_volume: None,
            collision_shape: None,
        });

        match parent {
            Some(p) if self.nodes.contains_key(p) => self.nodes[p].children.push(handle),
            _ => self.roots.push(handle),
        }

        handle
    }

    /// Attach a force-volume component to a node
    pub fn attach_force_volume(&mut self, node: NodeHandle, attached_body: Option<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.force_volume = Some(ForceVolume { attached_body });
        }
    }

    /// Attach a collision-shape component to a node
    pub fn attach_collision_shape(&mut self, node: NodeHandle, enabled: bool) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.collision_shape = Some(CollisionShape { enabled });
        }
    }

    /// Inspect a node's force-volume component
    pub fn force_volume(&self, node: NodeHandle) -> Option<&ForceVolume> {
        self.nodes.get(node)?.force_volume.as_ref()
    }

    /// Inspect a node's collision-shape component
    pub fn collision_shape(&self, node: NodeHandle) -> Option<&CollisionShape> {
        self.nodes.get(node)?.collision_shape.as_ref()
    }

    /// A node's current local scale
    pub fn local_scale(&self, node: NodeHandle) -> Option<Vec3> {
        Some(self.nodes.get(node)?.local_scale)
    }

    /// A node's current local position
    pub fn local_position(&self, node: NodeHandle) -> Option<Vec3> {
        Some(self.nodes.get(node)?.local_position)
    }

    /// Full slash-separated path from the root to a node
    pub fn path_of(&self, node: NodeHandle) -> Option<String> {
        let mut segments = Vec::new();
        let mut current = Some(node);
        while let Some(handle) = current {
            let n = self.nodes.get(handle)?;
            segments.push(n.name.clone());
            current = n.parent;
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    fn refresh_world_positions(&mut self, node: NodeHandle) {
        let Some(n) = self.nodes.get(node) else { return };
        let parent_world = n
            .parent
            .and_then(|p| self.nodes.get(p))
            .map_or(Vec3::zeros(), |p| p.world_position);
        let local = n.local_position;
        let children = n.children.clone();

        self.nodes[node].world_position = parent_world + local;
        for child in children {
            self.refresh_world_positions(child);
        }
    }

    fn child_by_name(&self, parent: NodeHandle, name: &str) -> Option<NodeHandle> {
        self.nodes
            .get(parent)?
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes.get(c).is_some_and(|n| n.name == name))
    }
}

impl SceneHost for MemoryScene {
    fn all_nodes(&self) -> Vec<NodeHandle> {
        self.nodes.keys().collect()
    }

    fn name(&self, node: NodeHandle) -> Option<&str> {
        Some(self.nodes.get(node)?.name.as_str())
    }

    fn world_position(&self, node: NodeHandle) -> Option<Vec3> {
        Some(self.nodes.get(node)?.world_position)
    }

    fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(node)?.parent
    }

    fn is_active(&self, node: NodeHandle) -> Option<bool> {
        Some(self.nodes.get(node)?.active)
    }

    fn set_active(&mut self, node: NodeHandle, active: bool) -> Result<(), SceneError> {
        let n = self.nodes.get_mut(node).ok_or(SceneError::StaleHandle)?;
        n.active = active;
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> Option<NodeHandle> {
        let mut segments = path.split('/');
        let root_name = segments.next()?;
        let mut current = self
            .roots
            .iter()
            .copied()
            .find(|&r| self.nodes.get(r).is_some_and(|n| n.name == root_name))?;

        for segment in segments {
            current = self.child_by_name(current, segment)?;
        }
        Some(current)
    }

    fn clone_node(
        &mut self,
        template: NodeHandle,
        clone_name: &str,
    ) -> Result<NodeHandle, SceneError> {
        let source = self
            .nodes
            .get(template)
            .ok_or(SceneError::StaleHandle)?
            .clone();

        let clone = self.nodes.insert(Node {
            name: clone_name.to_string(),
            parent: source.parent,
            children: Vec::new(),
            local_position: source.local_position,
            world_position: source.world_position,
            rotation: source.rotation,
            local_scale: source.local_scale,
            active: source.active,
            force_volume: source.force_volume.clone(),
            // Host convention: clones start with their shape disabled and
            // must be re-enabled explicitly.
            collision_shape: source
                .collision_shape
                .as_ref()
                .map(|_| CollisionShape { enabled: false }),
        });

        match source.parent {
            Some(p) if self.nodes.contains_key(p) => self.nodes[p].children.push(clone),
            _ => self.roots.push(clone),
        }

        Ok(clone)
    }

    fn translate_local(&mut self, node: NodeHandle, offset: Vec3) -> Result<(), SceneError> {
        let n = self.nodes.get_mut(node).ok_or(SceneError::StaleHandle)?;
        n.local_position += offset;
        self.refresh_world_positions(node);
        Ok(())
    }

    fn set_local_scale(&mut self, node: NodeHandle, scale: Vec3) -> Result<(), SceneError> {
        let n = self.nodes.get_mut(node).ok_or(SceneError::StaleHandle)?;
        n.local_scale = scale;
        Ok(())
    }

    fn set_shape_enabled(&mut self, node: NodeHandle, enabled: bool) -> Result<(), SceneError> {
        let n = self.nodes.get_mut(node).ok_or(SceneError::StaleHandle)?;
        if let Some(shape) = n.collision_shape.as_mut() {
            shape.enabled = enabled;
        }
        Ok(())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_scene() -> (MemoryScene, NodeHandle, NodeHandle) {
        let mut scene = MemoryScene::new();
        let body = scene.add_node(None, "CaveTwin_Body", Vec3::new(100.0, 0.0, 0.0));
        let sector = scene.add_node(Some(body), "Sector_CaveTwin", Vec3::new(0.0, 10.0, 0.0));
        (scene, body, sector)
    }

    #[test]
    fn test_world_position_composes_through_parents() {
        let (mut scene, _, sector) = small_scene();
        let leaf = scene.add_node(Some(sector), "Door_A", Vec3::new(0.0, 0.0, 5.0));

        let world = scene.world_position(leaf).unwrap();
        assert_relative_eq!(world.x, 100.0);
        assert_relative_eq!(world.y, 10.0);
        assert_relative_eq!(world.z, 5.0);
    }

    #[test]
    fn test_resolve_path() {
        let (mut scene, _, sector) = small_scene();
        let leaf = scene.add_node(Some(sector), "Door_A", Vec3::zeros());

        assert_eq!(
            scene.resolve_path("CaveTwin_Body/Sector_CaveTwin/Door_A"),
            Some(leaf)
        );
        assert_eq!(scene.resolve_path("CaveTwin_Body/Sector_CaveTwin/Door_B"), None);
        assert_eq!(scene.path_of(leaf).unwrap(), "CaveTwin_Body/Sector_CaveTwin/Door_A");
    }

    #[test]
    fn test_clone_copies_pose_and_disables_shape() {
        let (mut scene, _, sector) = small_scene();
        let template = scene.add_node(Some(sector), "GravityVolume", Vec3::new(1.0, 2.0, 3.0));
        scene.attach_force_volume(template, Some("BrittleHollow_Body".into()));
        scene.attach_collision_shape(template, true);

        let clone = scene.clone_node(template, "GravityVolume (OD QT 0)").unwrap();

        assert_eq!(scene.parent(clone), Some(sector));
        assert_eq!(
            scene.world_position(clone).unwrap(),
            scene.world_position(template).unwrap()
        );
        assert_eq!(
            scene.force_volume(clone).unwrap().attached_body.as_deref(),
            Some("BrittleHollow_Body")
        );
        assert!(!scene.collision_shape(clone).unwrap().enabled);
    }

    #[test]
    fn test_translate_local_moves_world_position() {
        let (mut scene, _, sector) = small_scene();
        let leaf = scene.add_node(Some(sector), "GravityVolume", Vec3::zeros());

        scene.translate_local(leaf, Vec3::new(-1.0, 20.0, 0.0)).unwrap();

        let world = scene.world_position(leaf).unwrap();
        assert_relative_eq!(world.x, 99.0);
        assert_relative_eq!(world.y, 30.0);
    }

    #[test]
    fn test_set_active_is_idempotent() {
        let (mut scene, body, _) = small_scene();
        scene.set_active(body, false).unwrap();
        scene.set_active(body, false).unwrap();
        assert_eq!(scene.is_active(body), Some(false));
        scene.set_active(body, true).unwrap();
        assert_eq!(scene.is_active(body), Some(true));
    }
}
