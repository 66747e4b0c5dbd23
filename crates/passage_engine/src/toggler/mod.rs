//! Visibility toggling primitive
//!
//! The single mutating operation in the library: resolve a target and apply
//! an active/inactive state. Every higher-level toggle (bulk near-player,
//! full-path catalog, synthetic cluster) is repeated calls to this primitive.
//!
//! Failure policy: a target that does not resolve is logged and skipped.
//! Nothing propagates, nothing retries, and a miss never aborts the rest of a
//! batch. Resolution failure is indistinguishable from "legitimately absent
//! right now".

use crate::scene::{NodeHandle, SceneHost};

/// A toggle target: an already-resolved handle or a full hierarchical path
#[derive(Debug, Clone, Copy)]
pub enum ObjectTarget<'a> {
    /// Direct node handle, no resolution needed
    Handle(NodeHandle),
    /// Slash-separated path resolved through the host
    Path(&'a str),
}

impl From<NodeHandle> for ObjectTarget<'_> {
    fn from(handle: NodeHandle) -> Self {
        Self::Handle(handle)
    }
}

impl<'a> From<&'a str> for ObjectTarget<'a> {
    fn from(path: &'a str) -> Self {
        Self::Path(path)
    }
}

/// Set a target's active state; idempotent, tolerant of missing objects
pub fn set_visible(scene: &mut dyn SceneHost, target: ObjectTarget<'_>, visible: bool) {
    let node = match target {
        ObjectTarget::Handle(handle) => handle,
        ObjectTarget::Path(path) => match scene.resolve_path(path) {
            Some(handle) => handle,
            None => {
                log::error!("could not find object '{path}'");
                return;
            }
        },
    };

    if let Err(err) = scene.set_active(node, visible) {
        log::error!("could not set visibility: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::MemoryScene;

    fn door_scene() -> (MemoryScene, NodeHandle) {
        let mut scene = MemoryScene::new();
        let body = scene.add_node(None, "RingWorld_Body", Vec3::new(10.0, 0.0, 0.0));
        let door = scene.add_node(Some(body), "Door_A", Vec3::new(1.0, 0.0, 0.0));
        (scene, door)
    }

    #[test]
    fn test_set_visible_by_handle() {
        let (mut scene, door) = door_scene();
        set_visible(&mut scene, door.into(), false);
        assert_eq!(scene.is_active(door), Some(false));
    }

    #[test]
    fn test_set_visible_by_path() {
        let (mut scene, door) = door_scene();
        set_visible(&mut scene, "RingWorld_Body/Door_A".into(), false);
        assert_eq!(scene.is_active(door), Some(false));
    }

    #[test]
    fn test_set_visible_is_idempotent() {
        let (mut scene, door) = door_scene();
        set_visible(&mut scene, door.into(), false);
        set_visible(&mut scene, door.into(), false);
        assert_eq!(scene.is_active(door), Some(false));

        set_visible(&mut scene, door.into(), true);
        assert_eq!(scene.is_active(door), Some(true));
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let (mut scene, door) = door_scene();
        set_visible(&mut scene, "RingWorld_Body/Door_Z".into(), false);
        // Nothing changed, nothing panicked.
        assert_eq!(scene.is_active(door), Some(true));
    }
}
