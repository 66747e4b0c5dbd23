//! Synthetic element manager
//!
//! Some obstructions cannot be opened by hiding geometry alone; they need
//! extra objects that the host scene never shipped. The canonical case is a
//! vertical shaft that becomes climbable only with a stack of gravity-floor
//! volumes along its height.
//!
//! A [`SyntheticCluster`] clones a template node N times at scene-load time,
//! offsetting and scaling each clone, and later toggles the whole clone set
//! in lockstep. Clones are tracked purely by a deterministic naming
//! convention and re-located by path on every toggle; the host does not
//! promise handle stability across scene reloads, so no handle registry is
//! kept.

use crate::foundation::math::Vec3;
use crate::scene::SceneHost;
use crate::toggler::{set_visible, ObjectTarget};
use serde::{Deserialize, Serialize};

/// A template-clone cluster definition
///
/// Produces `count` clones of the node at `template_path`, each named
/// `"{template} ({name_tag} {i})"`, placed at `base_offset + index_offset * i`
/// relative to the template's local position, with a fixed local scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticCluster {
    /// Full path of the template node
    pub template_path: String,
    /// Number of clones
    pub count: u32,
    /// Tag embedded in each clone's name to keep names collision-free
    pub name_tag: String,
    /// Local-position offset applied to every clone
    pub base_offset: Vec3,
    /// Additional local-position offset per clone index
    pub index_offset: Vec3,
    /// Local scale applied to every clone
    pub scale: Vec3,
}

impl SyntheticCluster {
    /// The built-in gravity-floor stack cluster
    pub fn gravity_floor_stack() -> Self {
        Self {
            template_path: "BrittleHollow_Body/Sector_BH/Sector_QuantumFragment/\
                            Interactables_QuantumFragment/Undercrust/GravityFloorVolumes/\
                            GravityVolume"
                .to_string(),
            count: 9,
            name_tag: "OD QT".to_string(),
            base_offset: Vec3::new(-1.0, 0.0, 0.0),
            index_offset: Vec3::new(0.0, 10.0, 0.0),
            scale: Vec3::new(1.0, 2.0, 1.0),
        }
    }

    /// Deterministic path of the clone at `index`
    pub fn clone_path(&self, index: u32) -> String {
        format!("{} ({} {})", self.template_path, self.name_tag, index)
    }

    /// Deterministic bare name of the clone at `index`
    pub fn clone_name(&self, index: u32) -> String {
        let template_name = self
            .template_path
            .rsplit('/')
            .next()
            .unwrap_or(self.template_path.as_str());
        format!("{template_name} ({} {index})", self.name_tag)
    }

    fn offset_for(&self, index: u32) -> Vec3 {
        self.base_offset + self.index_offset * index as f32
    }

    /// Clone the template `count` times with per-index offsets
    ///
    /// Runs once per scene load. Each clone keeps the template's parent,
    /// world pose, and force-volume back-reference; its collision shape is
    /// re-enabled (clones inherit a disabled shape by host convention). An
    /// index whose clone already exists is left alone, and a missing template
    /// yields a missing clone for that index only.
    pub fn initialize(&self, scene: &mut dyn SceneHost) {
        for index in 0..self.count {
            let clone_path = self.clone_path(index);
            if scene.resolve_path(&clone_path).is_some() {
                continue;
            }

            let Some(template) = scene.resolve_path(&self.template_path) else {
                log::error!(
                    "cluster template '{}' not found, skipping clone {index}",
                    self.template_path
                );
                continue;
            };

            let clone = match scene.clone_node(template, &self.clone_name(index)) {
                Ok(clone) => clone,
                Err(err) => {
                    log::error!("failed to clone '{}': {err}", self.template_path);
                    continue;
                }
            };

            let offset = self.offset_for(index);
            let _ = scene.set_shape_enabled(clone, true);
            let _ = scene.translate_local(clone, offset);
            let _ = scene.set_local_scale(clone, self.scale);

            log::debug!(
                "cloned '{}' as '{}' with offset {offset:?} and scale {:?}",
                self.template_path,
                self.clone_name(index),
                self.scale
            );
        }
    }

    /// Show or hide every clone in the cluster
    ///
    /// Clones are re-located by their deterministic path. An unresolvable
    /// clone (scene not loaded yet, index never created) is silently skipped
    /// and does not abort the rest of the cluster.
    pub fn set_open(&self, scene: &mut dyn SceneHost, open: bool) {
        for index in 0..self.count {
            let clone_path = self.clone_path(index);
            let Some(clone) = scene.resolve_path(&clone_path) else {
                log::debug!("clone '{clone_path}' not present, skipping");
                continue;
            };
            set_visible(scene, ObjectTarget::Handle(clone), open);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MemoryScene, NodeHandle};
    use approx::assert_relative_eq;

    fn shaft_scene() -> (MemoryScene, NodeHandle, SyntheticCluster) {
        let mut scene = MemoryScene::new();
        let body = scene.add_node(None, "Tower_Body", Vec3::new(200.0, 0.0, 0.0));
        let floors = scene.add_node(Some(body), "GravityFloorVolumes", Vec3::zeros());
        let template = scene.add_node(Some(floors), "GravityVolume", Vec3::new(0.0, 1.0, 0.0));
        scene.attach_force_volume(template, Some("Tower_Body".into()));
        scene.attach_collision_shape(template, true);

        let cluster = SyntheticCluster {
            template_path: "Tower_Body/GravityFloorVolumes/GravityVolume".to_string(),
            count: 9,
            name_tag: "OD QT".to_string(),
            base_offset: Vec3::new(-1.0, 0.0, 0.0),
            index_offset: Vec3::new(0.0, 10.0, 0.0),
            scale: Vec3::new(1.0, 2.0, 1.0),
        };
        (scene, template, cluster)
    }

    #[test]
    fn test_initialize_creates_all_clones() {
        let (mut scene, template, cluster) = shaft_scene();
        cluster.initialize(&mut scene);

        for index in 0..9 {
            let clone = scene
                .resolve_path(&cluster.clone_path(index))
                .unwrap_or_else(|| panic!("clone {index} missing"));
            assert_ne!(clone, template);
            assert!(scene.collision_shape(clone).unwrap().enabled);
            assert_eq!(
                scene.force_volume(clone).unwrap().attached_body.as_deref(),
                Some("Tower_Body")
            );
            assert_eq!(scene.local_scale(clone).unwrap(), Vec3::new(1.0, 2.0, 1.0));

            let local = scene.local_position(clone).unwrap();
            assert_relative_eq!(local.x, -1.0);
            assert_relative_eq!(local.y, 1.0 + 10.0 * index as f32);
        }
    }

    #[test]
    fn test_initialize_is_idempotent_per_scene() {
        let (mut scene, _, cluster) = shaft_scene();
        let before = scene.node_count();
        cluster.initialize(&mut scene);
        let after_first = scene.node_count();
        cluster.initialize(&mut scene);

        assert_eq!(after_first, before + 9);
        assert_eq!(scene.node_count(), after_first);
    }

    #[test]
    fn test_set_open_round_trip_restores_all_clones() {
        let (mut scene, _, cluster) = shaft_scene();
        cluster.initialize(&mut scene);

        cluster.set_open(&mut scene, false);
        for index in 0..9 {
            let clone = scene.resolve_path(&cluster.clone_path(index)).unwrap();
            assert_eq!(scene.is_active(clone), Some(false));
        }

        cluster.set_open(&mut scene, true);
        for index in 0..9 {
            let clone = scene.resolve_path(&cluster.clone_path(index)).unwrap();
            assert_eq!(scene.is_active(clone), Some(true));
        }
    }

    #[test]
    fn test_out_of_range_clone_skipped_silently() {
        let (mut scene, _, cluster) = shaft_scene();
        cluster.initialize(&mut scene);

        // A wider cluster over the same template: index 9 was never created.
        let wider = SyntheticCluster { count: 10, ..cluster.clone() };
        assert!(scene.resolve_path(&wider.clone_path(9)).is_none());
        wider.set_open(&mut scene, false);

        for index in 0..9 {
            let clone = scene.resolve_path(&cluster.clone_path(index)).unwrap();
            assert_eq!(scene.is_active(clone), Some(false));
        }
    }

    #[test]
    fn test_missing_template_skips_initialization() {
        let mut scene = MemoryScene::new();
        scene.add_node(None, "Somewhere_Body", Vec3::new(1.0, 0.0, 0.0));
        let cluster = SyntheticCluster::gravity_floor_stack();

        cluster.initialize(&mut scene);
        assert!(scene.resolve_path(&cluster.clone_path(0)).is_none());
    }
}
