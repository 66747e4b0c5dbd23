//! Broad-phase radius query over the host scene graph
//!
//! Enumerates every host-managed node (including inactive ones), keeps those
//! within a radius of a reference point, and closes the result over the
//! ancestor chain so intermediate group nodes become toggle targets even when
//! only a leaf is near the player.
//!
//! The scan is linear in the size of the host graph. That cost is a latency
//! concern, not a correctness one; callers log elapsed time per command.

use crate::catalog::ExclusionSet;
use crate::foundation::math::{distance, Vec3};
use crate::scene::{NodeHandle, SceneHost};
use std::collections::HashSet;

/// Gather all nodes within `max_distance` of `reference`, plus their ancestors
///
/// A candidate is rejected when its raw name matches the exclusion set, when
/// its world-position magnitude is exactly zero (uninitialized/root
/// sentinel), when its distance to the reference is exactly zero (the
/// reference object itself), or when it lies beyond `max_distance`. Every
/// accepted node contributes its full ancestor chain up to the root. The
/// result is a deduplicated set; iteration order carries no meaning.
pub fn gather_nearby(
    scene: &dyn SceneHost,
    reference: Vec3,
    max_distance: f32,
    exclusions: &ExclusionSet,
) -> HashSet<NodeHandle> {
    let mut gathered = HashSet::new();

    for node in scene.all_nodes() {
        let Some(name) = scene.name(node) else { continue };
        if exclusions.is_excluded(name) {
            continue;
        }
        let Some(position) = scene.world_position(node) else { continue };
        if position.magnitude() == 0.0 {
            continue;
        }
        let dist = distance(position, reference);
        if dist == 0.0 || dist > max_distance {
            continue;
        }

        gathered.insert(node);
        collect_ancestors(scene, node, &mut gathered);
    }

    gathered
}

/// Walk parent links to the root, inserting each ancestor
///
/// Stops early once an ancestor is already present; the remaining chain was
/// inserted by a previous walk. This is an optimization only, insertion into
/// the set is idempotent.
fn collect_ancestors(scene: &dyn SceneHost, node: NodeHandle, gathered: &mut HashSet<NodeHandle>) {
    let mut current = node;
    while let Some(parent) = scene.parent(current) {
        if !gathered.insert(parent) {
            break;
        }
        current = parent;
    }
}
