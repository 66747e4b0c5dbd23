//! # Passage Engine
//!
//! A scene-graph visibility toggling toolkit: on player command it hides or
//! shows a curated set of world objects (doors, collision volumes, hazards,
//! decorative geometry) within a configurable radius, so the player can pass
//! through normally-blocking geometry.
//!
//! The host application owns the scene graph, the transform hierarchy, input
//! devices, and rendering. This library only consumes a capability interface
//! ([`scene::SceneHost`]) over the host's node graph and is driven from the
//! host's per-frame update callback.
//!
//! ## Quick Start
//!
//! ```rust
//! use passage_engine::prelude::*;
//!
//! let mut scene = MemoryScene::new();
//! let mut session = ToggleSession::new(SessionConfig::default());
//! let mut notifier = LogNotifier;
//!
//! // Host tells us a scene finished loading.
//! session.on_scene_load(&mut scene, "SolarSystem");
//!
//! // Host forwards one input snapshot per frame, with the player position.
//! let input = InputSnapshot::new();
//! let player_position = Vec3::new(0.0, 0.0, 0.0);
//! session.handle_frame(&mut scene, player_position, &input, &mut notifier);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;

pub mod catalog;
pub mod config;
pub mod scene;
pub mod session;
pub mod spatial;
pub mod synthetic;
pub mod toggler;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        catalog::{ClassificationCatalog, EligibilityMode, ExclusionSet, MatchStrategy},
        config::{Config, ConfigError, SessionConfig},
        foundation::math::Vec3,
        scene::{MemoryScene, NodeHandle, SceneError, SceneHost},
        session::{
            input::{InputSnapshot, Key, KeyBindings},
            notify::{LogNotifier, Notifier},
            ToggleSession,
        },
        spatial::gather_nearby,
        synthetic::SyntheticCluster,
        toggler::{set_visible, ObjectTarget},
    };
}
