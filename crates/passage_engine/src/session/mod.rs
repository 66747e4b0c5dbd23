//! Toggle session and command dispatch
//!
//! [`ToggleSession`] is the single owned-state object of the library: the
//! classification tables, the exclusion set, the synthetic clusters, and the
//! mutable knobs (`max_distance`, `debug_mode`, `ready`). The host drives it
//! from two callbacks: scene-load notification and a per-frame input
//! snapshot. All mutation happens synchronously inside those calls; there is
//! no internal threading.

pub mod input;
pub mod notify;

use crate::catalog::{ClassificationCatalog, ExclusionSet};
use crate::config::SessionConfig;
use crate::foundation::math::Vec3;
use crate::foundation::time::Stopwatch;
use crate::scene::SceneHost;
use crate::session::input::{ChordState, InputSnapshot, KeyBindings};
use crate::session::notify::Notifier;
use crate::spatial::gather_nearby;
use crate::synthetic::SyntheticCluster;
use crate::toggler::{set_visible, ObjectTarget};

/// Owned session state and command dispatcher
///
/// Created once by the host and kept for the process lifetime. Ignores all
/// input until the main simulation scene has loaded at least once.
pub struct ToggleSession {
    ready: bool,
    debug_mode: bool,
    max_distance: f32,
    radius_step: f32,
    main_scene: String,
    bindings: KeyBindings,
    catalog: ClassificationCatalog,
    exclusions: ExclusionSet,
    clusters: Vec<SyntheticCluster>,
}

impl ToggleSession {
    /// Create a session with the built-in catalog and exclusion tables
    pub fn new(config: SessionConfig) -> Self {
        Self::with_tables(config, ClassificationCatalog::builtin(), ExclusionSet::builtin())
    }

    /// Create a session with caller-supplied tables
    pub fn with_tables(
        config: SessionConfig,
        catalog: ClassificationCatalog,
        exclusions: ExclusionSet,
    ) -> Self {
        Self {
            ready: false,
            debug_mode: false,
            max_distance: config.max_distance,
            radius_step: config.radius_step,
            main_scene: config.main_scene,
            bindings: config.bindings,
            catalog,
            exclusions,
            clusters: config.clusters,
        }
    }

    /// Whether post-load initialization has completed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether debug mode is active
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Current toggle radius
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Read access to the classification tables
    pub fn catalog(&self) -> &ClassificationCatalog {
        &self.catalog
    }

    /// Scene-load notification from the host
    ///
    /// Only the configured main simulation scene triggers work: synthetic
    /// clusters are (re)initialized and closed, and on the first qualifying
    /// load the session becomes ready. Every other scene id is ignored.
    pub fn on_scene_load(&mut self, scene: &mut dyn SceneHost, scene_id: &str) {
        if scene_id != self.main_scene {
            return;
        }

        for cluster in &self.clusters {
            cluster.initialize(scene);
            cluster.set_open(scene, false);
        }

        if !self.ready {
            self.ready = true;
            log::info!("toggle session is now ready");
        }
    }

    /// Per-frame input dispatch
    ///
    /// Evaluates the chord bindings against the snapshot and runs at most the
    /// commands whose decision key was pressed this frame. Does nothing until
    /// the session is ready.
    pub fn handle_frame(
        &mut self,
        scene: &mut dyn SceneHost,
        player_position: Vec3,
        input: &InputSnapshot,
        notifier: &mut dyn Notifier,
    ) {
        if !self.ready {
            return;
        }

        let bindings = self.bindings.clone();
        let chord = input.chord_state(&bindings);

        if chord.contains(ChordState::MODIFIER) {
            if input.was_pressed(bindings.open_nearby) {
                self.toggle_nearby(scene, player_position, true, false, notifier);
            }
            if input.was_pressed(bindings.close_nearby) {
                self.toggle_nearby(scene, player_position, false, false, notifier);
            }
            if input.was_pressed(bindings.open_all) {
                self.toggle_nearby(scene, player_position, true, true, notifier);
            }
            if input.was_pressed(bindings.radius_increase) {
                self.adjust_radius(self.radius_step, notifier);
            }
            if input.was_pressed(bindings.radius_decrease) {
                self.adjust_radius(-self.radius_step, notifier);
            }
            if chord.contains(ChordState::DEBUG_HOLD) && input.was_pressed(bindings.debug_toggle) {
                self.debug_mode = !self.debug_mode;
                log::info!("debug mode: {}", self.debug_mode);
                notifier.post(if self.debug_mode {
                    "DEBUG MODE ACTIVATED"
                } else {
                    "DEBUG MODE DISABLED"
                });
            }
        } else if self.debug_mode && input.was_pressed(bindings.open_nearby) {
            self.learn_from_clipboard(input, notifier);
        }
    }

    /// Open or close all eligible objects around the player
    ///
    /// Opening hides the blocking geometry; closing restores it. Eligibility
    /// uses the filtered tables whenever the filtered flag is set or the
    /// command is a close, so everything hidden by a filtered open is
    /// restored by any close.
    pub fn toggle_nearby(
        &mut self,
        scene: &mut dyn SceneHost,
        player_position: Vec3,
        open: bool,
        filtered: bool,
        notifier: &mut dyn Notifier,
    ) {
        let stopwatch = Stopwatch::start_new();
        let filtered_mode = !open || filtered;
        let visible = !open;

        let gathered = gather_nearby(scene, player_position, self.max_distance, &self.exclusions);
        let eligible: Vec<_> = gathered
            .into_iter()
            .filter(|&node| {
                scene
                    .name(node)
                    .is_some_and(|name| self.catalog.is_eligible(name, filtered_mode))
            })
            .collect();

        for node in eligible {
            set_visible(scene, ObjectTarget::Handle(node), visible);
        }

        self.apply_full_path_entries(scene, visible, filtered);

        for cluster in &self.clusters {
            cluster.set_open(scene, open);
        }

        log::info!(
            "{} surrounding pathways ({} ms)",
            if open { "opened" } else { "closed" },
            stopwatch.elapsed_millis()
        );

        notifier.post(if open {
            if filtered {
                "OPENED ALL SURROUNDING PATHWAYS"
            } else {
                "OPENED SURROUNDING PATHWAYS"
            }
        } else {
            "CLOSED SURROUNDING PATHWAYS"
        });
    }

    /// Apply the curated full-path tables
    ///
    /// Always-set entries are applied on every toggle. Filtered entries are
    /// applied when restoring visibility or when the filtered flag is set;
    /// skipping them on an unfiltered open leaves them untouched.
    fn apply_full_path_entries(&self, scene: &mut dyn SceneHost, visible: bool, filtered: bool) {
        for entry in self.catalog.full_path_always() {
            set_visible(scene, ObjectTarget::Path(&entry.pattern), visible);
        }

        if visible || filtered {
            for entry in self.catalog.full_path_filtered() {
                set_visible(scene, ObjectTarget::Path(&entry.pattern), visible);
            }
        }
    }

    fn adjust_radius(&mut self, delta: f32, notifier: &mut dyn Notifier) {
        self.max_distance = (self.max_distance + delta).max(0.0);
        log::info!("max distance: {}", self.max_distance);
        notifier.post(&format!("SET RADIUS TO [{}]", self.max_distance));
    }

    fn learn_from_clipboard(&mut self, input: &InputSnapshot, notifier: &mut dyn Notifier) {
        let Some(text) = input.clipboard.as_deref() else { return };
        if text.is_empty() {
            return;
        }

        log::info!("adding '{text}' to hide-able objects");
        self.catalog.learn(text);
        notifier.post(&format!("Added {text} to hide-able objects"));
    }
}
