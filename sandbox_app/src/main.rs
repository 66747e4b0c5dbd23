//! Pathway sandbox
//!
//! A headless stand-in for a live simulation host: builds an in-memory world,
//! wires up a toggle session, and drives it with a scripted sequence of input
//! frames, printing the notifications a player would see.

use passage_engine::prelude::*;
use passage_engine::session::notify::Notifier;

/// Notifier that prints to stdout like a HUD toast
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn post(&mut self, message: &str) {
        println!("[HUD] {message}");
    }
}

struct Sandbox {
    scene: MemoryScene,
    session: ToggleSession,
    player_position: Vec3,
    cluster: SyntheticCluster,
    watched: Vec<(String, NodeHandle)>,
}

impl Sandbox {
    fn new() -> Self {
        log::info!("Building sandbox world...");
        let mut scene = MemoryScene::new();

        let station = scene.add_node(None, "Station_Body", Vec3::new(500.0, 0.0, 0.0));
        let door_a = scene.add_node(Some(station), "Door_A", Vec3::new(4.0, 0.0, 0.0));
        let door_b = scene.add_node(Some(station), "Door_B", Vec3::new(-4.0, 0.0, 0.0));
        let hazard = scene.add_node(Some(station), "HazardVolume", Vec3::new(0.0, 0.0, 6.0));
        let beam = scene.add_node(Some(station), "BeamVolume", Vec3::new(0.0, 5.0, 0.0));
        let cactus = scene.add_node(Some(station), "Cactus_Tall_01", Vec3::new(8.0, 0.0, 0.0));
        let statue = scene.add_node(Some(station), "Fountain_Statue", Vec3::new(0.0, 0.0, -6.0));
        // Player rig parts carry excluded names and never become candidates.
        scene.add_node(Some(station), "PlayerCamera", Vec3::new(0.1, 1.8, 0.0));

        let floors = scene.add_node(Some(station), "GravityFloorVolumes", Vec3::zeros());
        let template = scene.add_node(Some(floors), "GravityVolume", Vec3::new(0.0, 1.0, 0.0));
        scene.attach_force_volume(template, Some("Station_Body".into()));
        scene.attach_collision_shape(template, true);
        log::info!("World built with {} nodes", scene.node_count());

        let cluster = SyntheticCluster {
            template_path: "Station_Body/GravityFloorVolumes/GravityVolume".to_string(),
            count: 9,
            name_tag: "OD QT".to_string(),
            base_offset: Vec3::new(-1.0, 0.0, 0.0),
            index_offset: Vec3::new(0.0, 10.0, 0.0),
            scale: Vec3::new(1.0, 2.0, 1.0),
        };
        let config = SessionConfig {
            clusters: vec![cluster.clone()],
            ..SessionConfig::default()
        };

        let watched = vec![
            ("Door_A".to_string(), door_a),
            ("Door_B".to_string(), door_b),
            ("HazardVolume".to_string(), hazard),
            ("BeamVolume".to_string(), beam),
            ("Cactus_Tall_01".to_string(), cactus),
            ("Fountain_Statue".to_string(), statue),
        ];

        Self {
            scene,
            session: ToggleSession::new(config),
            player_position: Vec3::new(500.0, 0.0, 0.0),
            cluster,
            watched,
        }
    }

    fn frame(&mut self, label: &str, input: &InputSnapshot) {
        println!("--- {label}");
        let mut notifier = ConsoleNotifier;
        self.session
            .handle_frame(&mut self.scene, self.player_position, input, &mut notifier);
        self.print_states();
    }

    fn print_states(&self) {
        for (name, handle) in &self.watched {
            let state = match self.scene.is_active(*handle) {
                Some(true) => "visible",
                Some(false) => "hidden",
                None => "gone",
            };
            println!("    {name}: {state}");
        }
        let open_floors = (0..self.cluster.count)
            .filter(|&i| {
                self.scene
                    .resolve_path(&self.cluster.clone_path(i))
                    .and_then(|clone| self.scene.is_active(clone))
                    .unwrap_or(false)
            })
            .count();
        println!("    gravity floors active: {open_floors}/{}", self.cluster.count);
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting pathway sandbox...");

    let mut sandbox = Sandbox::new();
    let bindings = KeyBindings::default();

    sandbox
        .session
        .on_scene_load(&mut sandbox.scene, "SolarSystem");
    log::info!("Session ready: {}", sandbox.session.is_ready());

    let open = InputSnapshot::new()
        .hold(bindings.modifier)
        .press(bindings.open_nearby);
    sandbox.frame("open nearby", &open);

    let open_all = InputSnapshot::new()
        .hold(bindings.modifier)
        .press(bindings.open_all);
    sandbox.frame("open nearby (filtered set included)", &open_all);

    let close = InputSnapshot::new()
        .hold(bindings.modifier)
        .press(bindings.close_nearby);
    sandbox.frame("close nearby", &close);

    let radius_up = InputSnapshot::new()
        .hold(bindings.modifier)
        .press(bindings.radius_increase);
    sandbox.frame("increase radius", &radius_up);

    let debug_on = InputSnapshot::new()
        .hold(bindings.modifier)
        .hold(bindings.debug_hold)
        .press(bindings.debug_toggle);
    sandbox.frame("enable debug mode", &debug_on);

    let learn = InputSnapshot::new()
        .press(bindings.open_nearby)
        .with_clipboard("Fountain_Statue");
    sandbox.frame("learn from clipboard", &learn);

    sandbox.frame("open nearby with learned entry", &open);

    log::info!("Sandbox run complete");
}
