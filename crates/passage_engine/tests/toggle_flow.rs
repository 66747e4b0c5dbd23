//! End-to-end command flow over an in-memory scene
//!
//! Builds a small world with a near-player door, a distant full-path catalog
//! object, and a gravity-floor cluster template, then drives the session
//! through the same scene-load and input callbacks a live host would issue.

use passage_engine::prelude::*;
use passage_engine::session::notify::RecordingNotifier;

struct World {
    scene: MemoryScene,
    session: ToggleSession,
    notifier: RecordingNotifier,
    player_position: Vec3,
    door: NodeHandle,
    melting_ice: NodeHandle,
    cluster: SyntheticCluster,
}

fn build_world() -> World {
    let mut scene = MemoryScene::new();

    // Near-player geometry: one always-eligible door.
    let station = scene.add_node(None, "Station_Body", Vec3::new(1000.0, 0.0, 0.0));
    let door = scene.add_node(Some(station), "Door_A", Vec3::new(3.0, 0.0, 0.0));

    // A catalog full-path object far outside any reasonable radius.
    let comet = scene.add_node(None, "Comet_Body", Vec3::new(-9000.0, 0.0, 0.0));
    let sector = scene.add_node(Some(comet), "Sector_CO", Vec3::zeros());
    let geometry = scene.add_node(Some(sector), "Geometry_CO", Vec3::zeros());
    let melting_ice = scene.add_node(Some(geometry), "MeltingIce", Vec3::new(0.0, 2.0, 0.0));

    // Cluster template inside the station.
    let floors = scene.add_node(Some(station), "GravityFloorVolumes", Vec3::zeros());
    let template = scene.add_node(Some(floors), "GravityVolume", Vec3::new(0.0, 1.0, 0.0));
    scene.attach_force_volume(template, Some("Station_Body".into()));
    scene.attach_collision_shape(template, true);

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

    World {
        scene,
        session: ToggleSession::new(config),
        notifier: RecordingNotifier::new(),
        player_position: Vec3::new(1000.0, 0.0, 0.0),
        door,
        melting_ice,
        cluster,
    }
}

fn chord(modifier: Key, decision: Key) -> InputSnapshot {
    InputSnapshot::new().hold(modifier).press(decision)
}

#[test]
fn scene_load_initializes_and_closes_clusters() {
    let mut w = build_world();

    w.session.on_scene_load(&mut w.scene, "TitleScreen");
    assert!(!w.session.is_ready());
    assert!(w.scene.resolve_path(&w.cluster.clone_path(0)).is_none());

    w.session.on_scene_load(&mut w.scene, "SolarSystem");
    assert!(w.session.is_ready());

    for index in 0..9 {
        let clone = w.scene.resolve_path(&w.cluster.clone_path(index)).unwrap();
        assert_eq!(w.scene.is_active(clone), Some(false));
    }
}

#[test]
fn open_close_round_trip() {
    let mut w = build_world();
    w.session.on_scene_load(&mut w.scene, "SolarSystem");

    let bindings = KeyBindings::default();
    w.session.handle_frame(
        &mut w.scene,
        w.player_position,
        &chord(bindings.modifier, bindings.open_nearby),
        &mut w.notifier,
    );

    // Nearby eligible geometry hidden, full-path entry hidden regardless of
    // distance, clusters opened.
    assert_eq!(w.scene.is_active(w.door), Some(false));
    assert_eq!(w.scene.is_active(w.melting_ice), Some(false));
    let clone = w.scene.resolve_path(&w.cluster.clone_path(4)).unwrap();
    assert_eq!(w.scene.is_active(clone), Some(true));
    assert_eq!(w.notifier.last(), Some("OPENED SURROUNDING PATHWAYS"));

    w.session.handle_frame(
        &mut w.scene,
        w.player_position,
        &chord(bindings.modifier, bindings.close_nearby),
        &mut w.notifier,
    );

    assert_eq!(w.scene.is_active(w.door), Some(true));
    assert_eq!(w.scene.is_active(w.melting_ice), Some(true));
    let clone = w.scene.resolve_path(&w.cluster.clone_path(4)).unwrap();
    assert_eq!(w.scene.is_active(clone), Some(false));
    assert_eq!(w.notifier.last(), Some("CLOSED SURROUNDING PATHWAYS"));
}

#[test]
fn reload_of_main_scene_does_not_duplicate_clones() {
    let mut w = build_world();
    w.session.on_scene_load(&mut w.scene, "SolarSystem");
    let count_after_first = w.scene.node_count();

    w.session.on_scene_load(&mut w.scene, "SolarSystem");
    assert_eq!(w.scene.node_count(), count_after_first);
}

#[test]
fn learned_entry_participates_in_next_toggle() {
    let mut w = build_world();
    w.session.on_scene_load(&mut w.scene, "SolarSystem");
    let bindings = KeyBindings::default();

    // A node the built-in catalog does not know about.
    let station = w.scene.resolve_path("Station_Body").unwrap();
    let mural = w
        .scene
        .add_node(Some(station), "MuralPanel_03", Vec3::new(-2.0, 0.0, 0.0));

    w.session.handle_frame(
        &mut w.scene,
        w.player_position,
        &chord(bindings.modifier, bindings.open_nearby),
        &mut w.notifier,
    );
    assert_eq!(w.scene.is_active(mural), Some(true));

    // Enter debug mode, learn the name from the clipboard, reopen.
    let debug_chord = InputSnapshot::new()
        .hold(bindings.modifier)
        .hold(bindings.debug_hold)
        .press(bindings.debug_toggle);
    w.session
        .handle_frame(&mut w.scene, w.player_position, &debug_chord, &mut w.notifier);

    let learn = InputSnapshot::new()
        .press(bindings.open_nearby)
        .with_clipboard("MuralPanel_03");
    w.session
        .handle_frame(&mut w.scene, w.player_position, &learn, &mut w.notifier);

    w.session.handle_frame(
        &mut w.scene,
        w.player_position,
        &chord(bindings.modifier, bindings.open_nearby),
        &mut w.notifier,
    );
    assert_eq!(w.scene.is_active(mural), Some(false));
}
