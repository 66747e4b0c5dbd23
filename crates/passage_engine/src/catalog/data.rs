//! Built-in catalog tables
//!
//! The curated object tables and the broad-scan exclusion list. Patterns are
//! host object names; reasons describe the obstruction they remove. These
//! tables are data, not logic: the command layer applies full-path entries by
//! direct resolution and the catalog applies the name tables.

/// Full-path entries applied on every toggle
pub(super) const FULL_PATH_ALWAYS: &[(&str, &str)] = &[
    (
        "CaveTwin_Body/Sector_CaveTwin/Sector_SouthHemisphere/Sector_SouthUnderground/Sector_FossilCave/Interactables_FossilCave/ProbePrompt_PodFossilWindow",
        "anglerfish fossil overview pod collision",
    ),
    (
        "CaveTwin_Body/Sector_CaveTwin/Sector_SouthHemisphere/Sector_SouthUnderground/Sector_FossilCave/Geometry_FossilCave/OtherComponentsGroup/Rocks_FossilOverlook/BatchedGroup/BatchedMeshRenderers_1",
        "anglerfish fossil overview pod stalagmites",
    ),
    (
        "CaveTwin_Body/Sector_CaveTwin/Sector_NorthHemisphere/Sector_NorthUnderground/Sector_LakebedCaves/Geometry_LakebedCaves/Rocks",
        "lakebed stalagmites stalactites",
    ),
    (
        "CaveTwin_Body/Sector_CaveTwin/Interactables_CaveTwin/Structure_NOM_EyeSymbol",
        "sunless city eye symbol outside",
    ),
    (
        "CaveTwin_Body/Sector_CaveTwin/Interactables_CaveTwin/Structure_NOM_EyeSymbol (1)",
        "sunless city eye symbol inside",
    ),
    (
        "CaveTwin_Body/Sector_CaveTwin/Sector_SouthHemisphere/Sector_CannonPath/Geometry_CannonPath/OtherComponentsGroup/Rocks",
        "sunless city cannon path stones",
    ),
    (
        "CaveTwin_Body/Sector_CaveTwin/Sector_SouthHemisphere/Sector_CannonPath/Geometry_CannonPath/BatchedGroup/BatchedMeshColliders_0",
        "sunless city cannon path stones colliders",
    ),
    (
        "BrittleHollow_Body/Sector_BH/Sector_QuantumFragment/Interactables_QuantumFragment/VisibleFrom_BH/ProbeWindows",
        "tower of quantum knowledge top/side probe windows",
    ),
    (
        "BrittleHollow_Body/Sector_BH/Sector_OldSettlement/Fragment OldSettlement 0/Core_OldSettlement0/Interactables_Core_OldSettlement0/probeWindow (1)",
        "old settlement center piece probe window",
    ),
    (
        "QuantumMoon_Body/Sector_QuantumMoon/State_GD/Volumes_GDState/HurricaneFluidVolume",
        "quantum moon gd tornado physics",
    ),
    (
        "QuantumMoon_Body/Sector_QuantumMoon/State_GD/Effects_GDState/Effects_GD_Hurricane (1)",
        "quantum moon gd tornado visuals",
    ),
    ("Comet_Body/Sector_CO/Geometry_CO/MeltingIce", "interloper melting ice"),
    (
        "RingWorld_Body/Sector_RingInterior/Sector_Zone4/Sector_PrisonDocks/Sector_PrisonInterior/Interactibles_PrisonInterior/Prefab_IP_Sarcophagus/Geo_IP_Sarcophagus/Seals",
        "stranger sarcophagus seal geometry",
    ),
    (
        "RingWorld_Body/Sector_RingInterior/Sector_Zone4/Sector_PrisonDocks/Sector_PrisonInterior/Interactibles_PrisonInterior/Prefab_IP_Sarcophagus/Symbol_Sarcophagus_01",
        "stranger sarcophagus seal symbol 1",
    ),
    (
        "RingWorld_Body/Sector_RingInterior/Sector_Zone4/Sector_PrisonDocks/Sector_PrisonInterior/Interactibles_PrisonInterior/Prefab_IP_Sarcophagus/Symbol_Sarcophagus_02",
        "stranger sarcophagus seal symbol 2",
    ),
    (
        "RingWorld_Body/Sector_RingInterior/Sector_Zone4/Sector_PrisonDocks/Sector_PrisonInterior/Interactibles_PrisonInterior/Prefab_IP_Sarcophagus/Symbol_Sarcophagus_03",
        "stranger sarcophagus seal symbol 3",
    ),
    (
        "RingWorld_Body/Sector_RingInterior/Sector_Zone4/Sector_BlightedShore/Sector_JammingControlRoom_Zone4/Interactables_JammingControlRoom_Zone4/Rotten_IP_Wall_Probe_A_Flipped",
        "stranger signal jammer scout wall",
    ),
    (
        "DreamWorld_Body/Sector_DreamWorld/Sector_Underground/Interactibles_Underground/SarcophagusController/SarcophagusHoleCover",
        "stranger dream sarcophagus wall hole cover",
    ),
    (
        "DreamWorld_Body/Sector_DreamWorld/Sector_Underground/Interactibles_Underground/SarcophagusController/Seals",
        "stranger dream sarcophagus seal symbol 3",
    ),
    (
        "DreamWorld_Body/Sector_DreamWorld/Sector_Underground/Volumes_Underground/WaterVolume_Underground",
        "stranger dream underground sector water volume",
    ),
];

/// Full-path entries applied only in filtered mode
pub(super) const FULL_PATH_FILTERED: &[(&str, &str)] = &[
    (
        "Comet_Body/Sector_CO/Geometry_CO/Frictionless_Batched/BatchedGroup",
        "interloper ice spires collision",
    ),
    (
        "Comet_Body/Sector_CO/Geometry_CO/Frictionless_Batched/OtherComponentsGroup/Spires/Rock_Ice_MergedSpires",
        "interloper ice spires geometry",
    ),
    (
        "QuantumMoon_Body/Sector_QuantumMoon/State_DB/Geometry_DBState/BatchedGroup/BatchedMeshRenderers_0",
        "quantum moon db north obstacle visuals",
    ),
    (
        "QuantumMoon_Body/Sector_QuantumMoon/State_DB/Geometry_DBState/BatchedGroup/BatchedMeshColliders_0",
        "quantum moon db north obstacle colliders",
    ),
];

/// Exact bare-name entries applied on every toggle
pub(super) const EXACT_NAME_ALWAYS: &[(&str, &str)] = &[
    ("slabs_door", "large orb doors"),
    ("Structure_NOM_RotatingDoor_Broken_Panels", "single sided rotating orb door"),
    ("PointLight_NOM_OrbSmall", "general door orb"),
    ("HazardVolume", "removes all hazards"),
    ("Cacti", "cactus parent object"),
    ("DarkMatter", "ghost matter"),
    ("DarkMatterVolume", "ghost matter"),
    ("GhostMatter_Clutter", "ghost matter"),
    ("Props_GM_Clutter", "ghost matter"),
    ("Airlock_OuterSphere", "airlock outer sphere"),
    ("Airlcok_MidSphere", "airlock mid sphere"),
    ("Fol_GM_Clutter", "interloper ghost matter patches"),
    ("OPC_Connector_Broken_BrokenPiece", "orbital probe cannon alunch module broken pieces"),
    ("DoorInterface_IP", "stranger door insterface"),
    ("Door_A", "stranger door wing A"),
    ("Door_B", "stranger door wing B"),
    ("COL_IP_Door_A", "stranger dream hotel door collision A"),
    ("COL_IP_Door_B", "stranger dream hotel door collision B"),
    ("ElevatorDestinations", "stranger elevator"),
    ("Prefab_IP_CageElevator", "stranger elevator"),
    ("Sarc_Piece_A", "stranger sarcophagus door A"),
    ("Sarc_Piece_B", "stranger sarcophagus door B"),
    ("SecretMuralPassage", "stranger dream hotel passage mural"),
];

/// Exact bare-name entries applied only in filtered mode
pub(super) const EXACT_NAME_FILTERED: &[(&str, &str)] = &[
    ("Props_NOM_TractorBeam", "tractor beam (ring)"),
    ("BeamVolume", "tractor beam (beam)"),
];

/// Substring entries applied on every toggle
pub(super) const NAME_CONTAINS_ALWAYS: &[(&str, &str)] = &[
    ("Cactus", "all variants and plants on cacti"),
    ("Structure_NOM_RotatingDoor_Panel", "both sided rotating orb door"),
    ("EmergencyHatch", "general emergency hatches"),
    ("SecretPassage", "stranger home world mural secret passage"),
];

/// Name fragments that disqualify an object from the broad spatial scan
///
/// The host keeps tens of thousands of live nodes (UI widgets, player rig
/// parts, effect emitters); any raw name containing one of these fragments is
/// skipped before distance computation.
pub(super) const EXCLUDED_NAME_FRAGMENTS: &str =
    concat!(
        "LeftArrow,LabelBG,Top,ScreenPrompt,CommandImage,Text,Scroll View,Viewport,",
        "HorizontalLayoutGroup,Checkbox,Box,ScreenPromptListBottomLeft,Arm_M_pivot,",
        "Root,HelmetElectricalArc_3,Props_HEA_Probe_Prelaunch,ThrusterWash,DownImage,",
        "GlassBorder,ScanLightVolume4,Effects_NOM_OrbitHologram_Large,",
        "OPC_WingPiece_Tip_02_SunkenModule_Hologram,Reticule1,NomaiTranslatorProp,",
        "RightBubbles,Effects_HEA_MarshmallowFlames,Arrow1Pivot,",
        "UnderwaterEffectBubble,ScanProjector1,QuantumFogEffectBubble,",
        "Effects_NOM_OrbitalProbeCannon_Hologram,DataParticles,",
        "Effects_IP_Z4RaftHouseSplash3,SafetyCollider,GiantsDeepRoot,Sliding,",
        "EyeCoords,PlayerFootstep_Dirt,FlashlightRoot,HUD_HelmetCracks,giantsDeep,",
        "Flashlight_BasePivot,OPC_Cannon_Mid_Hologram,LeftImage,",
        "Props_HEA_ProbeLauncher_ProbeCamera,Props_HEA_Translator_RotatingPart,",
        "ToolHoldTransform,ScrollSocket,Slides_Front,Effects_IP_Z4RaftHouseSplash2,",
        "Scrollbar,Effects_HEA_ThrusterFlame,Props_HEA_Translator_Button_R,",
        "TextWarningBlock,ScaleAndRotate,Effects_NOM_HologramDrips,ScreenPromptList,",
        "RecallEffect,LockOnGUI,HelmetVisorMaskRenderer,CommandImage,",
        "FogWarpEffectBubble,Props_NOM_SmallTractorBeam_Geo,ToolModeUI,",
        "HelmetUVRenderer,HelmetFrame,Reticule2,Bottom,RotBuildingSplash_8,",
        "Props_HEA_ProbeLauncher,CanvasMarker,",
        "OPC_WingPiece_Mid_02_SunkenModule_Hologram,PlayerFootstep_None,",
        "Props_HEA_Translator_Prepass,ProbeLauncher,Scarf,HelmetRoot,",
        "HorizontalLayoutGroup,Props_HEA_Flashlight_FrontHeadlight,",
        "BackwardRightThrust,DreamEyeMask,Mallow_Root,TranslatorGroup,",
        "LaunchParticleEffect_Underwater,OPC_Module_Sunken_Hologram,ThrusterLight,",
        "OPC_WingPiece_Mid_01_SunkenModule_Hologram,ProbeLauncherChassis,",
        "VesselCoreSocket,ForwardRightBubbles,ItemSocket,ScreenPrompt,Scroll,",
        "Props_NOM_SmallTractorBeam_Anchor,DownThrust,HelmetRainDroplets,Content,",
        "ScanLightVolume5,Effects_NOM_ProbeHologram,BackwardLeftBubbles,LockOnCircle,",
        "Stick_Tip,OffScreenIndicator,HelmetVisorUVRenderer,HelmetRainStreaks,",
        "Frame_Whole,ImageBlock,OPC_Cannon_Tip_Hologram,Frame_8,",
        "Props_HEA_Translator_Button_L,CameraDetector,Effects_HEA_AirLeak,Probe,",
        "HelmetVisorEffects,SimpleLanternSocket,ThrusterWash_Default,",
        "ScanLightVolume3,Traveller_Mesh_v01,WarpCoreSocket,HelmetElectricalArc_2,",
        "BakedTerrain_Proxy_QPolePath_4_Baked,ToolStowTransform,Stick_Pivot,",
        "ProbeLauncherTransform,TextInfoBlock,Arm_S_pivot,FogWarpMarker,",
        "PointLight_HEA_TranslatorBulb,Props_HEA_Signalscope,",
        "Props_HEA_Probe_Prelaunch_Prepass,Hologram_AllProbeTrajectories,",
        "TranslatorBeams,HelmetOffLockOn,LineX,PlayerFootstep_Snow,DataStream,",
        "ScreenEffects,HUD_CurvedSurface,PageNumberText,RightThrust,",
        "VisionTorchSocket,BakedTerrain_VM_Proxy_Base,Top,Canvas,ForwardLeftThrust,",
        "ScanProjector2,LaunchParticleEffect,Props_HEA_Translator,ScanProjector4,",
        "player_mesh_noSuit,PressureGauge_Arrow,CanvasMarkerManager,ScanProjector5,",
        "RingCircle,Ring,UniverseLibCanvas,ScanLightVolume2,ForwardLeftBubbles,",
        "TranslatorScanBeam3,ShadowProjector,OPC_Base_Hologram,",
        "AttachPointWarningBlock,Props_HEA_Translator_Screen,",
        "PointLight_HEA_TranslatorButtonLeft,LineY,Flashlight_WobblePivot,",
        "Props_HEA_Translator_Pivot_RotatingPart,RoastingStick_Arm_NoSuit,Lines,",
        "ScanLightVolume1,LeftThrust,ScaleRoot,Handle,Bracket,TranslatorScanBeam1,",
        "Arm_L_pivot,LighthouseSplash_2,Props_HEA_RoastingStick,MallowSmoke,",
        "Slides_Back,preLaunchCamera,BackwardRightBubbles,Traveller_HEA_Player_v2,",
        "VesselCoreStowTransform,Stick_Root,LightFlickerEffectBubble,",
        "Flashlight_WobblePivot_OldTransforms,Effects_IP_LighthouseSplash,",
        "PointLight_HEA_TranslatorBulb2,TextScaleRoot,SingularityEffectAmbientAudio,",
        "RoastingStick_Stick,PointLight_HEA_TranslatorButtonRight,ArrowPivot,Arrow,",
        "HelmetMesh,Traveller_Rig_v01,ItemCarryTool,HUD_Helmet_v2,NebulaParticles,",
        "Frame_7,Background,RightImage,Exclamation,Text,SharedStoneSocket,",
        "Flashlight_SpotLight,Frame_6,ImageWarningBlock,RotBuildingSplash_9,",
        "CloudsEffectBubble,TranslatorScanBeam4,ScanProjector3,SlideReelSocket,",
        "FullTextBlock,SingularityEffectOneShotAudio,Arrows,ForwardRightThrust,",
        "Props_HEA_Flashlight_Geo,Props_HEA_Signalscope_Prepass,TranslatorText,",
        "HelmetElectricalArc_1,LeftBubbles,UpThrust,AttachPointInfoBlock,UpBubbles,",
        "Props_HEA_Flashlight,DreamLanternSocket,WarningBlock,TranslatorScanBeam2,",
        "CenteringPivot,Lighting,Cannon_Pivot,Viewport,LighthouseSplash_4,",
        "Props_HEA_Translator_Geo,Effects_IP_Z4RaftHouseSplash4,",
        "Props_HEA_Marshmallow,HighlightBracket,DarkMatterBubble,DownBubbles,",
        "Props_HEA_Translator_RotatingPart_Prepass,AmbientLight_EyeHologram,",
        "Signalscope,Flashlight_FillLight,SandEffectBubble,",
        "BakedTerrain_Proxy_Frag_23_Baked,GlassScreen,Helmet,TranslatorScanBeam5,",
        "HUDController,UpImage,RoastingSystem,PlayerCamera,BackwardLeftThrust,",
        "RoastingStick_Arm,Props_HEA_ProbeLauncher_Prepass",
    );
