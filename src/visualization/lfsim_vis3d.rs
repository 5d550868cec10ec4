use bevy::prelude::*;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::params::SimulationParams;
use crate::simulation::scenario::Scenario;
use crate::visualization::camera::{CameraState, Viewport};
use crate::visualization::canvas::{screen_to_world, tessellate, CanvasBuffers};
use crate::visualization::controls::{command_for_key, Command};
use crate::visualization::hud::hud_text;
use crate::visualization::scene::{compose_frame, AXIS_X, AXIS_Y, AXIS_Z};

/// Parameter source slot: written by the controls, read once per frame by physics
#[derive(Resource)]
struct ParamSlot(SimulationParams);

/// View angles and zoom, owned by the input systems
#[derive(Resource)]
struct OrbitCamera(CameraState);

/// Reused tessellation buffers
#[derive(Resource, Default)]
struct CanvasScratch(CanvasBuffers);

/// Tags the single mesh the frame is painted into
#[derive(Component)]
struct CanvasMesh;

#[derive(Component)]
struct AxisLabel(&'static str);

#[derive(Component)]
struct HudText;

/// Window size used before the first frame knows better
const INITIAL_SIZE: (f32, f32) = (1280.0, 800.0);

/// Pixels of scroll treated as one wheel notch
const PIXELS_PER_NOTCH: f64 = 40.0;

/// Open the viewer and run the frame loop until the window closes
pub fn run_3d(scenario: Scenario) {
    let params = *scenario.simulation.params();
    let camera = scenario.camera;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ParamSlot(params))
        .insert_resource(OrbitCamera(camera))
        .init_resource::<CanvasScratch>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "lfsim: charged particle in a uniform magnetic field".into(),
                resolution: INITIAL_SIZE.into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_canvas)
        .add_systems(
            Update,
            (keyboard_controls, camera_controls, physics_step, paint_frame, update_hud).chain(),
        )
        .run();
}

/// Startup system: 2D camera, the canvas mesh, axis labels and the HUD
fn setup_canvas(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut scratch: ResMut<CanvasScratch>,
    scenario: Res<Scenario>,
    camera: Res<OrbitCamera>,
) {
    let sim = &scenario.simulation;
    info!(
        "lfsim: m = {}, q = {}, dt = {}, trail {} points, domain ±{}",
        sim.params().mass,
        sim.params().charge,
        sim.engine.dt,
        sim.engine.history_capacity,
        sim.engine.domain_limit
    );

    commands.spawn(Camera2dBundle::default());

    // first frame at the initial size so the mesh is never empty
    let viewport = Viewport::new(INITIAL_SIZE.0 as f64, INITIAL_SIZE.1 as f64);
    let frame = compose_frame(sim.state(), sim.params(), &camera.0, &viewport);
    tessellate(&frame, &mut scratch.0);

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    upload(&mut mesh, &scratch.0);

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(mesh)),
            material: materials.add(ColorMaterial::from(Color::WHITE)),
            ..Default::default()
        },
        // vertices move every frame, the initial bounds mean nothing
        NoFrustumCulling,
        CanvasMesh,
    ));

    for (text, color) in [("X", AXIS_X), ("Y", AXIS_Y), ("Z", AXIS_Z)] {
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    text,
                    TextStyle {
                        font_size: 18.0,
                        color: Color::from(Srgba { alpha: 1.0, ..color }),
                        ..default()
                    },
                ),
                transform: Transform::from_xyz(0.0, 0.0, 1.0),
                visibility: Visibility::Hidden,
                ..default()
            },
            AxisLabel(text),
        ));
    }

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 15.0,
                color: Color::srgb(0.85, 0.88, 0.95),
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            max_width: Val::Px(380.0),
            ..default()
        }),
        HudText,
    ));
}

/// Playback keys and parameter edits
fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut slot: ResMut<ParamSlot>,
) {
    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    for key in keys.get_just_pressed() {
        match command_for_key(*key, shift) {
            Some(Command::TogglePlay) => {
                let playing = scenario.simulation.toggle();
                info!("playback {}", if playing { "started" } else { "paused" });
            }
            Some(Command::Reset) => {
                scenario.simulation.reset();
                info!("simulation reset");
            }
            Some(Command::Edit(edit)) => match slot.0.apply(edit) {
                Ok(next) => slot.0 = next,
                Err(e) => warn!("ignoring {:?}: {e}", edit.target),
            },
            None => {}
        }
    }
}

/// Left-drag rotates, wheel zooms
fn camera_controls(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut camera: ResMut<OrbitCamera>,
) {
    let dragging = mouse.pressed(MouseButton::Left);
    for ev in motion.read() {
        if dragging {
            camera.0.drag(ev.delta.x as f64, ev.delta.y as f64);
        }
    }

    for ev in wheel.read() {
        let notches = match ev.unit {
            MouseScrollUnit::Line => ev.y as f64,
            MouseScrollUnit::Pixel => ev.y as f64 / PIXELS_PER_NOTCH,
        };
        camera.0.wheel(notches);
    }
}

/// Per-frame physics: pick up parameter changes, then at most one RK4 step
fn physics_step(mut scenario: ResMut<Scenario>, slot: Res<ParamSlot>) {
    let sim = &mut scenario.simulation;

    if slot.is_changed() {
        if let Err(e) = sim.sync_params(&slot.0) {
            warn!("parameters rejected: {e}");
        }
    }

    // a halt is logged by the engine and stops playback before the next frame
    sim.tick();
}

/// Compose the frame and push it into the canvas mesh and labels
fn paint_frame(
    scenario: Res<Scenario>,
    camera: Res<OrbitCamera>,
    windows: Query<&Window, With<PrimaryWindow>>,
    canvas: Query<&Mesh2dHandle, With<CanvasMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut scratch: ResMut<CanvasScratch>,
    mut labels: Query<(&AxisLabel, &mut Transform, &mut Visibility)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Viewport::new(window.width() as f64, window.height() as f64);
    // minimized
    if viewport.width < 1.0 || viewport.height < 1.0 {
        return;
    }

    let sim = &scenario.simulation;
    let frame = compose_frame(sim.state(), sim.params(), &camera.0, &viewport);
    tessellate(&frame, &mut scratch.0);

    for handle in &canvas {
        if let Some(mesh) = meshes.get_mut(&handle.0) {
            upload(mesh, &scratch.0);
        }
    }

    for (AxisLabel(text), mut transform, mut visibility) in &mut labels {
        match frame.labels.iter().find(|l| l.text == *text) {
            Some(label) => {
                let [x, y] = screen_to_world(&label.at, &viewport);
                transform.translation = Vec3::new(x, y, 1.0);
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn update_hud(scenario: Res<Scenario>, mut hud: Query<&mut Text, With<HudText>>) {
    for mut text in &mut hud {
        if let Some(section) = text.sections.first_mut() {
            section.value = hud_text(&scenario.simulation);
        }
    }
}

fn upload(mesh: &mut Mesh, buffers: &CanvasBuffers) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, buffers.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, buffers.colors.clone());
    mesh.insert_indices(Indices::U32(buffers.indices.clone()));
}
