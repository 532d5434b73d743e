use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod galaxy;
mod interaction;
mod orbital;
mod scene;
mod ui;

use galaxy::GalaxyRegistry;
use interaction::InteractionPlugin;
use orbital::OrbitalPlugin;
use scene::GalaxyScenePlugin;
use ui::UiPlugin;

fn main() -> anyhow::Result<()> {
    // A broken seed is a startup error, not something the engine papers
    // over at runtime.
    let seed = galaxy::seed_galaxy()?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Live Galaxy".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.insert_resource(GalaxyRegistry::new(seed));
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(GalaxyScenePlugin);
    app.add_plugins(InteractionPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
    Ok(())
}

/// Setup camera and lights around the system origin.
fn setup(mut commands: Commands) {
    // Keep bodies readable even on the side facing away from the fill
    // lights.
    commands.insert_resource(GlobalAmbientLight {
        brightness: 80.0,
        ..default()
    });

    let initial_distance = 15.0;
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(initial_distance),
        yaw: Some(0.0),
        pitch: Some(0.3),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 500.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 4.5, initial_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Two tinted fill lights, one on each side of the system.
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            color: Color::srgb(0.0, 1.0, 1.0),
            range: 250.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
    commands.spawn((
        PointLight {
            intensity: 1_200_000.0,
            color: Color::srgb(1.0, 0.0, 1.0),
            range: 250.0,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));
}
