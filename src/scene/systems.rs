//! Scene sync and per-frame transform updates.

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::galaxy::{CelestialBody, GalaxyRegistry, Star};
use crate::interaction::{on_body_click, on_body_out, on_body_over};
use crate::orbital::SimulationClock;
use crate::scene::composer::{SatelliteOrbitFrom, compose_frame};
use crate::scene::BodyRef;

/// Marker for every entity the registry sync owns, so a replace can sweep
/// the whole previous generation in one pass.
#[derive(Component)]
pub struct GalaxySceneEntity;

/// Which registry generation the spawned entities correspond to.
#[derive(Resource, Default)]
pub struct SceneSyncState {
    pub synced_generation: Option<u64>,
}

/// System: rebuild the body entities whenever the registry snapshot was
/// replaced. Observers are attached here, once per replace, so pointer
/// dispatch stays stable between edits instead of being rebuilt per frame.
pub fn sync_galaxy_scene(
    mut commands: Commands,
    registry: Res<GalaxyRegistry>,
    mut state: ResMut<SceneSyncState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<GalaxySceneEntity>>,
) {
    if state.synced_generation == Some(registry.generation()) {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let snapshot = registry.snapshot();
    spawn_star(&mut commands, &mut meshes, &mut materials, snapshot.star());
    for planet in snapshot.planets() {
        spawn_body(&mut commands, &mut meshes, &mut materials, planet, false);
        for satellite in snapshot.satellites_of(planet) {
            spawn_body(&mut commands, &mut meshes, &mut materials, satellite, true);
        }
    }

    state.synced_generation = Some(registry.generation());
}

/// System: write the composed world transforms onto the body entities.
/// Entities whose id fell out of the snapshot are left untouched; they are
/// at most one frame away from despawn.
pub fn update_body_transforms(
    registry: Res<GalaxyRegistry>,
    clock: Res<SimulationClock>,
    satellite_from: Res<SatelliteOrbitFrom>,
    mut bodies: Query<(&BodyRef, &mut Transform), With<GalaxySceneEntity>>,
) {
    let transforms = compose_frame(registry.snapshot(), clock.elapsed(), *satellite_from);
    for (body_ref, mut transform) in bodies.iter_mut() {
        if let Some(world) = transforms.get(&body_ref.0) {
            *transform = *world;
        }
    }
}

fn spawn_star(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    star: &Star,
) {
    let color = star.color();
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(star.size).mesh().ico(4).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * 4.0,
                unlit: true,
                ..default()
            })),
            Transform::default(),
            BodyRef(star.id.clone()),
            GalaxySceneEntity,
            Name::new(star.name.clone()),
        ))
        .observe(on_body_click)
        .observe(on_body_over)
        .observe(on_body_out)
        .with_children(|parent| {
            parent.spawn(glow_shell(meshes, materials, star.size, 1.3, color, 0.3));
            // Outer corona picks up a warmer tint than the star itself.
            let corona = Color::srgb(1.0, 0.42, 0.208);
            parent.spawn(glow_shell(meshes, materials, star.size, 1.6, corona, 0.1));
        });
}

fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    body: &CelestialBody,
    is_satellite: bool,
) {
    let color = body.color();
    let (roughness, metallic, emissive) = if is_satellite {
        (0.8, 0.2, 0.1)
    } else {
        (0.7, 0.3, 0.2)
    };
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(body.size).mesh().ico(4).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * emissive,
                perceptual_roughness: roughness,
                metallic,
                ..default()
            })),
            Transform::default(),
            BodyRef(body.id.clone()),
            GalaxySceneEntity,
            Name::new(body.name.clone()),
        ))
        .observe(on_body_click)
        .observe(on_body_over)
        .observe(on_body_out)
        .with_children(|parent| {
            parent.spawn(glow_shell(meshes, materials, body.size, 1.2, color, 0.1));
        });
}

/// Translucent halo around a body. Ignored by picking so clicks fall
/// through to the body itself.
fn glow_shell(
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    radius: f32,
    scale: f32,
    color: Color,
    alpha: f32,
) -> impl Bundle {
    (
        Mesh3d(meshes.add(Sphere::new(radius).mesh().ico(3).unwrap())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color.with_alpha(alpha),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(scale)),
        Pickable::IGNORE,
    )
}
