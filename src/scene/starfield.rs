//! Background starfield.
//!
//! A single point-list mesh of a few thousand unlit points scattered over
//! a spherical shell well outside the orbits. Purely decorative; it is
//! invisible to picking.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;

pub const STARFIELD_RADIUS: f32 = 100.0;
pub const STARFIELD_DEPTH: f32 = 50.0;
const STAR_COUNT: usize = 5000;

/// System: spawn the starfield once at startup.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = build_starfield_mesh(STAR_COUNT, &mut rand::thread_rng());
    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Pickable::IGNORE,
        Name::new("Starfield"),
    ));
}

fn build_starfield_mesh(count: usize, rng: &mut impl Rng) -> Mesh {
    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);
    let mut uvs = Vec::with_capacity(count);

    for _ in 0..count {
        // Uniform direction on the unit sphere, pushed out to the shell.
        let y: f32 = rng.gen_range(-1.0..=1.0);
        let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let ring = (1.0 - y * y).max(0.0).sqrt();
        let direction = Vec3::new(ring * theta.cos(), y, ring * theta.sin());
        let radius = rng.gen_range(STARFIELD_RADIUS..STARFIELD_RADIUS + STARFIELD_DEPTH);

        positions.push(direction * radius);
        normals.push(direction);
        uvs.push([0.0, 0.0]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_starfield_points_stay_on_the_shell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mesh = build_starfield_mesh(512, &mut rng);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("starfield mesh has no positions");
        };
        assert_eq!(positions.len(), 512);
        for p in positions {
            let distance = Vec3::from_array(*p).length();
            assert!(
                (STARFIELD_RADIUS - 1e-3..=STARFIELD_RADIUS + STARFIELD_DEPTH + 1e-3)
                    .contains(&distance),
                "star at distance {distance}"
            );
        }
    }
}
