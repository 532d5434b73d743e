//! Per-frame composition of world transforms.
//!
//! Walks the registry snapshot star -> planet -> satellite and composes
//! each body's local orbit with its parent's frame. Nothing is cached
//! across frames; the walk is O(bodies) and runs fresh against the live
//! clock every tick.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::galaxy::{BodyId, GalaxySnapshot};
use crate::orbital::{PLANET_SPIN_RATE, SATELLITE_SPIN_RATE, STAR_SPIN_RATE, evaluate};

/// Where a satellite's orbit radius is measured from. The surface-relative
/// convention keeps satellites clear of their planet's body whatever its
/// size; center-relative is the plain reading of the radius.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SatelliteOrbitFrom {
    #[default]
    Surface,
    Center,
}

/// Compose the world transform of every body at the given simulation time.
///
/// The star sits at the origin carrying only its spin. A planet's frame is
/// its orbit around the star; a satellite's frame composes the planet's
/// orbit rotation with its own, so its world angular rate is the sum of
/// both. Self-spin lands only in the rendered rotation of the body itself,
/// never in a child's frame.
pub fn compose_frame(
    snapshot: &GalaxySnapshot,
    elapsed: f32,
    satellite_from: SatelliteOrbitFrom,
) -> HashMap<BodyId, Transform> {
    let mut transforms = HashMap::with_capacity(snapshot.body_count() + 1);

    let star = snapshot.star();
    let star_spin = evaluate(0.0, 0.0, STAR_SPIN_RATE, elapsed).spin;
    transforms.insert(star.id.clone(), Transform::from_rotation(star_spin));

    for planet in snapshot.planets() {
        let orbit = evaluate(
            planet.orbit_radius,
            planet.orbit_speed,
            PLANET_SPIN_RATE,
            elapsed,
        );
        let planet_frame = orbit.to_transform();
        transforms.insert(
            planet.id.clone(),
            Transform {
                rotation: planet_frame.rotation * orbit.spin,
                ..planet_frame
            },
        );

        for satellite in snapshot.satellites_of(planet) {
            let bias = match satellite_from {
                SatelliteOrbitFrom::Surface => planet.size,
                SatelliteOrbitFrom::Center => 0.0,
            };
            let local = evaluate(
                bias + satellite.orbit_radius,
                satellite.orbit_speed,
                SATELLITE_SPIN_RATE,
                elapsed,
            );
            let world = planet_frame * local.to_transform();
            transforms.insert(
                satellite.id.clone(),
                Transform {
                    rotation: world.rotation * local.spin,
                    ..world
                },
            );
        }
    }

    transforms
}
