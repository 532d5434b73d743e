//! Editing operations on registry snapshots.
//!
//! Every operation takes the current snapshot, clones it, applies one
//! change and re-validates, so the caller always holds either the old
//! snapshot or a fully consistent new one to pass to
//! [`GalaxyRegistry::replace`](crate::galaxy::GalaxyRegistry::replace).

use anyhow::{Result, bail};

use crate::galaxy::body::{BodyId, CelestialBody};
use crate::galaxy::registry::GalaxySnapshot;

/// Append a new planet at the end of the display order.
pub fn add_planet(snapshot: &GalaxySnapshot, body: CelestialBody) -> Result<GalaxySnapshot> {
    if snapshot.contains(&body.id) {
        bail!("body id {} already exists", body.id);
    }
    if !body.satellites.is_empty() {
        bail!("new planets start without satellites; add them individually");
    }
    let mut next = snapshot.clone();
    next.planets.push(body.id.clone());
    next.bodies.insert(body.id.clone(), body);
    next.validate()?;
    Ok(next)
}

/// Append a new satellite to an existing planet. Satellites cannot parent
/// further bodies, which keeps the tree at star -> planet -> satellite.
pub fn add_satellite(
    snapshot: &GalaxySnapshot,
    planet_id: &BodyId,
    body: CelestialBody,
) -> Result<GalaxySnapshot> {
    if snapshot.contains(&body.id) {
        bail!("body id {} already exists", body.id);
    }
    if !body.satellites.is_empty() {
        bail!("satellites cannot carry satellites of their own");
    }
    if !snapshot.is_planet(planet_id) {
        bail!("{planet_id} is not a planet in the registry");
    }
    let mut next = snapshot.clone();
    let Some(planet) = next.bodies.get_mut(planet_id) else {
        bail!("{planet_id} is not in the registry");
    };
    planet.satellites.push(body.id.clone());
    next.bodies.insert(body.id.clone(), body);
    next.validate()?;
    Ok(next)
}

/// Replace the stored value for an existing body. The id and the position
/// in the tree are kept; orbital parameters are replaced outright, never
/// mutated incrementally.
pub fn update_body(snapshot: &GalaxySnapshot, body: CelestialBody) -> Result<GalaxySnapshot> {
    let Some(current) = snapshot.get(&body.id) else {
        bail!("body id {} is not in the registry", body.id);
    };
    if body.satellites != current.satellites {
        bail!("updates cannot rewrite the satellite list; add or remove satellites instead");
    }
    let mut next = snapshot.clone();
    next.bodies.insert(body.id.clone(), body);
    next.validate()?;
    Ok(next)
}

/// Remove a planet (together with its satellites) or a single satellite.
pub fn remove_body(snapshot: &GalaxySnapshot, id: &BodyId) -> Result<GalaxySnapshot> {
    if !snapshot.bodies.contains_key(id) {
        bail!("body id {id} is not in the registry");
    }
    let mut next = snapshot.clone();
    if let Some(index) = next.planets.iter().position(|p| p == id) {
        next.planets.remove(index);
        if let Some(planet) = next.bodies.remove(id) {
            for satellite_id in &planet.satellites {
                next.bodies.remove(satellite_id);
            }
        }
    } else {
        let Some(parent_id) = next.parent_of(id).cloned() else {
            bail!("body {id} has no parent in the registry");
        };
        if let Some(planet) = next.bodies.get_mut(&parent_id) {
            planet.satellites.retain(|s| s != id);
        }
        next.bodies.remove(id);
    }
    next.validate()?;
    Ok(next)
}
