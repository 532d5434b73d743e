//! Registry snapshots and the resource that owns the live one.
//!
//! The registry is an immutable tree snapshot: an arena of bodies indexed
//! by id, with children stored as ordered id-lists. Edits never mutate a
//! snapshot in place; they produce a new snapshot which replaces the old
//! one wholesale, so every frame reads one consistent view.

use anyhow::{Result, bail};
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::galaxy::body::{BodyId, CelestialBody, Star};

/// One consistent view of the star system: the fixed central star plus the
/// editable planet/satellite tree (depth is capped at star -> planet ->
/// satellite).
#[derive(Clone, Debug)]
pub struct GalaxySnapshot {
    pub(crate) star: Star,
    pub(crate) bodies: HashMap<BodyId, CelestialBody>,
    pub(crate) planets: Vec<BodyId>,
}

impl GalaxySnapshot {
    pub fn new(star: Star) -> Self {
        Self {
            star,
            bodies: HashMap::new(),
            planets: Vec::new(),
        }
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn get(&self, id: &BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id)
    }

    /// True for the star as well as any planet or satellite.
    pub fn contains(&self, id: &BodyId) -> bool {
        self.star.id == *id || self.bodies.contains_key(id)
    }

    pub fn is_planet(&self, id: &BodyId) -> bool {
        self.planets.contains(id)
    }

    /// Root body ids in display order.
    pub fn planet_ids(&self) -> &[BodyId] {
        &self.planets
    }

    pub fn planets(&self) -> impl Iterator<Item = &CelestialBody> {
        self.planets.iter().filter_map(|id| self.bodies.get(id))
    }

    pub fn satellites_of<'a>(
        &'a self,
        planet: &'a CelestialBody,
    ) -> impl Iterator<Item = &'a CelestialBody> {
        planet.satellites.iter().filter_map(|id| self.bodies.get(id))
    }

    /// Number of orbiting bodies (planets plus satellites), star excluded.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// The planet a satellite belongs to; `None` for planets and unknown ids.
    pub fn parent_of(&self, id: &BodyId) -> Option<&BodyId> {
        self.planets
            .iter()
            .filter_map(|pid| self.bodies.get(pid))
            .find(|planet| planet.satellites.contains(id))
            .map(|planet| &planet.id)
    }

    /// Check the structural invariants the editing operations rely on:
    /// unique ids (star included), no dangling or shared child references,
    /// satellites carrying no children of their own, positive sizes and
    /// non-negative orbit radii.
    pub fn validate(&self) -> Result<()> {
        if self.bodies.contains_key(&self.star.id) {
            bail!("body id {} collides with the star", self.star.id);
        }
        if self.star.size <= 0.0 {
            bail!("star size must be positive, got {}", self.star.size);
        }

        let mut seen: HashSet<&BodyId> = HashSet::new();
        for planet_id in &self.planets {
            let Some(planet) = self.bodies.get(planet_id) else {
                bail!("planet id {planet_id} is not in the registry");
            };
            if !seen.insert(planet_id) {
                bail!("body {planet_id} is owned by more than one parent");
            }
            for satellite_id in &planet.satellites {
                let Some(satellite) = self.bodies.get(satellite_id) else {
                    bail!("satellite id {satellite_id} is not in the registry");
                };
                if !seen.insert(satellite_id) {
                    bail!("body {satellite_id} is owned by more than one parent");
                }
                if !satellite.satellites.is_empty() {
                    bail!("satellite {satellite_id} cannot carry satellites of its own");
                }
            }
        }
        if seen.len() != self.bodies.len() {
            bail!("registry contains bodies reachable from no planet");
        }

        for (id, body) in &self.bodies {
            if body.id != *id {
                bail!("body {} is stored under id {id}", body.id);
            }
            if body.size <= 0.0 {
                bail!("body {id} size must be positive, got {}", body.size);
            }
            if body.orbit_radius < 0.0 {
                bail!(
                    "body {id} orbit radius must be non-negative, got {}",
                    body.orbit_radius
                );
            }
        }
        Ok(())
    }
}

/// Resource owning the live snapshot. The engine reads it every frame; the
/// editing collaborator swaps it wholesale via [`GalaxyRegistry::replace`],
/// and the scene sync reacts to the generation counter on the next frame.
#[derive(Resource)]
pub struct GalaxyRegistry {
    snapshot: Arc<GalaxySnapshot>,
    generation: u64,
}

impl GalaxyRegistry {
    pub fn new(snapshot: GalaxySnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            generation: 0,
        }
    }

    pub fn snapshot(&self) -> &GalaxySnapshot {
        &self.snapshot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Install a new snapshot. Takes effect on the very next frame; the old
    /// snapshot stays alive until the last reader drops it.
    pub fn replace(&mut self, snapshot: GalaxySnapshot) {
        self.snapshot = Arc::new(snapshot);
        self.generation += 1;
        info!(
            "galaxy registry replaced: {} bodies (generation {})",
            self.snapshot.body_count(),
            self.generation
        );
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub fn star() -> Star {
        Star {
            id: BodyId::from("sol"),
            name: "Sol".to_string(),
            description: "The star at the center.".to_string(),
            fun_fact: "It is mostly hydrogen.".to_string(),
            size: 1.5,
            color: [0.99, 0.72, 0.07],
        }
    }

    pub fn body(id: &str, orbit_radius: f32, orbit_speed: f32) -> CelestialBody {
        CelestialBody {
            id: BodyId::from(id),
            name: id.to_string(),
            description: format!("{id} description"),
            fun_fact: format!("{id} fun fact"),
            size: 0.5,
            color: [0.4, 0.6, 0.8],
            orbit_radius,
            orbit_speed,
            satellites: Vec::new(),
        }
    }

    /// Star plus one planet (r=6, w=0.4) with one satellite (r=0.8, w=2.0),
    /// the concrete scenario used across the composer tests.
    pub fn planet_with_moon() -> GalaxySnapshot {
        let mut snapshot = GalaxySnapshot::new(star());
        let mut planet = body("terra", 6.0, 0.4);
        planet.satellites.push(BodyId::from("luna"));
        let moon = body("luna", 0.8, 2.0);
        snapshot.planets.push(planet.id.clone());
        snapshot.bodies.insert(planet.id.clone(), planet);
        snapshot.bodies.insert(moon.id.clone(), moon);
        snapshot
    }
}
