//! The embedded seed galaxy.
//!
//! The application starts from a fixed body set, shipped as JSON next to
//! the other assets and parsed once at startup. The wire format nests
//! satellites inside their planet; the snapshot flattens that into the
//! arena-with-id-lists form the engine reads.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::galaxy::body::{BodyId, CelestialBody, Star};
use crate::galaxy::registry::GalaxySnapshot;

const SEED_GALAXY_JSON: &str = include_str!("../../assets/galaxy.json");

#[derive(Deserialize)]
struct SeedStar {
    id: BodyId,
    name: String,
    description: String,
    fun_fact: String,
    size: f32,
    color: [f32; 3],
}

#[derive(Deserialize)]
struct SeedBody {
    id: BodyId,
    name: String,
    description: String,
    fun_fact: String,
    size: f32,
    color: [f32; 3],
    orbit_radius: f32,
    orbit_speed: f32,
    #[serde(default)]
    satellites: Vec<SeedBody>,
}

#[derive(Deserialize)]
struct SeedGalaxy {
    star: SeedStar,
    planets: Vec<SeedBody>,
}

impl SeedBody {
    fn into_parts(self) -> (CelestialBody, Vec<SeedBody>) {
        let body = CelestialBody {
            id: self.id,
            name: self.name,
            description: self.description,
            fun_fact: self.fun_fact,
            size: self.size,
            color: self.color,
            orbit_radius: self.orbit_radius,
            orbit_speed: self.orbit_speed,
            satellites: Vec::new(),
        };
        (body, self.satellites)
    }
}

/// Build the startup snapshot from the embedded seed data.
pub fn seed_galaxy() -> Result<GalaxySnapshot> {
    parse_galaxy(SEED_GALAXY_JSON).context("embedded galaxy seed is invalid")
}

fn parse_galaxy(json: &str) -> Result<GalaxySnapshot> {
    let seed: SeedGalaxy = serde_json::from_str(json).context("malformed galaxy JSON")?;
    let star = Star {
        id: seed.star.id,
        name: seed.star.name,
        description: seed.star.description,
        fun_fact: seed.star.fun_fact,
        size: seed.star.size,
        color: seed.star.color,
    };

    let mut snapshot = GalaxySnapshot::new(star);
    for planet_seed in seed.planets {
        let (mut planet, satellites) = planet_seed.into_parts();
        for satellite_seed in satellites {
            let (satellite, nested) = satellite_seed.into_parts();
            if !nested.is_empty() {
                bail!("satellite {} cannot carry satellites of its own", satellite.id);
            }
            planet.satellites.push(satellite.id.clone());
            if snapshot.bodies.insert(satellite.id.clone(), satellite).is_some() {
                bail!("duplicate body id in seed");
            }
        }
        snapshot.planets.push(planet.id.clone());
        if snapshot.bodies.insert(planet.id.clone(), planet).is_some() {
            bail!("duplicate body id in seed");
        }
    }

    snapshot.validate()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses_and_validates() {
        let snapshot = seed_galaxy().unwrap();
        assert_eq!(snapshot.planet_ids().len(), 6);
        assert_eq!(snapshot.star().id, BodyId::from("sol"));

        let earth = snapshot.get(&BodyId::from("earth")).unwrap();
        assert_eq!(earth.satellites, vec![BodyId::from("luna")]);
        assert!((earth.orbit_radius - 6.0).abs() < f32::EPSILON);
        assert!((earth.orbit_speed - 0.4).abs() < f32::EPSILON);

        let mars = snapshot.get(&BodyId::from("mars")).unwrap();
        assert_eq!(mars.satellites.len(), 2);
    }

    #[test]
    fn test_seed_preserves_planet_display_order() {
        let snapshot = seed_galaxy().unwrap();
        let order: Vec<&str> = snapshot.planet_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(
            order,
            ["mercury", "venus", "earth", "mars", "jupiter", "saturn"]
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_galaxy("{ not json").is_err());
        assert!(parse_galaxy("{}").is_err());
    }

    #[test]
    fn test_parse_rejects_nested_satellites() {
        let json = r#"{
            "star": {"id": "sol", "name": "Sol", "description": "", "fun_fact": "",
                     "size": 1.0, "color": [1.0, 1.0, 1.0]},
            "planets": [{
                "id": "p", "name": "P", "description": "", "fun_fact": "",
                "size": 0.5, "color": [0.5, 0.5, 0.5],
                "orbit_radius": 3.0, "orbit_speed": 0.5,
                "satellites": [{
                    "id": "m", "name": "M", "description": "", "fun_fact": "",
                    "size": 0.1, "color": [0.5, 0.5, 0.5],
                    "orbit_radius": 0.5, "orbit_speed": 1.0,
                    "satellites": [{
                        "id": "mm", "name": "MM", "description": "", "fun_fact": "",
                        "size": 0.05, "color": [0.5, 0.5, 0.5],
                        "orbit_radius": 0.2, "orbit_speed": 1.0
                    }]
                }]
            }]
        }"#;
        assert!(parse_galaxy(json).is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = r#"{
            "star": {"id": "sol", "name": "Sol", "description": "", "fun_fact": "",
                     "size": 1.0, "color": [1.0, 1.0, 1.0]},
            "planets": [
                {"id": "p", "name": "P", "description": "", "fun_fact": "",
                 "size": 0.5, "color": [0.5, 0.5, 0.5],
                 "orbit_radius": 3.0, "orbit_speed": 0.5},
                {"id": "p", "name": "P2", "description": "", "fun_fact": "",
                 "size": 0.5, "color": [0.5, 0.5, 0.5],
                 "orbit_radius": 4.0, "orbit_speed": 0.5}
            ]
        }"#;
        assert!(parse_galaxy(json).is_err());
    }
}
