//! Celestial body types shared by the registry, composer and UI.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a body, unique across the whole registry
/// (star, planets and satellites combined). Selection and editing
/// address bodies by id alone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// An orbiting body. Whether it is a planet or a satellite is positional
/// (root-level vs nested under a planet), not a tag in the data.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    pub description: String,
    pub fun_fact: String,
    /// Render radius.
    pub size: f32,
    /// sRGB triple, used for both the material and the glow shell.
    pub color: [f32; 3],
    /// Distance from the parent's center (planets) or surface (satellites,
    /// under the default convention).
    pub orbit_radius: f32,
    /// Signed angular rate in radians per simulation second; zero means
    /// the body stays at its start angle.
    pub orbit_speed: f32,
    /// Ordered child ids; insertion order is display order.
    pub satellites: Vec<BodyId>,
}

impl CelestialBody {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }
}

/// The central star. Fixed singleton: present in every snapshot by
/// construction and not reachable through the editing operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: BodyId,
    pub name: String,
    pub description: String,
    pub fun_fact: String,
    pub size: f32,
    pub color: [f32; 3],
}

impl Star {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_id_display_matches_inner() {
        let id = BodyId::from("earth");
        assert_eq!(id.to_string(), "earth");
        assert_eq!(id.as_str(), "earth");
    }

    #[test]
    fn test_body_color_conversion() {
        let body = CelestialBody {
            id: BodyId::from("x"),
            name: "X".to_string(),
            description: String::new(),
            fun_fact: String::new(),
            size: 1.0,
            color: [1.0, 0.5, 0.0],
            orbit_radius: 2.0,
            orbit_speed: 0.1,
            satellites: Vec::new(),
        };
        let srgba = body.color().to_srgba();
        assert!((srgba.red - 1.0).abs() < 1e-6);
        assert!((srgba.green - 0.5).abs() < 1e-6);
        assert!((srgba.blue - 0.0).abs() < 1e-6);
    }
}
