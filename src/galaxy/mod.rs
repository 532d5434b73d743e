//! Celestial body registry
//!
//! The in-memory set of bodies the engine renders: data types, immutable
//! snapshots, editing operations and the embedded seed set. The engine
//! never creates or destroys bodies; it re-reads the live snapshot each
//! frame and picks up wholesale replacements on the next one.

pub mod body;
pub mod editor;
pub mod registry;
pub mod seed;

pub use body::{BodyId, CelestialBody, Star};
pub use registry::{GalaxyRegistry, GalaxySnapshot};
pub use seed::seed_galaxy;
