//! Orbital mechanics module
//!
//! Owns the simulation clock and the pure transform evaluator the scene
//! composer builds on.

use bevy::prelude::*;

pub mod clock;
pub mod evaluator;

pub use clock::{SimulationClock, advance_simulation_clock};
pub use evaluator::{
    LocalOrbit, PLANET_SPIN_RATE, SATELLITE_SPIN_RATE, STAR_SPIN_RATE, evaluate,
};

/// Plugin for the simulation clock.
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_simulation_clock);
    }
}
