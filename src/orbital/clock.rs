//! The simulation clock driving all orbital motion.

use bevy::prelude::*;

/// Monotonic elapsed simulation time, in seconds. Starts at zero when the
/// app launches, is never reset or rewound, and only advances while the
/// render loop ticks. All orbital math takes this value as an explicit
/// input, so tests can inject any instant they like.
#[derive(Resource)]
pub struct SimulationClock {
    elapsed: f32,
    /// Multiplier applied to wall-clock deltas. 1.0 is real time.
    pub time_scale: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            time_scale: 1.0,
        }
    }
}

impl SimulationClock {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance by a frame delta. Negative deltas are ignored so the clock
    /// stays monotonic whatever the caller hands in.
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += (delta * self.time_scale).max(0.0);
    }
}

/// System: advance the simulation clock once per frame.
pub fn advance_simulation_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.advance(time.delta_secs());
}
