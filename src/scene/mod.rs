//! Scene module
//!
//! Composes world transforms from the registry each frame and keeps the
//! rendered entity set in sync with the live snapshot.

use bevy::prelude::*;

pub mod composer;
pub mod starfield;
pub mod systems;

pub use composer::{SatelliteOrbitFrom, compose_frame};
pub use systems::{GalaxySceneEntity, SceneSyncState, sync_galaxy_scene, update_body_transforms};

use crate::galaxy::BodyId;
use crate::orbital::advance_simulation_clock;

/// Component tying a rendered entity back to the body it draws.
#[derive(Component)]
pub struct BodyRef(pub BodyId);

/// Plugin for scene composition and entity sync.
pub struct GalaxyScenePlugin;

impl Plugin for GalaxyScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSyncState>()
            .init_resource::<SatelliteOrbitFrom>()
            .add_systems(Startup, starfield::spawn_starfield)
            .add_systems(
                Update,
                (sync_galaxy_scene, update_body_transforms)
                    .chain()
                    .after(advance_simulation_clock),
            );
    }
}
