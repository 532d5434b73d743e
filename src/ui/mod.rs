//! User interface module
//!
//! Owns the selection state, the HUD overlay and the keyboard bindings
//! that drive registry edits and the simulation speed.

use bevy::prelude::*;

pub mod controls;
pub mod panels;
pub mod state;

pub use state::SelectedBody;

use crate::scene::sync_galaxy_scene;

/// Plugin for the HUD and application-side selection handling.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .add_systems(Startup, panels::spawn_hud)
            .add_systems(
                Update,
                (
                    controls::keyboard_time_scale,
                    // Edits land before the scene sync so a replace is
                    // visible on the same frame it was requested.
                    controls::keyboard_editor.before(sync_galaxy_scene),
                    controls::apply_selection,
                    controls::clear_dangling_selection
                        .after(controls::apply_selection)
                        .after(controls::keyboard_editor),
                    panels::refresh_info_card.after(controls::clear_dangling_selection),
                    panels::refresh_clock_readout,
                ),
            );
    }
}
