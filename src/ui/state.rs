//! UI state management

use bevy::prelude::*;

use crate::galaxy::BodyId;

/// The application's current selection. Owned here, not by the engine:
/// the pick resolver only notifies, and a registry replace that removes
/// the selected body clears this on the next frame.
#[derive(Resource, Default)]
pub struct SelectedBody {
    pub id: Option<BodyId>,
}
