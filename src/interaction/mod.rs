//! Pointer interaction
//!
//! Translates pointer events on rendered bodies into stable body ids and
//! forwards selection notifications. The observers are attached by the
//! scene sync once per registry replace; selection state itself lives on
//! the application side, not here.

use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};

use crate::galaxy::{BodyId, GalaxyRegistry, GalaxySnapshot};
use crate::scene::BodyRef;

/// Selection notification, emitted at most once per click and never for
/// clicks that miss every body.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct BodySelected {
    pub id: BodyId,
}

/// Plugin for pointer interaction.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BodySelected>();
    }
}

/// Map a raw hit to a selectable body id. Ids that fell out of the
/// registry (a replace can land between the hit and this frame) resolve
/// to no selection rather than a fault.
pub fn resolve_pick(snapshot: &GalaxySnapshot, id: &BodyId) -> Option<BodyId> {
    snapshot.contains(id).then(|| id.clone())
}

/// Observer: a primary-button click on a body becomes a selection.
/// Propagation stops here so one click resolves to at most one body.
pub fn on_body_click(
    mut ev: On<Pointer<Click>>,
    bodies: Query<&BodyRef>,
    registry: Res<GalaxyRegistry>,
    mut selections: MessageWriter<BodySelected>,
) {
    ev.propagate(false);
    if ev.button != PointerButton::Primary {
        return;
    }
    let Ok(body_ref) = bodies.get(ev.entity) else {
        return;
    };
    match resolve_pick(registry.snapshot(), &body_ref.0) {
        Some(id) => {
            selections.write(BodySelected { id });
        }
        None => warn!("pointer hit stale body {}, ignoring", body_ref.0),
    }
}

/// Observer: entering a body turns the cursor into the pointer affordance.
pub fn on_body_over(
    mut ev: On<Pointer<Over>>,
    mut commands: Commands,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    ev.propagate(false);
    let Ok(window) = windows.single() else {
        return;
    };
    commands
        .entity(window)
        .insert(CursorIcon::System(SystemCursorIcon::Pointer));
}

/// Observer: leaving a body restores the default cursor.
pub fn on_body_out(
    mut ev: On<Pointer<Out>>,
    mut commands: Commands,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    ev.propagate(false);
    let Ok(window) = windows.single() else {
        return;
    };
    commands
        .entity(window)
        .insert(CursorIcon::System(SystemCursorIcon::Default));
}
