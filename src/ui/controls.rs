//! Selection bookkeeping and keyboard-driven registry edits.

use bevy::prelude::*;
use rand::Rng;

use crate::galaxy::{BodyId, CelestialBody, GalaxyRegistry, GalaxySnapshot, editor};
use crate::interaction::BodySelected;
use crate::orbital::SimulationClock;
use crate::ui::state::SelectedBody;

/// System: drain selection notifications into the application state.
pub fn apply_selection(
    mut selections: MessageReader<BodySelected>,
    mut selected: ResMut<SelectedBody>,
    registry: Res<GalaxyRegistry>,
) {
    for selection in selections.read() {
        let name = registry
            .snapshot()
            .get(&selection.id)
            .map(|body| body.name.as_str())
            .unwrap_or(registry.snapshot().star().name.as_str());
        info!("selected body: {} ({})", name, selection.id);
        selected.id = Some(selection.id.clone());
    }
}

/// System: a registry replace that removed the selected body clears the
/// selection instead of leaving a dangling id around.
pub fn clear_dangling_selection(
    registry: Res<GalaxyRegistry>,
    mut selected: ResMut<SelectedBody>,
) {
    if let Some(id) = &selected.id
        && !registry.snapshot().contains(id)
    {
        info!("selected body {id} left the registry, clearing selection");
        selected.id = None;
    }
}

/// System: wholesale registry edits from the keyboard. Every operation
/// builds a fresh snapshot and swaps it in; the scene picks it up on the
/// next frame.
pub fn keyboard_editor(
    keys: Res<ButtonInput<KeyCode>>,
    mut registry: ResMut<GalaxyRegistry>,
    mut selected: ResMut<SelectedBody>,
) {
    if keys.just_pressed(KeyCode::KeyN) {
        let body = placeholder_planet(registry.snapshot(), &mut rand::thread_rng());
        match editor::add_planet(registry.snapshot(), body) {
            Ok(next) => registry.replace(next),
            Err(err) => warn!("add planet failed: {err:#}"),
        }
    }

    if keys.just_pressed(KeyCode::KeyM) {
        match selected.id.clone() {
            Some(planet_id) if registry.snapshot().is_planet(&planet_id) => {
                let body = placeholder_satellite(registry.snapshot(), &mut rand::thread_rng());
                match editor::add_satellite(registry.snapshot(), &planet_id, body) {
                    Ok(next) => registry.replace(next),
                    Err(err) => warn!("add satellite failed: {err:#}"),
                }
            }
            Some(_) => warn!("satellites can only be added to a planet"),
            None => warn!("select a planet before adding a satellite"),
        }
    }

    if keys.just_pressed(KeyCode::Delete) || keys.just_pressed(KeyCode::Backspace) {
        if let Some(id) = selected.id.clone() {
            match editor::remove_body(registry.snapshot(), &id) {
                Ok(next) => {
                    registry.replace(next);
                    selected.id = None;
                }
                Err(err) => warn!("remove body failed: {err:#}"),
            }
        }
    }
}

/// System: adjust the simulation speed from the keyboard.
pub fn keyboard_time_scale(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<SimulationClock>) {
    if keys.just_pressed(KeyCode::Equal) {
        clock.time_scale = (clock.time_scale * 2.0).min(32.0);
        info!("simulation speed {}x", clock.time_scale);
    }
    if keys.just_pressed(KeyCode::Minus) {
        clock.time_scale = (clock.time_scale * 0.5).max(0.25);
        info!("simulation speed {}x", clock.time_scale);
    }
}

fn next_free_id(snapshot: &GalaxySnapshot, prefix: &str) -> (BodyId, u32) {
    let mut number = 1u32;
    loop {
        let id = BodyId::new(format!("{prefix}-{number}"));
        if !snapshot.contains(&id) {
            return (id, number);
        }
        number += 1;
    }
}

fn random_color(rng: &mut impl Rng) -> [f32; 3] {
    let srgba = Color::hsl(rng.gen_range(0.0..360.0), 0.65, 0.6).to_srgba();
    [srgba.red, srgba.green, srgba.blue]
}

fn placeholder_planet(snapshot: &GalaxySnapshot, rng: &mut impl Rng) -> CelestialBody {
    let (id, number) = next_free_id(snapshot, "planet");
    CelestialBody {
        id,
        name: format!("Planet {number}"),
        description: "An uncharted world added from the explorer.".to_string(),
        fun_fact: "Nobody has written a fun fact about this world yet.".to_string(),
        size: rng.gen_range(0.25..0.9),
        color: random_color(rng),
        orbit_radius: rng.gen_range(3.0..14.0),
        orbit_speed: rng.gen_range(0.1..0.8),
        satellites: Vec::new(),
    }
}

fn placeholder_satellite(snapshot: &GalaxySnapshot, rng: &mut impl Rng) -> CelestialBody {
    let (id, number) = next_free_id(snapshot, "moon");
    CelestialBody {
        id,
        name: format!("Moon {number}"),
        description: "A freshly charted companion.".to_string(),
        fun_fact: "Nobody has written a fun fact about this moon yet.".to_string(),
        size: rng.gen_range(0.05..0.2),
        color: random_color(rng),
        orbit_radius: rng.gen_range(0.4..1.2),
        orbit_speed: rng.gen_range(1.0..2.6),
        satellites: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::registry::test_fixtures::planet_with_moon;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_next_free_id_skips_taken_numbers() {
        let snapshot = planet_with_moon();
        let taken = editor::add_planet(
            &snapshot,
            placeholder_planet(&snapshot, &mut StdRng::seed_from_u64(1)),
        )
        .unwrap();
        let (id, number) = next_free_id(&taken, "planet");
        assert_eq!(id, BodyId::from("planet-2"));
        assert_eq!(number, 2);
    }

    #[test]
    fn test_placeholder_planet_is_insertable() {
        let snapshot = planet_with_moon();
        let mut rng = StdRng::seed_from_u64(42);
        let planet = placeholder_planet(&snapshot, &mut rng);
        let next = editor::add_planet(&snapshot, planet).unwrap();
        assert_eq!(next.planet_ids().len(), 2);
        next.validate().unwrap();
    }

    #[test]
    fn test_placeholder_satellite_is_insertable() {
        let snapshot = planet_with_moon();
        let mut rng = StdRng::seed_from_u64(42);
        let moon = placeholder_satellite(&snapshot, &mut rng);
        let next = editor::add_satellite(&snapshot, &BodyId::from("terra"), moon).unwrap();
        let planet = next.get(&BodyId::from("terra")).unwrap();
        assert_eq!(planet.satellites.len(), 2);
        next.validate().unwrap();
    }
}
