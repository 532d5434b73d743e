//! HUD panels: title, control hints and the selected-body card.

use bevy::prelude::*;

use crate::galaxy::{BodyId, GalaxyRegistry, GalaxySnapshot};
use crate::orbital::SimulationClock;
use crate::ui::state::SelectedBody;

const PANEL_BACKGROUND: Color = Color::srgba(0.03, 0.05, 0.10, 0.85);
const TEXT_PRIMARY: Color = Color::srgb(0.85, 0.93, 1.0);
const TEXT_DIM: Color = Color::srgb(0.55, 0.62, 0.72);
const ACCENT: Color = Color::srgb(0.35, 0.85, 0.95);

/// Marker for the selected-body card root node.
#[derive(Component)]
pub struct InfoCardRoot;

/// Marker for the color swatch inside the card.
#[derive(Component)]
pub struct CardSwatch;

/// Marker for the simulation clock readout.
#[derive(Component)]
pub struct ClockReadout;

/// Which card line a text node displays.
#[derive(Component, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Name,
    Description,
    FunFact,
    Stats,
}

/// Everything the card shows for one body.
pub(crate) struct BodyCard {
    pub name: String,
    pub description: String,
    pub fun_fact: String,
    pub stats: String,
    pub color: Color,
}

/// Build the card contents for any registry body, the star included.
pub(crate) fn body_card(snapshot: &GalaxySnapshot, id: &BodyId) -> Option<BodyCard> {
    if snapshot.star().id == *id {
        let star = snapshot.star();
        return Some(BodyCard {
            name: star.name.clone(),
            description: star.description.clone(),
            fun_fact: star.fun_fact.clone(),
            stats: format!(
                "Size {:.2} | Planets {}",
                star.size,
                snapshot.planet_ids().len()
            ),
            color: star.color(),
        });
    }

    let body = snapshot.get(id)?;
    let companions = if snapshot.is_planet(id) {
        format!("Moons {}", body.satellites.len())
    } else {
        match snapshot.parent_of(id).and_then(|pid| snapshot.get(pid)) {
            Some(parent) => format!("Orbits {}", parent.name),
            None => "Orbits nothing".to_string(),
        }
    };
    Some(BodyCard {
        name: body.name.clone(),
        description: body.description.clone(),
        fun_fact: body.fun_fact.clone(),
        stats: format!(
            "Size {:.2} | Orbit radius {:.2} | Orbit speed {:.2} | {companions}",
            body.size, body.orbit_radius, body.orbit_speed
        ),
        color: body.color(),
    })
}

/// System: spawn the static HUD once at startup.
pub fn spawn_hud(mut commands: Commands) {
    // Title, top left.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            Name::new("Hud Title"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("LIVE GALAXY"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(ACCENT),
            ));
            parent.spawn((
                Text::new("Click any body to inspect it"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_DIM),
            ));
        });

    // Control hints, bottom left.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                padding: UiRect::all(Val::Px(10.0)),
                border_radius: BorderRadius::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            Name::new("Hud Hints"),
        ))
        .with_children(|parent| {
            for hint in [
                "Drag: rotate | Scroll: zoom | Right drag: pan",
                "N: add planet | M: add moon to selected planet",
                "Del: remove selected | -/=: simulation speed",
            ] {
                parent.spawn((
                    Text::new(hint),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(TEXT_DIM),
                ));
            }
        });

    // Simulation clock, bottom right.
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            right: Val::Px(16.0),
            padding: UiRect::all(Val::Px(10.0)),
            border_radius: BorderRadius::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(PANEL_BACKGROUND),
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(TEXT_DIM),
        ClockReadout,
        Name::new("Hud Clock"),
    ));

    // Selected-body card, top right. Hidden until something is picked.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                right: Val::Px(16.0),
                width: Val::Px(340.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(16.0)),
                border_radius: BorderRadius::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            Visibility::Hidden,
            InfoCardRoot,
            Name::new("Body Card"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(48.0),
                    height: Val::Px(48.0),
                    border_radius: BorderRadius::all(Val::Px(24.0)),
                    ..default()
                },
                BackgroundColor(Color::WHITE),
                CardSwatch,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                CardField::Name,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                CardField::Description,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(TEXT_DIM),
                CardField::FunFact,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(ACCENT),
                CardField::Stats,
            ));
        });
}

/// System: mirror the simulation clock in the HUD.
pub fn refresh_clock_readout(
    clock: Res<SimulationClock>,
    mut readouts: Query<&mut Text, With<ClockReadout>>,
) {
    let Ok(mut text) = readouts.single_mut() else {
        return;
    };
    let value = format!("t = {:.1} s | speed {}x", clock.elapsed(), clock.time_scale);
    if text.0 != value {
        text.0 = value;
    }
}

/// System: keep the card in step with the selection and the live registry.
pub fn refresh_info_card(
    selected: Res<SelectedBody>,
    registry: Res<GalaxyRegistry>,
    mut roots: Query<&mut Visibility, With<InfoCardRoot>>,
    mut fields: Query<(&CardField, &mut Text)>,
    mut swatches: Query<&mut BackgroundColor, With<CardSwatch>>,
) {
    if !selected.is_changed() && !registry.is_changed() {
        return;
    }
    let Ok(mut visibility) = roots.single_mut() else {
        return;
    };

    let card = selected
        .id
        .as_ref()
        .and_then(|id| body_card(registry.snapshot(), id));
    let Some(card) = card else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Visible;
    for (field, mut text) in fields.iter_mut() {
        let value = match field {
            CardField::Name => &card.name,
            CardField::Description => &card.description,
            CardField::FunFact => &card.fun_fact,
            CardField::Stats => &card.stats,
        };
        if text.0 != *value {
            text.0 = value.clone();
        }
    }
    if let Ok(mut swatch) = swatches.single_mut() {
        swatch.0 = card.color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::registry::test_fixtures::planet_with_moon;

    #[test]
    fn test_body_card_for_star_counts_planets() {
        let snapshot = planet_with_moon();
        let card = body_card(&snapshot, &BodyId::from("sol")).unwrap();
        assert_eq!(card.name, "Sol");
        assert!(card.stats.contains("Planets 1"));
    }

    #[test]
    fn test_body_card_for_planet_counts_moons() {
        let snapshot = planet_with_moon();
        let card = body_card(&snapshot, &BodyId::from("terra")).unwrap();
        assert!(card.stats.contains("Moons 1"));
        assert!(card.stats.contains("Orbit radius 6.00"));
    }

    #[test]
    fn test_body_card_for_satellite_names_its_planet() {
        let snapshot = planet_with_moon();
        let card = body_card(&snapshot, &BodyId::from("luna")).unwrap();
        assert!(card.stats.contains("Orbits terra"));
    }

    #[test]
    fn test_body_card_for_unknown_id_is_none() {
        let snapshot = planet_with_moon();
        assert!(body_card(&snapshot, &BodyId::from("vulcan")).is_none());
    }
}
