//! Position catalog: the ordered slot layout for each team format.

use crate::models::{FormationSlot, TeamFormat};

const fn slot(slot_id: &'static str, label: &'static str) -> FormationSlot {
    FormationSlot { slot_id, label }
}

const FOUR_A_SIDE: &[FormationSlot] = &[
    slot("gk-1", "GK"),
    slot("def-1", "DL"),
    slot("def-2", "DR"),
    slot("str-1", "STC"),
];

const FIVE_A_SIDE: &[FormationSlot] = &[
    slot("gk-1", "GK"),
    slot("def-1", "DL"),
    slot("def-2", "DC"),
    slot("def-3", "DR"),
    slot("str-1", "STC"),
];

const SEVEN_A_SIDE: &[FormationSlot] = &[
    slot("gk-1", "GK"),
    slot("def-1", "DL"),
    slot("def-2", "DC"),
    slot("def-3", "DR"),
    slot("mid-1", "MC"),
    slot("str-1", "STC"),
    slot("str-2", "AMC"),
];

const NINE_A_SIDE: &[FormationSlot] = &[
    slot("gk-1", "GK"),
    slot("def-1", "DL"),
    slot("def-2", "DC"),
    slot("def-3", "DR"),
    slot("mid-1", "ML"),
    slot("mid-2", "MC"),
    slot("mid-3", "MR"),
    slot("str-1", "AMC"),
    slot("str-2", "STC"),
];

const ELEVEN_A_SIDE: &[FormationSlot] = &[
    slot("gk-1", "GK"),
    slot("def-1", "DL"),
    slot("def-2", "DCL"),
    slot("def-3", "DC"),
    slot("def-4", "DR"),
    slot("mid-1", "ML"),
    slot("mid-2", "MCL"),
    slot("mid-3", "MC"),
    slot("mid-4", "MR"),
    slot("str-1", "AMC"),
    slot("str-2", "STC"),
];

/// Starting slots for a format, goalkeeper first.
pub fn positions_for_format(format: TeamFormat) -> &'static [FormationSlot] {
    match format {
        TeamFormat::FourASide => FOUR_A_SIDE,
        TeamFormat::FiveASide => FIVE_A_SIDE,
        TeamFormat::SevenASide => SEVEN_A_SIDE,
        TeamFormat::NineASide => NINE_A_SIDE,
        TeamFormat::ElevenASide => ELEVEN_A_SIDE,
    }
}

/// Like [`positions_for_format`] but from the stored format string; unknown formats yield no slots.
pub fn positions_for_format_name(name: &str) -> &'static [FormationSlot] {
    name.parse::<TeamFormat>()
        .map(positions_for_format)
        .unwrap_or(&[])
}

const POSITION_TITLES: &[(&str, &str)] = &[
    ("GK", "Goalkeeper"),
    ("SK", "Sweeper Keeper"),
    ("DL", "Left Back"),
    ("DCL", "Centre Back (L)"),
    ("DC", "Centre Back"),
    ("DCR", "Centre Back (R)"),
    ("DR", "Right Back"),
    ("WBL", "Wing Back (L)"),
    ("DMCL", "Central Defensive Midfielder (L)"),
    ("DMCR", "Central Defensive Midfielder (R)"),
    ("WBR", "Wing Back (R)"),
    ("ML", "Left Midfielder"),
    ("MCL", "Midfield (Centre Left)"),
    ("MC", "Centre Midfielder"),
    ("MCR", "Midfield (Centre Right)"),
    ("MR", "Right Midfielder"),
    ("AML", "Attacking Midfielder (Left)"),
    ("AMCL", "Attacking Midfielder (Centre Left)"),
    ("AMC", "Attacking Midfielder (Centre)"),
    ("AMCR", "Attacking Midfielder (Centre Right)"),
    ("AMR", "Attacking Midfielder (Right)"),
    ("STCL", "Striker (L)"),
    ("STC", "Striker"),
    ("STCR", "Striker (R)"),
];

/// Full name of a position abbreviation, if known.
pub fn position_title(abbreviation: &str) -> Option<&'static str> {
    POSITION_TITLES
        .iter()
        .find(|(abbr, _)| *abbr == abbreviation)
        .map(|(_, title)| *title)
}
