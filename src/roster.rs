//! Roster import from CSV: `name,squad_number,category` with a header row.

use crate::models::{PerformanceCategory, Player};
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct RosterRecord {
    name: String,
    #[serde(default)]
    squad_number: Option<u32>,
    #[serde(default)]
    category: Option<String>,
}

/// Parse roster rows into players with fresh ids. Blank names are skipped.
pub fn parse_roster_csv<R: Read>(reader: R) -> Result<Vec<Player>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for record in rdr.deserialize() {
        let record: RosterRecord = record?;
        if record.name.is_empty() {
            continue;
        }
        let mut player = Player::new(record.name);
        player.squad_number = record.squad_number;
        player.category = record
            .category
            .as_deref()
            .and_then(|c| c.parse::<PerformanceCategory>().ok())
            .unwrap_or_default();
        players.push(player);
    }
    Ok(players)
}
