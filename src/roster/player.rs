use crate::roster::config::SeasonConfig;
use crate::roster::error::RosterError;
use crate::roster::legacy_row::read_rows;
use derive_getters::Getters;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The fields printed on a player card, extracted from one roster row.
#[derive(Debug, Getters, Serialize, Clone, Eq, PartialEq)]
pub struct PlayerEntry {
    sar: String,
    name: String,
    division: String,
    dob: String,
    my: String,
    program: String,
}

impl PlayerEntry {
    pub fn new(
        sar: String,
        name: String,
        division: String,
        dob: String,
        my: String,
        program: String,
    ) -> Self {
        Self {
            sar,
            name,
            division,
            dob,
            my,
            program,
        }
    }
}

/// Read a player roster export into a map keyed by AYSO ID.
/// A row too short for the expected columns is skipped; a repeated ID keeps the last row.
pub fn import_from_file(
    path: &Path,
    season: &SeasonConfig,
) -> Result<BTreeMap<String, PlayerEntry>, RosterError> {
    let mut players = BTreeMap::new();
    for (index, row) in read_rows(path)?.iter().enumerate() {
        match entry_from_row(row, season) {
            Some((ayso_id, entry)) => {
                players.insert(ayso_id, entry);
            }
            None => debug!("Skipping malformed player row on line {}.", index + 2),
        }
    }

    debug!("Read {} player(s) from {path:?}.", players.len());
    Ok(players)
}

/// Extract one player from the positional columns of a row:
/// the S-A-R triple sits in columns 0-2, the AYSO ID in column 3,
/// first and last name in columns 4 and 6, the division pair in
/// columns 20 and 25 and the date of birth in column 21.
/// [None] when any of those columns is out of range; no partial record is kept.
fn entry_from_row(row: &[String], season: &SeasonConfig) -> Option<(String, PlayerEntry)> {
    let ayso_id = row.get(3)?;
    let sar = format!("{}-{}-{}", row.get(0)?, row.get(1)?, row.get(2)?);
    let name = format!("{} {}", row.get(4)?, row.get(6)?);
    let division = format!("{}{}", row.get(20)?, row.get(25)?);
    let dob = row.get(21)?;

    Some((
        ayso_id.clone(),
        PlayerEntry::new(
            sar,
            name,
            division,
            dob.clone(),
            season.membership_year().clone(),
            season.program().clone(),
        ),
    ))
}
