use crate::config::MemberKind;
use crate::roster::config::SeasonConfig;
use crate::roster::error::RosterError;
use crate::roster::player::PlayerEntry;
use crate::roster::volunteer::VolunteerEntry;
use std::collections::BTreeMap;
use std::path::Path;

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod legacy_row;
pub(crate) mod player;
pub(crate) mod volunteer;

/// The imported roster, keyed by AYSO ID.
#[derive(Debug, Eq, PartialEq)]
pub enum Roster {
    Players(BTreeMap<String, PlayerEntry>),
    Volunteers(BTreeMap<String, VolunteerEntry>),
}

/// Read the roster export matching the configured member kind.
pub fn import_from_file(
    path: &Path,
    kind: MemberKind,
    season: &SeasonConfig,
) -> Result<Roster, RosterError> {
    match kind {
        MemberKind::Player => Ok(Roster::Players(player::import_from_file(path, season)?)),
        MemberKind::Volunteer => Ok(Roster::Volunteers(volunteer::import_from_file(path)?)),
    }
}
