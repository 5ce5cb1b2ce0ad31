use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub(crate) mod error;
pub(crate) mod join;

/// Everything the player card template substitutes.
#[derive(Debug, Getters, Serialize, Clone, Eq, PartialEq)]
pub struct PlayerCard {
    ayso_id: String,
    image: PathBuf,
    name: String,
    dob: String,
    sar: String,
    my: String,
    division: String,
    program: String,
}

impl PlayerCard {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ayso_id: String,
        image: PathBuf,
        name: String,
        dob: String,
        sar: String,
        my: String,
        division: String,
        program: String,
    ) -> Self {
        Self {
            ayso_id,
            image,
            name,
            dob,
            sar,
            my,
            division,
            program,
        }
    }
}

/// Everything the volunteer card template substitutes.
/// Safe-haven and concussion dates stay optional here; the renderer decides
/// what a card without them means.
#[derive(Debug, Getters, Clone, Eq, PartialEq)]
pub struct VolunteerCard {
    ayso_id: String,
    image: PathBuf,
    name: String,
    my: String,
    certs: BTreeSet<String>,
    sh: Option<String>,
    cdc: Option<String>,
}

impl VolunteerCard {
    pub fn new(
        ayso_id: String,
        image: PathBuf,
        name: String,
        my: String,
        certs: BTreeSet<String>,
        sh: Option<String>,
        cdc: Option<String>,
    ) -> Self {
        Self {
            ayso_id,
            image,
            name,
            my,
            certs,
            sh,
            cdc,
        }
    }
}

/// A member ready to be printed, image and roster fields joined.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MemberCard {
    Player(PlayerCard),
    Volunteer(VolunteerCard),
}
