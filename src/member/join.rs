use crate::images::{ImageEntry, ImageIndex};
use crate::member::error::JoinError;
use crate::member::error::JoinError::RosterEntryNotFound;
use crate::member::{MemberCard, PlayerCard, VolunteerCard};
use crate::roster::Roster;
use log::debug;

/// Pair every indexed image with its roster entry, in image order.
/// An image whose AYSO ID has no roster entry aborts the run. Roster entries
/// without an image are left out silently, which is how a partial deck gets
/// printed while photos are still being collected.
pub fn join_with_roster(
    images: &ImageIndex,
    roster: &Roster,
) -> Result<Vec<MemberCard>, JoinError> {
    let cards = images
        .values()
        .map(|image_entry| card_for_image(image_entry, roster))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Joined {} member card(s) with the roster.", cards.len());
    Ok(cards)
}

fn card_for_image(image_entry: &ImageEntry, roster: &Roster) -> Result<MemberCard, JoinError> {
    let ayso_id = image_entry.ayso_id();
    match roster {
        Roster::Players(players) => {
            let player = players
                .get(ayso_id)
                .ok_or_else(|| RosterEntryNotFound(ayso_id.clone()))?;
            Ok(MemberCard::Player(PlayerCard::new(
                ayso_id.clone(),
                image_entry.image().clone(),
                player.name().clone(),
                player.dob().clone(),
                player.sar().clone(),
                player.my().clone(),
                player.division().clone(),
                player.program().clone(),
            )))
        }
        Roster::Volunteers(volunteers) => {
            let volunteer = volunteers
                .get(ayso_id)
                .ok_or_else(|| RosterEntryNotFound(ayso_id.clone()))?;
            Ok(MemberCard::Volunteer(VolunteerCard::new(
                ayso_id.clone(),
                image_entry.image().clone(),
                volunteer.name().clone(),
                volunteer.my().clone(),
                volunteer.certs().clone(),
                volunteer.sh().clone(),
                volunteer.cdc().clone(),
            )))
        }
    }
}
