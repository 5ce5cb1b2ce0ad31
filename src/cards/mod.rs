use crate::cards::error::CardError;
use crate::member::{MemberCard, PlayerCard, VolunteerCard};
use std::collections::BTreeSet;
use tera::{Context, Tera};

pub(crate) mod error;
pub(crate) mod templates;

const PLAYER_TEMPLATE: &str = "player_card";
const VOLUNTEER_TEMPLATE: &str = "volunteer_card";
const CERTS_SEPARATOR: &str = "/";

/// Renders one card fragment per member out of the fixed card templates.
/// Substitution is literal: field values containing markup pass through
/// unescaped, exactly as the cards have always been printed.
pub struct CardRenderer {
    tera: Tera,
}

impl CardRenderer {
    pub fn new() -> Result<Self, CardError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(PLAYER_TEMPLATE, templates::PLAYER_CARD)
            .map_err(CardError::InvalidTemplate)?;
        tera.add_raw_template(VOLUNTEER_TEMPLATE, templates::VOLUNTEER_CARD)
            .map_err(CardError::InvalidTemplate)?;

        Ok(Self { tera })
    }

    pub fn render(&self, member: &MemberCard) -> Result<String, CardError> {
        match member {
            MemberCard::Player(player) => self.render_player(player),
            MemberCard::Volunteer(volunteer) => self.render_volunteer(volunteer),
        }
    }

    fn render_player(&self, player: &PlayerCard) -> Result<String, CardError> {
        let context = Context::from_serialize(player)?;

        Ok(self.tera.render(PLAYER_TEMPLATE, &context)?)
    }

    /// A volunteer card flattens the certification set into a slash-joined string.
    /// The safe-haven and concussion dates go in only when present: a volunteer
    /// who never completed them fails to render rather than printing a card with
    /// a blank certification.
    fn render_volunteer(&self, volunteer: &VolunteerCard) -> Result<String, CardError> {
        let mut context = Context::new();
        context.insert("ayso_id", volunteer.ayso_id());
        context.insert("image", volunteer.image());
        context.insert("name", volunteer.name());
        context.insert("my", volunteer.my());
        context.insert("certs", &flatten_certs(volunteer.certs()));
        if let Some(sh) = volunteer.sh() {
            context.insert("sh", sh);
        }
        if let Some(cdc) = volunteer.cdc() {
            context.insert("cdc", cdc);
        }

        Ok(self.tera.render(VOLUNTEER_TEMPLATE, &context)?)
    }
}

fn flatten_certs(certs: &BTreeSet<String>) -> String {
    certs
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(CERTS_SEPARATOR)
}
