mod cards;
mod config;
mod error;
mod images;
mod member;
mod page;
mod roster;
mod tools;

use crate::cards::CardRenderer;
use crate::config::RunConfig;
use crate::error::{ApplicationError, Result};
use crate::member::join::join_with_roster;
use crate::page::HtmlPage;
use log::{error, info};
use std::fs;
use std::process::exit;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        error!("Can't create the cards file, aborting...\n{error:#?}");
        exit(1);
    }
}

fn run() -> Result<()> {
    let config = RunConfig::from_env_args()?;
    let roster = roster::import_from_file(config.roster_file(), *config.kind(), config.season())?;
    let images = images::index_from_dir(config.image_dir())?;
    let members = join_with_roster(&images, &roster)?;

    let renderer = CardRenderer::new()?;
    let mut page = HtmlPage::new(*config.columns());
    for member in &members {
        page.add_card(renderer.render(member)?);
    }

    fs::write(config.output_file(), page.render()).map_err(ApplicationError::CantWriteCardsFile)?;
    info!(
        "Wrote {} card(s) to {:?}.",
        members.len(),
        config.output_file()
    );
    Ok(())
}
