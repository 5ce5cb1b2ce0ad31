use crate::cards::error::CardError;
use crate::config::error::ConfigError;
use crate::images::error::ImageIndexError;
use crate::member::error::JoinError;
use crate::roster::error::RosterError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The run configuration is invalid.")]
    Config(#[from] ConfigError),
    #[error("An error has occurred while indexing the images.")]
    Images(#[from] ImageIndexError),
    #[error("An error has occurred while reading the roster.")]
    Roster(#[from] RosterError),
    #[error("An error has occurred while joining the images with the roster.")]
    Join(#[from] JoinError),
    #[error("An error has occurred while rendering the cards.")]
    Card(#[from] CardError),
    #[error("Can't write the cards file [error: {0}]")]
    CantWriteCardsFile(std::io::Error),
}
