use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum JoinError {
    #[error("Member `{0}` has an image but no roster entry.")]
    RosterEntryNotFound(String),
}
