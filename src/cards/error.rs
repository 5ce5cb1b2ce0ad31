use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Can't register the card templates [error: {0}]")]
    InvalidTemplate(tera::Error),
    #[error("Can't render a card [error: {0}]")]
    RenderFailed(#[from] tera::Error),
}
