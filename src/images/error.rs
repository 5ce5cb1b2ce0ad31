use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageIndexError {
    #[error("Can't open the image directory [error: {0}]")]
    CantOpenImageDir(std::io::Error),
    #[error("Can't browse through the image directory [error: {0}]")]
    CantBrowseThroughImages(std::io::Error),
    #[error("Image file `{0}` is not named `<ayso_id>.<extension>`.")]
    MalformedImageFileName(String),
}
