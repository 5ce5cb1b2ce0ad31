use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The --infile argument is missing.")]
    MissingRosterFile,
    #[error("The --imagedir argument is missing.")]
    MissingImageDir,
    #[error("`{0}` is not a supported member type [expected: player or vol].")]
    UnknownMemberKind(String),
    #[error("`{0}` is not a valid number of columns.")]
    InvalidColumns(String),
}
