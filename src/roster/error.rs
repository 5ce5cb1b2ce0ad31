use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Can't open the roster file [error: {0}]")]
    CantOpenRosterFile(std::io::Error),
    #[error("Line {line} of the roster file has no column {column}.")]
    MissingColumn { line: usize, column: usize },
    #[error("The coach level regex doesn't compile.")]
    WrongRegex,
}
