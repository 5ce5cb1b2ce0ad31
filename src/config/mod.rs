use crate::config::error::ConfigError;
use crate::config::error::ConfigError::{
    InvalidColumns, MissingImageDir, MissingRosterFile, UnknownMemberKind,
};
use crate::roster::config::SeasonConfig;
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use derive_getters::Getters;
use std::path::PathBuf;
use std::str::FromStr;

pub(crate) mod error;

const DEFAULT_OUTPUT_FILE: &str = "cards.html";
const DEFAULT_COLUMNS: usize = 2;

/// The kind of member a run generates cards for.
/// Selected once at startup through the `--type` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Player,
    Volunteer,
}

impl FromStr for MemberKind {
    type Err = ConfigError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "player" => Ok(MemberKind::Player),
            "vol" => Ok(MemberKind::Volunteer),
            _ => Err(UnknownMemberKind(kind.to_owned())),
        }
    }
}

/// Everything a run needs to know: what to read, where to write, how to lay out the page.
#[derive(Debug, Getters)]
pub struct RunConfig {
    kind: MemberKind,
    roster_file: PathBuf,
    image_dir: PathBuf,
    output_file: PathBuf,
    columns: usize,
    season: SeasonConfig,
}

impl RunConfig {
    /// Build the run configuration from the args passed to the app.
    /// `--infile` and `--imagedir` are required; the others fall back to their defaults.
    pub fn from_env_args() -> Result<Self, ConfigError> {
        let roster_file = retrieve_expected_arg_value("--infile", MissingRosterFile)?;
        let image_dir = retrieve_expected_arg_value("--imagedir", MissingImageDir)?;
        let output_file =
            retrieve_arg_value("-o").unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_owned());
        let columns = match retrieve_arg_value("--columns") {
            None => DEFAULT_COLUMNS,
            Some(value) => parse_columns(&value)?,
        };
        let kind = match retrieve_arg_value("--type") {
            None => MemberKind::Player,
            Some(value) => MemberKind::from_str(&value)?,
        };

        Ok(Self {
            kind,
            roster_file: PathBuf::from(roster_file),
            image_dir: PathBuf::from(image_dir),
            output_file: PathBuf::from(output_file),
            columns,
            season: SeasonConfig::default(),
        })
    }
}

fn parse_columns(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(columns) if columns > 0 => Ok(columns),
        _ => Err(InvalidColumns(value.to_owned())),
    }
}
