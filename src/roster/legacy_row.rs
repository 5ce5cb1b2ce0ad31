use crate::roster::error::RosterError;
use crate::roster::error::RosterError::CantOpenRosterFile;
use std::fs;
use std::path::Path;

/// Split one raw roster line the way the export tooling expects:
/// every double quote is stripped, then the line is split on commas.
/// This is not CSV parsing: a quoted field containing a comma splits in two,
/// and downstream column positions count on exactly that. Any stricter parser
/// has to be swapped in here, behind the same signature.
pub fn split_row(line: &str) -> Vec<String> {
    line.replace('"', "")
        .split(',')
        .map(str::to_owned)
        .collect()
}

/// Read every data row of a roster export, discarding the header line.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, RosterError> {
    let content = fs::read_to_string(path).map_err(CantOpenRosterFile)?;

    Ok(content.lines().skip(1).map(split_row).collect())
}
