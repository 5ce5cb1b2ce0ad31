use crate::images::error::ImageIndexError;
use crate::images::error::ImageIndexError::{
    CantBrowseThroughImages, CantOpenImageDir, MalformedImageFileName,
};
use derive_getters::Getters;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub(crate) mod error;

/// One discovered photo: the member identifier taken from the file stem, and the file itself.
#[derive(Debug, Getters, Clone, Eq, PartialEq)]
pub struct ImageEntry {
    ayso_id: String,
    image: PathBuf,
}

impl ImageEntry {
    pub fn new(ayso_id: String, image: PathBuf) -> Self {
        Self { ayso_id, image }
    }
}

/// A map of [ImageEntry], keyed by member identifier and iterated in identifier order.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ImageIndex {
    entries: BTreeMap<String, ImageEntry>,
}

impl Deref for ImageIndex {
    type Target = BTreeMap<String, ImageEntry>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl From<BTreeMap<String, ImageEntry>> for ImageIndex {
    fn from(entries: BTreeMap<String, ImageEntry>) -> Self {
        ImageIndex { entries }
    }
}

/// Scan the image directory and key each file by the part of its name before the period.
/// A name must contain exactly one period; anything else aborts the run rather than
/// letting a misnamed photo drop out of the deck unnoticed.
/// A later file with the same stem replaces the earlier one.
pub fn index_from_dir(dir: &Path) -> Result<ImageIndex, ImageIndexError> {
    let mut entries = BTreeMap::new();
    let paths = fs::read_dir(dir).map_err(CantOpenImageDir)?;
    for path in paths {
        let path = path.map_err(CantBrowseThroughImages)?;
        let file_name = path
            .file_name()
            .into_string()
            .map_err(|name| MalformedImageFileName(name.to_string_lossy().into_owned()))?;
        let ayso_id = stem_before_period(&file_name)?;
        entries.insert(
            ayso_id.clone(),
            ImageEntry::new(ayso_id, dir.join(&file_name)),
        );
    }

    debug!("Indexed {} image(s) from {dir:?}.", entries.len());
    Ok(ImageIndex::from(entries))
}

/// Split `<ayso_id>.<extension>` and keep the identifier.
fn stem_before_period(file_name: &str) -> Result<String, ImageIndexError> {
    let parts = file_name.split('.').collect::<Vec<_>>();
    match parts.as_slice() {
        [ayso_id, _extension] => Ok((*ayso_id).to_owned()),
        _ => Err(MalformedImageFileName(file_name.to_owned())),
    }
}
