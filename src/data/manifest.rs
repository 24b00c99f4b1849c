use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use gridcut::SliceConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sheet_name::SheetName;

pub static MANIFEST_FILENAME: &str = "slicer-manifest.toml";

/// Tracks which sheets were sliced, and with what, as of the last run of the
/// slice command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub sheets: BTreeMap<SheetName, SheetManifest>,
}

impl Manifest {
    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ManifestError> {
        let file_path = folder_path.as_ref().join(MANIFEST_FILENAME);

        let contents = fs::read_to_string(&file_path)?;
        let manifest = toml::from_str(&contents)
            .map_err(|source| ManifestError::DeserializeToml { file_path, source })?;

        Ok(manifest)
    }

    pub fn write_to_folder<P: AsRef<Path>>(&self, folder_path: P) -> Result<(), ManifestError> {
        let file_path = folder_path.as_ref().join(MANIFEST_FILENAME);

        let serialized = toml::to_string(self)?;
        fs::write(&file_path, serialized)?;

        log::trace!("Saved manifest to {}", file_path.display());

        Ok(())
    }

    /// Tells whether `sheet` was already sliced from the same contents with
    /// the same settings.
    pub fn is_unchanged(&self, name: &SheetName, sheet: &SheetManifest) -> bool {
        match self.sheets.get(name) {
            Some(previous) => previous.hash == sheet.hash && previous.config == sheet.config,
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SheetManifest {
    /// The hexadecimal encoded hash of the sheet's contents when it was
    /// sliced.
    pub hash: String,

    /// A hash of the slice settings the sheet was sliced with.
    pub config: String,

    /// How many slices were written for the sheet.
    pub slices: usize,
}

impl SheetManifest {
    pub fn new(contents: &[u8], config: &SliceConfig, slices: usize) -> Self {
        Self {
            hash: blake3::hash(contents).to_hex().to_string(),
            config: hash_config(config),
            slices,
        }
    }
}

fn hash_config(config: &SliceConfig) -> String {
    // serde_json writes struct fields in declaration order, which keeps this
    // stable between runs.
    let canonical = serde_json::to_vec(config).unwrap_or_default();

    blake3::hash(&canonical).to_hex().to_string()
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{source} in {}", file_path.display())]
    DeserializeToml {
        file_path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    SerializeToml {
        #[from]
        source: toml::ser::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ManifestError {
    pub fn is_not_found(&self) -> bool {
        match self {
            ManifestError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use gridcut::PartialCells;

    fn name(value: &str) -> SheetName {
        SheetName::from_paths(Path::new("staging"), &Path::new("staging").join(value)).unwrap()
    }

    #[test]
    fn unchanged_sheet() {
        let config = SliceConfig::new(8, 8);
        let mut manifest = Manifest::default();
        manifest
            .sheets
            .insert(name("a.png"), SheetManifest::new(b"abc", &config, 4));

        assert!(manifest.is_unchanged(&name("a.png"), &SheetManifest::new(b"abc", &config, 4)));
        assert!(!manifest.is_unchanged(&name("b.png"), &SheetManifest::new(b"abc", &config, 4)));
    }

    #[test]
    fn changed_contents_or_config() {
        let config = SliceConfig::new(8, 8);
        let mut manifest = Manifest::default();
        manifest
            .sheets
            .insert(name("a.png"), SheetManifest::new(b"abc", &config, 4));

        assert!(!manifest.is_unchanged(&name("a.png"), &SheetManifest::new(b"abd", &config, 4)));

        let skipping = config.partial_cells(PartialCells::Skip);
        assert!(!manifest.is_unchanged(&name("a.png"), &SheetManifest::new(b"abc", &skipping, 4)));
    }

    #[test]
    fn round_trip_through_folder() {
        let folder = tempfile::tempdir().unwrap();

        let mut manifest = Manifest::default();
        manifest.sheets.insert(
            name("heroes/knight.png"),
            SheetManifest::new(b"knight", &SliceConfig::new(16, 16), 12),
        );
        manifest.write_to_folder(folder.path()).unwrap();

        assert_eq!(Manifest::read_from_folder(folder.path()).unwrap(), manifest);
    }

    #[test]
    fn missing_manifest_is_not_found() {
        let folder = tempfile::tempdir().unwrap();

        let err = Manifest::read_from_folder(folder.path()).unwrap_err();
        assert!(err.is_not_found());
    }
}
