use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use thiserror::Error;

use crate::data::SheetImport;

pub trait ImportSink {
    /// Applies a sheet's slices to its import settings.
    fn apply(&mut self, import: &SheetImport) -> Result<(), Error>;

    /// Whether applying changes anything on disk. The manifest is only updated
    /// for sinks that do.
    fn is_persistent(&self) -> bool {
        true
    }
}

/// Writes import settings into a JSON file next to each sheet, named after the
/// sheet with `.slices.json` appended.
pub struct SidecarImportSink {
    staging_path: PathBuf,
}

impl SidecarImportSink {
    pub fn new<P: Into<PathBuf>>(staging_path: P) -> Self {
        Self {
            staging_path: staging_path.into(),
        }
    }
}

impl ImportSink for SidecarImportSink {
    fn apply(&mut self, import: &SheetImport) -> Result<(), Error> {
        let sheet_path = self.staging_path.join(import.sheet.as_ref());
        let path = sidecar_path(&sheet_path);

        log::debug!("Writing {} slices to {}", import.slices.len(), path.display());

        let mut contents = serde_json::to_string_pretty(import)?;
        contents.push('\n');
        fs::write(&path, contents)?;

        Ok(())
    }
}

/// Only logs what would have been written.
pub struct DryRunImportSink;

impl ImportSink for DryRunImportSink {
    fn apply(&mut self, import: &SheetImport) -> Result<(), Error> {
        log::info!(
            "Would import {} as {} slices",
            import.sheet,
            import.slices.len()
        );

        for slice in &import.slices {
            log::info!(
                "  {}: ({}, {}) {}x{}",
                slice.name,
                slice.rect.x,
                slice.rect.y,
                slice.rect.width,
                slice.rect.height
            );
        }

        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

pub fn sidecar_path(sheet_path: &Path) -> PathBuf {
    let mut file_name = sheet_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(".slices.json");

    sheet_path.with_file_name(file_name)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },

    #[error(transparent)]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
