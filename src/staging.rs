//! Gathers rasters into the staging folder before they're sliced.

use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq)]
pub enum Staged {
    /// The raster was already sitting in the staging folder.
    AlreadyStaged,

    /// The raster was moved to the contained path.
    Moved(PathBuf),
}

/// Moves a raster into the top level of the staging folder, creating the
/// folder if it doesn't exist yet.
///
/// The raster is copied first and the original is only deleted once the copy
/// succeeded.
pub fn stage_raster(staging_path: &Path, raster_path: &Path) -> Result<Staged, StagingError> {
    let file_name = raster_path
        .file_name()
        .ok_or_else(|| StagingError::NotAFile {
            path: raster_path.to_owned(),
        })?;

    if !fs::metadata(raster_path)?.is_file() {
        return Err(StagingError::NotAFile {
            path: raster_path.to_owned(),
        });
    }

    fs::create_dir_all(staging_path)?;

    if is_in_folder(raster_path, staging_path)? {
        log::debug!("{} is already staged", raster_path.display());
        return Ok(Staged::AlreadyStaged);
    }

    let destination = staging_path.join(file_name);
    if destination.exists() {
        return Err(StagingError::DestinationExists { path: destination });
    }

    fs::copy(raster_path, &destination)?;
    fs::remove_file(raster_path)?;

    log::debug!(
        "Staged {} as {}",
        raster_path.display(),
        destination.display()
    );

    Ok(Staged::Moved(destination))
}

fn is_in_folder(path: &Path, folder: &Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => return Ok(false),
    };

    Ok(fs::canonicalize(parent)? == fs::canonicalize(folder)?)
}

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("{} already exists in the staging folder", path.display())]
    DestinationExists { path: PathBuf },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn moves_into_staging() {
        let root = tempfile::tempdir().unwrap();
        let staging = root.path().join("ToSlice");
        let raster = root.path().join("knight.png");
        fs::write(&raster, b"png").unwrap();

        let staged = stage_raster(&staging, &raster).unwrap();

        assert_eq!(staged, Staged::Moved(staging.join("knight.png")));
        assert!(!raster.exists());
        assert_eq!(fs::read(staging.join("knight.png")).unwrap(), b"png");
    }

    #[test]
    fn already_staged() {
        let root = tempfile::tempdir().unwrap();
        let staging = root.path().join("ToSlice");
        fs::create_dir_all(&staging).unwrap();
        let raster = staging.join("knight.png");
        fs::write(&raster, b"png").unwrap();

        assert_eq!(stage_raster(&staging, &raster).unwrap(), Staged::AlreadyStaged);
        assert!(raster.exists());
    }

    #[test]
    fn refuses_to_overwrite() {
        let root = tempfile::tempdir().unwrap();
        let staging = root.path().join("ToSlice");
        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("knight.png"), b"old").unwrap();

        let raster = root.path().join("knight.png");
        fs::write(&raster, b"new").unwrap();

        let result = stage_raster(&staging, &raster);
        assert!(matches!(
            result,
            Err(StagingError::DestinationExists { .. })
        ));
        assert!(raster.exists());
    }

    #[test]
    fn missing_raster() {
        let root = tempfile::tempdir().unwrap();
        let result = stage_raster(&root.path().join("ToSlice"), &root.path().join("gone.png"));

        assert!(matches!(result, Err(StagingError::Io { .. })));
    }
}
