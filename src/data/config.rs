use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use gridcut::{PartialCells, Pivot, SamplingMode, SliceConfig, SnapSizes};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::glob::InputGlob;

pub static CONFIG_FILENAME: &str = "slicer.toml";

/// Configuration for a slicing project, contained in a slicer.toml file.
///
/// Paths in the config are relative to the folder containing the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The name of the project, currently only used in log output.
    #[serde(default = "default_name")]
    pub name: String,

    /// The folder that rasters are gathered in before being sliced.
    #[serde(default = "default_staging_folder")]
    pub staging_folder: PathBuf,

    /// Which files in the staging folder are sheets, relative to the staging
    /// folder.
    #[serde(default)]
    pub inputs: InputGlob,

    /// How every sheet in the project is cut up.
    #[serde(default)]
    pub slice: SliceSettings,

    /// The path that this config came from, or the folder it's assumed to be
    /// in when no config file exists.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Config {
    /// A config with every setting left at its default, as if an empty
    /// slicer.toml existed in `folder`.
    pub fn default_in_folder<P: AsRef<Path>>(folder: P) -> Self {
        Self {
            name: default_name(),
            staging_folder: default_staging_folder(),
            inputs: InputGlob::default(),
            slice: SliceSettings::default(),
            file_path: folder.as_ref().join(CONFIG_FILENAME),
        }
    }

    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let file_path = folder_path.as_ref().join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = path.to_owned();

        Ok(config)
    }

    /// The path that paths in this Config should be considered relative to.
    pub fn folder(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn staging_path(&self) -> PathBuf {
        self.folder().join(&self.staging_folder)
    }
}

fn default_name() -> String {
    String::from("sprites")
}

fn default_staging_folder() -> PathBuf {
    PathBuf::from("ToSlice")
}

/// Whether slice sizes are snapped to a fixed list of sizes or used exactly as
/// given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sizing {
    Simple,
    Advanced,
}

impl Default for Sizing {
    fn default() -> Self {
        Sizing::Simple
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default, rename_all = "kebab-case")]
pub struct SliceSettings {
    /// The size of each slice in pixels, as width and height.
    pub size: (u32, u32),

    /// Where each slice is anchored, as a fraction of its size.
    pub pivot: (f32, f32),

    pub pixels_per_unit: u32,

    pub sampling_mode: SamplingMode,

    /// What to do with cells on the right and bottom edges that don't fit a
    /// whole slice.
    pub partial_cells: PartialCells,

    /// In simple sizing, slice sizes are rounded to the nearest entry of
    /// `snap-sizes`. Advanced sizing uses them exactly.
    pub sizing: Sizing,

    pub snap_sizes: Vec<u32>,
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            size: (32, 32),
            pivot: (0.5, 0.5),
            pixels_per_unit: 100,
            sampling_mode: SamplingMode::default(),
            partial_cells: PartialCells::default(),
            sizing: Sizing::default(),
            snap_sizes: SnapSizes::default().into(),
        }
    }
}

impl SliceSettings {
    /// Builds the config used to slice one sheet. `size_override` replaces the
    /// project's slice size, which is how per-sheet size hints are applied.
    /// Under simple sizing the size, override included, is snapped first.
    pub fn to_slice_config(
        &self,
        size_override: Option<(u32, u32)>,
    ) -> Result<SliceConfig, gridcut::ConfigError> {
        let (width, height) = size_override.unwrap_or(self.size);

        let (width, height) = match self.sizing {
            Sizing::Simple => {
                let snap_sizes = SnapSizes::new(self.snap_sizes.clone())?;
                let snapped = (snap_sizes.snap(width), snap_sizes.snap(height));

                if snapped != (width, height) {
                    log::debug!(
                        "Snapped slice size {}x{} to {}x{}",
                        width,
                        height,
                        snapped.0,
                        snapped.1
                    );
                }

                snapped
            }
            Sizing::Advanced => (width, height),
        };

        let config = SliceConfig::new(width, height)
            .pivot(Pivot::new(self.pivot.0, self.pivot.1))
            .pixels_per_unit(self.pixels_per_unit)
            .sampling_mode(self.sampling_mode)
            .partial_cells(self.partial_cells);

        config.validate()?;

        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.name, "sprites");
        assert_eq!(config.staging_folder, Path::new("ToSlice"));
        assert_eq!(config.inputs, InputGlob::default());
        assert_eq!(config.slice, SliceSettings::default());
    }

    #[test]
    fn full_config() {
        let config: Config = toml::from_str(
            r#"
            name = "characters"
            staging-folder = "Resources/ToSlice"
            inputs = "heroes/*.png"

            [slice]
            size = [20, 100]
            pivot = [0.5, 0.0]
            pixels-per-unit = 16
            sampling-mode = "bilinear"
            partial-cells = "skip"
            sizing = "simple"
            snap-sizes = [16, 24, 96, 128]
            "#,
        )
        .unwrap();

        assert_eq!(config.staging_folder, Path::new("Resources/ToSlice"));

        let slice_config = config.slice.to_slice_config(None).unwrap();
        assert_eq!(slice_config.slice_size, (16, 96));
        assert_eq!(slice_config.pivot, Pivot::new(0.5, 0.0));
        assert_eq!(slice_config.pixels_per_unit, 16);
        assert_eq!(slice_config.sampling_mode, SamplingMode::Bilinear);
        assert_eq!(slice_config.partial_cells, PartialCells::Skip);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> = toml::from_str("slice-width = 16");
        assert!(result.is_err());
    }

    #[test]
    fn advanced_sizing_is_exact() {
        let settings = SliceSettings {
            sizing: Sizing::Advanced,
            ..SliceSettings::default()
        };

        let config = settings.to_slice_config(Some((20, 7))).unwrap();
        assert_eq!(config.slice_size, (20, 7));
    }

    #[test]
    fn simple_sizing_snaps_overrides() {
        let config = SliceSettings::default()
            .to_slice_config(Some((20, 100)))
            .unwrap();

        assert_eq!(config.slice_size, (16, 96));
    }

    #[test]
    fn invalid_settings() {
        let settings = SliceSettings {
            pivot: (1.5, 0.5),
            ..SliceSettings::default()
        };
        assert!(settings.to_slice_config(None).is_err());

        let settings = SliceSettings {
            snap_sizes: Vec::new(),
            ..SliceSettings::default()
        };
        assert_eq!(
            settings.to_slice_config(None),
            Err(gridcut::ConfigError::EmptySnapSizes)
        );
    }

    #[test]
    fn paths_relative_to_config() {
        let config = Config::default_in_folder("project");

        assert_eq!(config.folder(), Path::new("project"));
        assert_eq!(config.staging_path(), Path::new("project/ToSlice"));
    }
}
