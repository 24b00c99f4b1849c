use std::{path::PathBuf, str::FromStr};

use structopt::StructOpt;

use crate::size_hint::parse_size;

#[derive(Debug, StructOpt)]
#[structopt(about = "Cuts spritesheets into a grid of named slices")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// Sets verbosity level. Can be specified multiple times.
    #[structopt(long = "verbose", short, global(true), parse(from_occurrences))]
    pub verbosity: u8,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Slice every sheet in the project's staging folder and write the
    /// resulting import settings.
    Slice(SliceOptions),

    /// Move rasters into the project's staging folder so that the next slice
    /// picks them up.
    Stage(StageOptions),

    /// Show how a single sheet would be sliced, without writing anything.
    Preview(PreviewOptions),

    /// Print the snap size closest to a requested slice size.
    SnapSize(SnapSizeOptions),
}

#[derive(Debug, StructOpt)]
pub struct SliceOptions {
    /// The path to a slicer.toml file, or the folder containing one. Defaults
    /// to the current working directory.
    #[structopt(long = "project")]
    pub project_path: Option<PathBuf>,

    /// What to do with each sheet's slices.
    ///
    /// Options:
    ///
    /// - sidecar: Write a .slices.json file next to each sheet
    ///
    /// - dry-run: Only log the slices
    #[structopt(long, default_value = "sidecar")]
    pub target: SliceTarget,

    /// Slice every sheet, even ones that haven't changed since the last run.
    #[structopt(long)]
    pub force: bool,
}

#[derive(Debug, StructOpt)]
pub struct StageOptions {
    /// The path to a slicer.toml file, or the folder containing one. Defaults
    /// to the current working directory.
    #[structopt(long = "project")]
    pub project_path: Option<PathBuf>,

    /// The rasters to move into the staging folder.
    #[structopt(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct PreviewOptions {
    /// The path to a slicer.toml file, or the folder containing one. Defaults
    /// to the current working directory. Default settings are used if no
    /// config exists.
    #[structopt(long = "project")]
    pub project_path: Option<PathBuf>,

    /// The PNG sheet to preview.
    #[structopt(required_unless = "sheet-size")]
    pub path: Option<PathBuf>,

    /// Preview a sheet of this size, like 256x128, instead of reading an image.
    #[structopt(long, parse(try_from_str = parse_size), conflicts_with = "path")]
    pub sheet_size: Option<(u32, u32)>,

    /// Slice size to use instead of the project's, like 16x16. Still snapped
    /// when the project uses simple sizing.
    #[structopt(long, parse(try_from_str = parse_size))]
    pub slice_size: Option<(u32, u32)>,

    /// Print the slices as JSON instead of a table.
    #[structopt(long)]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct SnapSizeOptions {
    /// The slice size that was asked for.
    pub requested: u32,

    /// The sizes to pick from, separated by commas. Ties go to the size listed
    /// first. Defaults to 8,16,24,32,48,64,96,128,256,512.
    #[structopt(long, use_delimiter = true)]
    pub options: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceTarget {
    Sidecar,
    DryRun,
}

impl FromStr for SliceTarget {
    type Err = String;

    fn from_str(value: &str) -> Result<SliceTarget, Self::Err> {
        match value {
            "sidecar" => Ok(SliceTarget::Sidecar),
            "dry-run" => Ok(SliceTarget::DryRun),

            _ => Err(String::from(
                "Invalid slice target. Valid options are 'sidecar' and 'dry-run'.",
            )),
        }
    }
}
