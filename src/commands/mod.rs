mod preview;
mod slice;
mod snap_size;
mod stage;

pub use preview::*;
pub use slice::*;
pub use snap_size::*;
pub use stage::*;

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::data::Config;

/// The project path given on the command line, or the current directory.
fn project_path(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(env::current_dir()?),
    }
}

/// Reads the project config at `project_path`, falling back to default
/// settings when there isn't one.
fn read_config_or_default(project_path: &Path) -> anyhow::Result<Config> {
    match Config::read_from_folder_or_file(project_path) {
        Ok(config) => Ok(config),
        Err(err) if err.is_not_found() => {
            log::debug!(
                "No config found at {}, using default settings",
                project_path.display()
            );

            Ok(Config::default_in_folder(project_path))
        }
        Err(err) => Err(err)
            .with_context(|| format!("couldn't read config from {}", project_path.display())),
    }
}
