use anyhow::bail;

use crate::{
    commands::{project_path, read_config_or_default},
    options::{GlobalOptions, StageOptions},
    staging::{stage_raster, Staged},
};

pub fn stage(_global: GlobalOptions, options: StageOptions) -> anyhow::Result<()> {
    let project_path = project_path(options.project_path)?;
    let config = read_config_or_default(&project_path)?;
    let staging_path = config.staging_path();

    let mut failed = 0;

    for path in &options.paths {
        match stage_raster(&staging_path, path) {
            Ok(Staged::Moved(destination)) => println!("{}", destination.display()),
            Ok(Staged::AlreadyStaged) => {
                log::info!("{} is already in the staging folder", path.display());
            }
            Err(err) => {
                log::error!("Couldn't stage {}: {}", path.display(), err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} rasters could not be staged",
            failed,
            options.paths.len()
        );
    }

    Ok(())
}
