use anyhow::Context;
use fs_err as fs;
use gridcut::{GridSlicer, SheetDimensions};

use crate::{
    commands::{project_path, read_config_or_default},
    options::{GlobalOptions, PreviewOptions},
    raster::read_png_dimensions,
    report::render_slice_table,
    size_hint::size_hint_for_path,
};

pub fn preview(_global: GlobalOptions, options: PreviewOptions) -> anyhow::Result<()> {
    let project_path = project_path(options.project_path)?;
    let config = read_config_or_default(&project_path)?;

    let (sheet, size_hint) = match (&options.path, options.sheet_size) {
        (Some(path), _) => {
            let file = fs::File::open(path)?;
            let sheet = read_png_dimensions(file)
                .with_context(|| format!("couldn't read image header of {}", path.display()))?;

            (sheet, size_hint_for_path(path))
        }
        (None, Some((width, height))) => (SheetDimensions::new(width, height), None),
        (None, None) => anyhow::bail!("either a sheet path or --sheet-size is required"),
    };

    let slice_config = config
        .slice
        .to_slice_config(options.slice_size.or(size_hint))?;
    let slicer = GridSlicer::new(&slice_config)?;
    let slices = slicer.slice(sheet);

    if slices.is_empty() {
        log::warn!("Sheet {} is smaller than one slice, nothing to slice", sheet);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&slices)?);
    } else {
        print!("{}", render_slice_table(sheet, slicer.config(), &slices));
    }

    Ok(())
}
