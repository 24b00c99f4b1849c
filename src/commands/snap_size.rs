use gridcut::{snap_to_nearest, DEFAULT_SNAP_SIZES};

use crate::options::{GlobalOptions, SnapSizeOptions};

pub fn snap_size(_global: GlobalOptions, options: SnapSizeOptions) -> anyhow::Result<()> {
    let snap_options = if options.options.is_empty() {
        DEFAULT_SNAP_SIZES
    } else {
        options.options.as_slice()
    };

    let snapped = snap_to_nearest(options.requested, snap_options)?;

    if snapped != options.requested {
        log::debug!("Snapped {} to {}", options.requested, snapped);
    }

    println!("{}", snapped);
    Ok(())
}
