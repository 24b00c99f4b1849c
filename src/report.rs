use std::fmt::Write;

use gridcut::{SheetDimensions, SliceConfig, SliceDescriptor};

/// Renders a human readable summary of how a sheet will be sliced.
pub fn render_slice_table(
    sheet: SheetDimensions,
    config: &SliceConfig,
    slices: &[SliceDescriptor],
) -> String {
    let mut output = String::new();

    let (slice_width, slice_height) = config.slice_size;
    let _ = writeln!(
        output,
        "Sheet {} cut into {}x{} slices ({} total)",
        sheet,
        slice_width,
        slice_height,
        slices.len()
    );

    for slice in slices {
        let marker = if slice.is_full_size(config) {
            ""
        } else {
            " (partial)"
        };

        let _ = writeln!(
            output,
            "{:>8}  x={:<5} y={:<5} {}x{}{}",
            slice.name, slice.rect.x, slice.rect.y, slice.rect.width, slice.rect.height, marker
        );
    }

    output
}
