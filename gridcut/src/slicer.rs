use crate::{
    error::ConfigError,
    geometry::Rect,
    types::{Alignment, PartialCells, SheetDimensions, SliceConfig, SliceDescriptor},
};

/// Cuts a sheet into slices using `config`.
///
/// The config is validated first, so an invalid config is reported before
/// anything is produced. The slice size is used exactly as given; snapping it
/// to a preset size is up to the caller. A sheet with no area, or one that is
/// smaller than a single slice, produces no slices; that isn't an error.
pub fn slice(
    sheet: SheetDimensions,
    config: &SliceConfig,
) -> Result<Vec<SliceDescriptor>, ConfigError> {
    Ok(GridSlicer::new(config)?.slice(sheet))
}

/// A slicer holding a validated config, ready to cut any number of sheets.
#[derive(Debug, Clone)]
pub struct GridSlicer {
    config: SliceConfig,
}

impl GridSlicer {
    pub fn new(config: &SliceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &SliceConfig {
        &self.config
    }

    /// The number of columns and rows of cells this slicer will produce for
    /// the given sheet.
    pub fn grid_size(&self, sheet: SheetDimensions) -> (u32, u32) {
        if !self.fits(sheet) {
            return (0, 0);
        }

        let (slice_width, slice_height) = self.config.slice_size;

        match self.config.partial_cells {
            PartialCells::Skip => (sheet.width / slice_width, sheet.height / slice_height),
            PartialCells::Truncate | PartialCells::Overhang => (
                div_ceil(sheet.width, slice_width),
                div_ceil(sheet.height, slice_height),
            ),
        }
    }

    /// Produces one descriptor per cell, column by column. Within a column,
    /// rows go from the top of the sheet down, so row 0 is the topmost cell.
    pub fn slice(&self, sheet: SheetDimensions) -> Vec<SliceDescriptor> {
        let (slice_width, slice_height) = self.config.slice_size;

        log::trace!(
            "Slicing {} sheet into {}x{} cells",
            sheet,
            slice_width,
            slice_height
        );

        if !self.fits(sheet) {
            log::trace!("Sheet {} is smaller than one slice", sheet);
            return Vec::new();
        }

        // Not reserved from grid_size: sheet sizes come straight from image
        // headers.
        let mut slices = Vec::new();

        let mut offset_x = 0;
        while offset_x < sheet.width {
            let column = offset_x / slice_width;
            let remaining_width = sheet.width - offset_x;

            let mut row_top = sheet.height;
            while row_top > 0 {
                let row = (sheet.height - row_top) / slice_height;
                let row_bottom = i64::from(row_top) - i64::from(slice_height);

                if let Some(rect) = self.cell_rect(offset_x, row_top, row_bottom, remaining_width) {
                    slices.push(self.descriptor(row, column, rect));
                }

                row_top = row_top.saturating_sub(slice_height);
            }

            offset_x = match offset_x.checked_add(slice_width) {
                Some(next) => next,
                None => break,
            };
        }

        log::trace!("Finished slicing into {} cells", slices.len());

        slices
    }

    fn fits(&self, sheet: SheetDimensions) -> bool {
        let (slice_width, slice_height) = self.config.slice_size;

        !sheet.is_empty() && slice_width <= sheet.width && slice_height <= sheet.height
    }

    fn cell_rect(
        &self,
        offset_x: u32,
        row_top: u32,
        row_bottom: i64,
        remaining_width: u32,
    ) -> Option<Rect> {
        let (slice_width, slice_height) = self.config.slice_size;
        let x = i64::from(offset_x);
        let is_full = remaining_width >= slice_width && row_bottom >= 0;

        match self.config.partial_cells {
            PartialCells::Truncate => {
                let y = row_bottom.max(0);
                let height = (i64::from(row_top) - y) as u32;

                Some(Rect::new(x, y, remaining_width.min(slice_width), height))
            }
            PartialCells::Skip if !is_full => None,
            PartialCells::Skip | PartialCells::Overhang => {
                Some(Rect::new(x, row_bottom, slice_width, slice_height))
            }
        }
    }

    fn descriptor(&self, row: u32, column: u32, rect: Rect) -> SliceDescriptor {
        SliceDescriptor {
            name: format!("{}, {}", row, column),
            row,
            column,
            rect,
            pivot: self.config.pivot,
            alignment: Alignment::Custom,
            pixels_per_unit: self.config.pixels_per_unit,
            sampling_mode: self.config.sampling_mode,
        }
    }
}

fn div_ceil(value: u32, divisor: u32) -> u32 {
    value / divisor + if value % divisor == 0 { 0 } else { 1 }
}
