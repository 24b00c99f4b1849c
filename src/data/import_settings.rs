use gridcut::{SamplingMode, SliceDescriptor};
use serde::{Deserialize, Serialize};

use crate::sheet_name::SheetName;

/// Import settings for one sheet, as handed to an import sink.
///
/// Besides the slices themselves, a sliced sheet is always imported as a
/// readable, uncompressed multi-sprite texture so that slice boundaries stay
/// pixel exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SheetImport {
    pub sheet: SheetName,
    pub multiple_sprites: bool,
    pub sampling_mode: SamplingMode,
    pub compressed: bool,
    pub readable: bool,
    pub pixels_per_unit: u32,
    pub slices: Vec<SliceDescriptor>,
}

impl SheetImport {
    pub fn new(
        sheet: SheetName,
        sampling_mode: SamplingMode,
        pixels_per_unit: u32,
        slices: Vec<SliceDescriptor>,
    ) -> Self {
        Self {
            sheet,
            multiple_sprites: true,
            sampling_mode,
            compressed: false,
            readable: true,
            pixels_per_unit,
            slices,
        }
    }
}
