use std::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, geometry::Rect};

/// The pixel size of a sheet. Gridcut never needs more than this from an
/// image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetDimensions {
    pub width: u32,
    pub height: u32,
}

impl SheetDimensions {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for SheetDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Normalized anchor point within a slice, as a fraction of the slice size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    pub const CENTER: Pivot = Pivot { x: 0.5, y: 0.5 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn is_normalized(&self) -> bool {
        // Written so that NaN fails the check.
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl Default for Pivot {
    fn default() -> Self {
        Pivot::CENTER
    }
}

/// How a downstream renderer should sample the texture a slice comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingMode {
    Point,
    Bilinear,
    Trilinear,
}

impl Default for SamplingMode {
    fn default() -> Self {
        SamplingMode::Point
    }
}

/// Anchor hints understood by sprite import pipelines.
///
/// Gridcut always emits `Custom`, which tells consumers to use the explicit
/// pivot stored alongside it. Serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Alignment {
    Center,
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
    Custom,
}

impl Alignment {
    /// The numeric code that import pipelines conventionally store for this
    /// alignment.
    pub fn code(self) -> u8 {
        match self {
            Alignment::Center => 0,
            Alignment::TopLeft => 1,
            Alignment::Top => 2,
            Alignment::TopRight => 3,
            Alignment::Left => 4,
            Alignment::Right => 5,
            Alignment::BottomLeft => 6,
            Alignment::Bottom => 7,
            Alignment::BottomRight => 8,
            Alignment::Custom => 9,
        }
    }
}

impl From<Alignment> for u8 {
    fn from(alignment: Alignment) -> u8 {
        alignment.code()
    }
}

impl TryFrom<u8> for Alignment {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let alignment = match code {
            0 => Alignment::Center,
            1 => Alignment::TopLeft,
            2 => Alignment::Top,
            3 => Alignment::TopRight,
            4 => Alignment::Left,
            5 => Alignment::Right,
            6 => Alignment::BottomLeft,
            7 => Alignment::Bottom,
            8 => Alignment::BottomRight,
            9 => Alignment::Custom,
            _ => return Err(format!("unknown alignment code {}", code)),
        };

        Ok(alignment)
    }
}

/// What to do with cells on the right and bottom edges of a sheet whose size
/// isn't a multiple of the slice size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartialCells {
    /// Emit the cell, shrinking its rect to the part that lies on the sheet.
    Truncate,

    /// Drop the cell entirely. Full cells keep the names they would have had
    /// otherwise.
    Skip,

    /// Emit the cell at full slice size, even though it hangs off the sheet.
    /// Cells in the bottom row may get a negative `y`.
    Overhang,
}

impl Default for PartialCells {
    fn default() -> Self {
        PartialCells::Truncate
    }
}

/// Everything that controls how a sheet is cut up.
///
/// `SliceConfig` is built once per slicing call and is never mutated while
/// slicing. Use the builder methods to change individual settings:
///
/// ```
/// use gridcut::{Pivot, SamplingMode, SliceConfig};
///
/// let config = SliceConfig::new(32, 16)
///     .pivot(Pivot::new(0.5, 0.0))
///     .sampling_mode(SamplingMode::Bilinear);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SliceConfig {
    pub slice_size: (u32, u32),
    pub pivot: Pivot,
    pub pixels_per_unit: u32,
    pub sampling_mode: SamplingMode,

    #[serde(default)]
    pub partial_cells: PartialCells,
}

impl SliceConfig {
    pub fn new(slice_width: u32, slice_height: u32) -> Self {
        Self {
            slice_size: (slice_width, slice_height),
            pivot: Pivot::default(),
            pixels_per_unit: 100,
            sampling_mode: SamplingMode::default(),
            partial_cells: PartialCells::default(),
        }
    }

    pub fn pivot(self, pivot: Pivot) -> Self {
        Self { pivot, ..self }
    }

    pub fn pixels_per_unit(self, pixels_per_unit: u32) -> Self {
        Self {
            pixels_per_unit,
            ..self
        }
    }

    pub fn sampling_mode(self, sampling_mode: SamplingMode) -> Self {
        Self {
            sampling_mode,
            ..self
        }
    }

    pub fn partial_cells(self, partial_cells: PartialCells) -> Self {
        Self {
            partial_cells,
            ..self
        }
    }

    /// Checks the invariants every config must uphold before it can be used to
    /// slice a sheet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.slice_size;

        if width < 1 || height < 1 {
            return Err(ConfigError::ZeroSliceSize { width, height });
        }

        if !self.pivot.is_normalized() {
            return Err(ConfigError::PivotOutOfRange {
                x: self.pivot.x,
                y: self.pivot.y,
            });
        }

        if self.pixels_per_unit < 1 {
            return Err(ConfigError::ZeroPixelsPerUnit);
        }

        Ok(())
    }
}

/// Metadata for one cell of a sliced sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SliceDescriptor {
    /// `"{row}, {column}"`, stable across re-slicing the same sheet with the
    /// same config.
    pub name: String,
    pub row: u32,
    pub column: u32,
    pub rect: Rect,
    pub pivot: Pivot,
    pub alignment: Alignment,
    pub pixels_per_unit: u32,
    pub sampling_mode: SamplingMode,
}

impl SliceDescriptor {
    /// Whether this cell covers a full slice, as opposed to a truncated one on
    /// the edge of the sheet.
    pub fn is_full_size(&self, config: &SliceConfig) -> bool {
        self.rect.size() == config.slice_size
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = SliceConfig::new(16, 16);

        assert_eq!(config.pivot, Pivot::new(0.5, 0.5));
        assert_eq!(config.pixels_per_unit, 100);
        assert_eq!(config.sampling_mode, SamplingMode::Point);
        assert_eq!(config.partial_cells, PartialCells::Truncate);
    }

    #[test]
    fn zero_slice_size_is_invalid() {
        assert_eq!(
            SliceConfig::new(0, 8).validate(),
            Err(ConfigError::ZeroSliceSize {
                width: 0,
                height: 8
            })
        );
        assert!(SliceConfig::new(8, 0).validate().is_err());
    }

    #[test]
    fn pivot_must_be_normalized() {
        assert!(SliceConfig::new(8, 8)
            .pivot(Pivot::new(0.0, 1.0))
            .validate()
            .is_ok());

        for &(x, y) in &[(-0.1, 0.5), (0.5, 1.5), (std::f32::NAN, 0.5)] {
            let result = SliceConfig::new(8, 8).pivot(Pivot::new(x, y)).validate();
            assert!(
                matches!(result, Err(ConfigError::PivotOutOfRange { .. })),
                "pivot ({}, {}) should be rejected",
                x,
                y
            );
        }
    }

    #[test]
    fn zero_pixels_per_unit_is_invalid() {
        assert_eq!(
            SliceConfig::new(8, 8).pixels_per_unit(0).validate(),
            Err(ConfigError::ZeroPixelsPerUnit)
        );
    }

    #[test]
    fn custom_alignment_code() {
        assert_eq!(Alignment::Custom.code(), 9);
        assert_eq!(Alignment::Center.code(), 0);
    }

    #[test]
    fn alignment_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Alignment::Custom).unwrap(), "9");
        assert_eq!(
            serde_json::from_str::<Alignment>("6").unwrap(),
            Alignment::BottomLeft
        );
        assert!(serde_json::from_str::<Alignment>("10").is_err());
    }
}
