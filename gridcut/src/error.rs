use thiserror::Error;

/// A [`SliceConfig`](struct.SliceConfig.html) or snap size list that can't be
/// used for slicing.
///
/// These are always reported before any slices are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("slice size must be at least 1x1, but was {width}x{height}")]
    ZeroSliceSize { width: u32, height: u32 },

    #[error("pivot ({x}, {y}) must have both components between 0 and 1")]
    PivotOutOfRange { x: f32, y: f32 },

    #[error("pixels per unit must be at least 1")]
    ZeroPixelsPerUnit,

    #[error("at least one snap size is required")]
    EmptySnapSizes,

    #[error("snap sizes must be positive, but the list contained 0")]
    ZeroSnapSize,
}
