//! Gridcut is a small library for cutting spritesheets into a uniform grid of
//! named slices. It was built for the `spriteslicer` command line tool, which
//! writes the resulting slice metadata next to each sheet for a sprite import
//! pipeline to consume.
//!
//! Gridcut never looks at pixel data. It takes a sheet's dimensions and a
//! [`SliceConfig`][SliceConfig], and produces an ordered list of
//! [`SliceDescriptor`][SliceDescriptor] values.
//!
//! ## Example
//! ```
//! use gridcut::{slice, SheetDimensions, SliceConfig};
//!
//! // Describe the slice you want, then cut a 16x16 sheet with it.
//! let config = SliceConfig::new(8, 8).pixels_per_unit(16);
//! let slices = slice(SheetDimensions::new(16, 16), &config).unwrap();
//!
//! // Slices come out column by column, top row first.
//! let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
//! assert_eq!(names, ["0, 0", "1, 0", "0, 1", "1, 1"]);
//! ```
//!
//! [SliceConfig]: struct.SliceConfig.html
//! [SliceDescriptor]: struct.SliceDescriptor.html

mod error;
mod geometry;
mod slicer;
mod snap;
mod types;

pub use error::*;
pub use geometry::*;
pub use slicer::*;
pub use snap::*;
pub use types::*;
