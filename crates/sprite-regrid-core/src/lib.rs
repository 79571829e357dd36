//! Core library for regridding irregular spritesheets.
//!
//! - Segmentation: iterative 4-connected flood fill over the alpha mask, noise-filtered by bounding-box area
//! - Sequencing: row-bucketed reading order (grid) or strict left-to-right (row)
//! - Packing: fixed-cell canvas sized to the largest frame; frames centered horizontally and bottom-anchored
//! - Pipeline: `regrid` takes a decoded image and returns the sheet canvas plus its map
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sprite_regrid_core::{SheetConfig, regrid};
//! # fn main() -> anyhow::Result<()> {
//! let img = ImageReader::open("irregular.png")?.decode()?;
//! let out = regrid(&img, &SheetConfig::default())?;
//! out.rgba.save("sheet.png")?;
//! println!("{}", out.stats().summary());
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod mask;
pub mod model;
pub mod pipeline;
pub mod segment;
pub mod sequence;
pub mod sheet;

pub use config::*;
pub use error::*;
pub use export::*;
pub use extract::*;
pub use mask::*;
pub use model::*;
pub use pipeline::*;
pub use segment::*;
pub use sequence::*;
pub use sheet::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_regrid_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{LayoutMode, SheetConfig, SheetConfigBuilder};
    pub use crate::error::SheetError;
    pub use crate::model::{BoundingBox, Frame, PlacedFrame, SheetMap, SheetStats};
    pub use crate::sheet::SheetOutput;
    pub use crate::{extract_frames, find_sprite_boxes, order_boxes, pack_frames, regrid};
}
