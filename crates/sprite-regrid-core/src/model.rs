use crate::config::LayoutMode;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of one sprite region, in source-pixel
/// coordinates. `min_*` is inclusive, `max_*` exclusive (half-open),
/// matching crop-region semantics. Invariant: `min_x < max_x` and
/// `min_y < max_y`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
    /// Box area in pixels (`width * height`), not true component pixel count.
    pub fn area(&self) -> u64 {
        (self.width() as u64) * (self.height() as u64)
    }
    /// Vertical center of the box.
    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) as f64 / 2.0
    }
}

/// One extracted sprite: an owned RGBA copy of the pixels inside `source`.
/// Owning the copy lets the source image be dropped after extraction.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Where the frame came from in the source image.
    pub source: BoundingBox,
    pub rgba: RgbaImage,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}

/// A frame placed on the packed sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedFrame {
    /// Position in the ordered sequence (cell index, row-major).
    pub index: usize,
    pub col: u32,
    pub row: u32,
    /// Placement rectangle on the sheet canvas (post-centering/anchoring).
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub source: BoundingBox,
}

/// Logical record of a packed sheet (geometry + placements).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMap {
    pub width: u32,
    pub height: u32,
    /// Cell size, i.e. the largest frame width/height across all regions.
    pub cell_width: u32,
    pub cell_height: u32,
    pub cols: u32,
    pub rows: u32,
    pub layout: LayoutMode,
    pub min_area: u32,
    pub frames: Vec<PlacedFrame>,
}

/// Statistics about how densely the sheet is filled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SheetStats {
    /// Number of sprite regions packed.
    pub regions: usize,
    /// Total canvas area (width * height).
    pub sheet_area: u64,
    /// Area covered by frame rectangles.
    pub used_area: u64,
    /// used_area / sheet_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl SheetMap {
    /// Computes fill statistics for this sheet.
    pub fn stats(&self) -> SheetStats {
        let sheet_area = (self.width as u64) * (self.height as u64);
        let used_area = self
            .frames
            .iter()
            .map(|f| (f.w as u64) * (f.h as u64))
            .sum();
        let occupancy = if sheet_area > 0 {
            used_area as f64 / sheet_area as f64
        } else {
            0.0
        };
        SheetStats {
            regions: self.frames.len(),
            sheet_area,
            used_area,
            occupancy,
        }
    }
}

impl SheetStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Regions: {}, Sheet: {} px², Used: {} px², Occupancy: {:.2}%",
            self.regions,
            self.sheet_area,
            self.used_area,
            self.occupancy * 100.0,
        )
    }
}
