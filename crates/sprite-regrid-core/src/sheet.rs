use crate::compositing::blit_rgba;
use crate::config::{LayoutMode, SheetConfig};
use crate::error::{Result, SheetError};
use crate::model::{Frame, PlacedFrame, SheetMap, SheetStats};
use image::RgbaImage;

/// A packed sheet: the RGBA canvas plus its logical map.
pub struct SheetOutput {
    pub map: SheetMap,
    pub rgba: RgbaImage,
}

impl SheetOutput {
    /// Computes fill statistics for this sheet.
    /// This is a convenience method that delegates to `map.stats()`.
    pub fn stats(&self) -> SheetStats {
        self.map.stats()
    }
}

/// Lays the ordered frames into a fixed-cell canvas sized to the largest
/// frame. Grid mode uses a square-ish `ceil(sqrt(n))`-column grid, row mode
/// a single row. Within a cell every frame is horizontally centered and
/// bottom-anchored, keeping a consistent ground line across frames of
/// differing heights.
///
/// Zero frames is an input error (`NoRegions`).
pub fn pack_frames(frames: &[Frame], cfg: &SheetConfig) -> Result<SheetOutput> {
    if frames.is_empty() {
        return Err(SheetError::NoRegions);
    }

    let cell_w = frames.iter().map(Frame::width).max().unwrap_or(0);
    let cell_h = frames.iter().map(Frame::height).max().unwrap_or(0);
    let n = frames.len();

    let (cols, rows) = match cfg.layout {
        LayoutMode::Grid => {
            let cols = (n as f64).sqrt().ceil() as u32;
            (cols, (n as u32).div_ceil(cols))
        }
        LayoutMode::Row => (n as u32, 1),
    };

    let sheet_w = cols * cell_w;
    let sheet_h = rows * cell_h;

    // RgbaImage::new zero-fills, so the canvas starts fully transparent.
    let mut canvas = RgbaImage::new(sheet_w, sheet_h);
    let mut placed = Vec::with_capacity(n);

    for (i, frame) in frames.iter().enumerate() {
        let col = (i as u32) % cols;
        let row = (i as u32) / cols;

        let x = col * cell_w + (cell_w - frame.width()) / 2;
        let y = row * cell_h + (cell_h - frame.height());

        blit_rgba(&frame.rgba, &mut canvas, x, y);
        placed.push(PlacedFrame {
            index: i,
            col,
            row,
            x,
            y,
            w: frame.width(),
            h: frame.height(),
            source: frame.source,
        });
    }

    let map = SheetMap {
        width: sheet_w,
        height: sheet_h,
        cell_width: cell_w,
        cell_height: cell_h,
        cols,
        rows,
        layout: cfg.layout,
        min_area: cfg.min_area,
        frames: placed,
    };
    Ok(SheetOutput { map, rgba: canvas })
}
