use crate::config::SheetConfig;
use crate::error::{Result, SheetError};
use crate::extract::extract_frames;
use crate::mask::PixelMask;
use crate::segment::find_sprite_boxes;
use crate::sequence::order_boxes;
use crate::sheet::{SheetOutput, pack_frames};
use image::DynamicImage;
use tracing::{info, instrument};

#[instrument(skip_all)]
/// Runs the full pipeline on a decoded image: mask, segment, order,
/// extract, pack. Data flows strictly forward; no stage's output is
/// mutated after the next stage starts.
///
/// The whole run is single-threaded and synchronous: O(pixels) for
/// segmentation, O(n log n) for ordering, O(total frame pixels) for
/// packing. Per-component fills and per-frame pastes are embarrassingly
/// parallel if that ever becomes worth doing.
pub fn regrid(image: &DynamicImage, cfg: &SheetConfig) -> Result<SheetOutput> {
    let rgba = image.to_rgba8();
    let mask = PixelMask::from_rgba(&rgba);

    let mut boxes = find_sprite_boxes(&mask, cfg.min_area);
    if boxes.is_empty() {
        return Err(SheetError::NoRegions);
    }
    info!(regions = boxes.len(), "found sprite regions");

    order_boxes(&mut boxes, cfg.layout);
    let frames = extract_frames(&rgba, &boxes)?;
    pack_frames(&frames, cfg)
}
