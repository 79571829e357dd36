use crate::error::{Result, SheetError};
use crate::model::{BoundingBox, Frame};
use image::{GenericImageView, RgbaImage};

/// Copies the pixel rectangle `[min_x,max_x) × [min_y,max_y)` of every box
/// out of `image`, one frame per box, index-for-index. Each frame owns its
/// pixels, so the source image can be dropped afterwards.
///
/// Boxes derived by segmentation of the same image are always in bounds;
/// the check here guards the invariant rather than a reachable path.
pub fn extract_frames(image: &RgbaImage, boxes: &[BoundingBox]) -> Result<Vec<Frame>> {
    let (image_w, image_h) = image.dimensions();
    let mut frames = Vec::with_capacity(boxes.len());
    for b in boxes {
        if b.max_x > image_w || b.max_y > image_h {
            return Err(SheetError::OutOfBounds {
                min_x: b.min_x,
                min_y: b.min_y,
                max_x: b.max_x,
                max_y: b.max_y,
                image_w,
                image_h,
            });
        }
        let rgba = image
            .view(b.min_x, b.min_y, b.width(), b.height())
            .to_image();
        frames.push(Frame { source: *b, rgba });
    }
    Ok(frames)
}
