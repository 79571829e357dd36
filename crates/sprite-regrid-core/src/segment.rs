use crate::mask::PixelMask;
use crate::model::BoundingBox;
use tracing::debug;

/// Scans the mask in row-major order and returns the bounding boxes of all
/// 4-connected components of opaque pixels whose box area is at least
/// `min_area`.
///
/// Components are identified by bounding box only, never by pixel
/// membership; boxes of concave shapes may overlap, which is accepted. The
/// filter uses box area `(max_x-min_x)*(max_y-min_y)` rather than true
/// pixel count, so a sparse streak with a large box still passes.
///
/// The returned order is the discovery order of the scan and carries no
/// meaning; callers sequence the boxes via [`crate::sequence::order_boxes`].
pub fn find_sprite_boxes(mask: &PixelMask, min_area: u32) -> Vec<BoundingBox> {
    let (w, h) = (mask.width(), mask.height());
    let mut visited = vec![false; (w as usize) * (h as usize)];
    let mut boxes = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = (y as usize) * (w as usize) + (x as usize);
            if mask.get(x, y) && !visited[idx] {
                let b = flood_fill(mask, &mut visited, x, y);
                if b.area() >= min_area as u64 {
                    boxes.push(b);
                }
            }
        }
    }

    debug!(regions = boxes.len(), "segmentation complete");
    boxes
}

/// Iterative flood fill from `(start_x, start_y)` over 4-connected opaque
/// pixels (shared edge, not corner). The explicit stack keeps deep regions
/// from overflowing the call stack. Visitation is the seen-set: a pixel
/// reached twice is filled once.
fn flood_fill(
    mask: &PixelMask,
    visited: &mut [bool],
    start_x: u32,
    start_y: u32,
) -> BoundingBox {
    let w = mask.width();
    let h = mask.height();
    let mut stack = vec![(start_x, start_y)];

    let (mut min_x, mut max_x) = (start_x, start_x);
    let (mut min_y, mut max_y) = (start_y, start_y);

    while let Some((x, y)) = stack.pop() {
        let idx = (y as usize) * (w as usize) + (x as usize);
        if visited[idx] || !mask.get(x, y) {
            continue;
        }
        visited[idx] = true;

        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);

        if x + 1 < w {
            stack.push((x + 1, y));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
        if y + 1 < h {
            stack.push((x, y + 1));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
    }

    BoundingBox::new(min_x, min_y, max_x + 1, max_y + 1)
}
