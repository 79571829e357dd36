use crate::config::LayoutMode;
use crate::model::BoundingBox;

/// Sorts `boxes` into the deterministic sequence that drives cell
/// assignment. Discovery order from segmentation has no meaning; this is
/// the sole source of ordering truth.
///
/// Grid mode buckets boxes into visual rows: the reference row height is
/// the median box height, and a box's row index is its vertical center
/// divided by that height, rounded half-to-even. Boxes sort by
/// (row, min_x, min_y), tolerating centers that don't align pixel-exactly.
/// Row mode sorts strictly by (min_x, min_y).
pub fn order_boxes(boxes: &mut [BoundingBox], layout: LayoutMode) {
    if boxes.len() < 2 {
        return;
    }
    match layout {
        LayoutMode::Grid => {
            let median_h = median_height(boxes);
            boxes.sort_by_key(|b| {
                let row = (b.center_y() / median_h).round_ties_even() as i64;
                (row, b.min_x, b.min_y)
            });
        }
        LayoutMode::Row => {
            boxes.sort_by_key(|b| (b.min_x, b.min_y));
        }
    }
}

/// Median of the box heights; an even count averages the two middle values.
fn median_height(boxes: &[BoundingBox]) -> f64 {
    let mut heights: Vec<u32> = boxes.iter().map(BoundingBox::height).collect();
    heights.sort_unstable();
    let n = heights.len();
    if n % 2 == 1 {
        heights[n / 2] as f64
    } else {
        (heights[n / 2 - 1] as f64 + heights[n / 2] as f64) / 2.0
    }
}
