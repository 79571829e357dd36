use crate::model::SheetMap;
use serde_json::{Value, json};

/// Serialize a `SheetMap` as a JSON object `{ frames, meta }`.
/// Per-frame entries carry the placement cell/rect and the source rect in
/// the original image; `meta` carries the sheet geometry and the settings
/// that produced it.
pub fn to_json(map: &SheetMap) -> Value {
    let frames: Vec<Value> = map
        .frames
        .iter()
        .map(|f| {
            json!({
                "index": f.index,
                "cell": {"col": f.col, "row": f.row},
                "frame": {"x": f.x, "y": f.y, "w": f.w, "h": f.h},
                "source": {
                    "x": f.source.min_x,
                    "y": f.source.min_y,
                    "w": f.source.width(),
                    "h": f.source.height(),
                },
            })
        })
        .collect();
    json!({
        "frames": frames,
        "meta": {
            "app": "sprite-regrid",
            "version": env!("CARGO_PKG_VERSION"),
            "format": "RGBA8888",
            "size": {"w": map.width, "h": map.height},
            "cell": {"w": map.cell_width, "h": map.cell_height},
            "grid": {"cols": map.cols, "rows": map.rows},
            "layout": map.layout,
            "min_area": map.min_area,
        }
    })
}
