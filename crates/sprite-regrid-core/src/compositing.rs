use image::RgbaImage;

/// Blit `src` onto `canvas` with its top-left at (dx, dy).
///
/// A straight pixel copy: the canvas starts fully transparent, so the
/// frame's own alpha channel survives without blending.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(xx, yy));
            }
        }
    }
}
