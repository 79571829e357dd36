use image::RgbaImage;

/// Binary occupancy grid derived from pixel alpha: one entry per source
/// pixel, row-major, true where alpha > 0. Immutable once built.
#[derive(Debug, Clone)]
pub struct PixelMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl PixelMask {
    /// Builds the mask from a decoded RGBA buffer.
    ///
    /// The caller is responsible for RGBA conversion (e.g.
    /// `DynamicImage::to_rgba8`); an `RgbaImage` always carries an alpha
    /// channel, so this cannot fail.
    pub fn from_rgba(rgba: &RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for px in rgba.pixels() {
            data.push(px[3] > 0);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if the pixel at (x, y) is opaque. Callers must stay in bounds.
    pub fn get(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }
}
