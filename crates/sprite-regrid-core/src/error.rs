use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("No sprite regions found (fully transparent image or all components below the minimum area)")]
    NoRegions,
    #[error("Region ({min_x},{min_y})..({max_x},{max_y}) exceeds image bounds {image_w}x{image_h}")]
    OutOfBounds {
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
        image_w: u32,
        image_h: u32,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;
