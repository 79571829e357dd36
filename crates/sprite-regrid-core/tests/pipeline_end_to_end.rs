use image::{DynamicImage, Rgba, RgbaImage};
use sprite_regrid_core::PixelMask;
use sprite_regrid_core::prelude::*;

fn colored_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for yy in y..y + h {
        for xx in x..x + w {
            img.put_pixel(xx, yy, color);
        }
    }
}

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test]
fn two_squares_pack_side_by_side() {
    // 64x64 transparent image with two 8x8 opaque squares.
    let mut img = RgbaImage::new(64, 64);
    colored_rect(&mut img, 0, 0, 8, 8, RED);
    colored_rect(&mut img, 20, 20, 8, 8, BLUE);

    let out = regrid(&DynamicImage::ImageRgba8(img), &SheetConfig::default()).expect("regrid");
    assert_eq!(out.map.frames.len(), 2);
    assert_eq!((out.map.cols, out.map.rows), (2, 1));
    assert_eq!((out.map.cell_width, out.map.cell_height), (8, 8));
    assert_eq!(out.rgba.dimensions(), (16, 8));
}

#[test]
fn pixels_survive_the_round_trip() {
    let mut img = RgbaImage::new(64, 64);
    colored_rect(&mut img, 0, 0, 8, 8, RED);
    colored_rect(&mut img, 20, 20, 8, 8, BLUE);

    let out = regrid(&DynamicImage::ImageRgba8(img), &SheetConfig::default()).expect("regrid");
    // Both frames fill their cells exactly, so the cell origins carry the
    // source colors: top-left square first in reading order.
    assert_eq!(out.rgba.get_pixel(0, 0), &RED);
    assert_eq!(out.rgba.get_pixel(8, 0), &BLUE);
}

#[test]
fn frame_dimensions_match_boxes() {
    let mut img = RgbaImage::new(64, 64);
    colored_rect(&mut img, 1, 2, 9, 7, RED);
    colored_rect(&mut img, 30, 5, 12, 11, BLUE);

    let mask = PixelMask::from_rgba(&img);
    let mut boxes = find_sprite_boxes(&mask, 1);
    order_boxes(&mut boxes, LayoutMode::Grid);
    let frames = extract_frames(&img, &boxes).expect("extract");

    assert_eq!(frames.len(), boxes.len());
    for (frame, b) in frames.iter().zip(&boxes) {
        assert_eq!(frame.width(), b.width());
        assert_eq!(frame.height(), b.height());
        assert_eq!(frame.source, *b);
    }
}

#[test]
fn min_area_filters_noise_regions() {
    let mut img = RgbaImage::new(64, 64);
    colored_rect(&mut img, 0, 0, 8, 8, RED); // box area 64
    colored_rect(&mut img, 40, 40, 3, 3, BLUE); // box area 9, below threshold

    let out = regrid(&DynamicImage::ImageRgba8(img), &SheetConfig::default()).expect("regrid");
    assert_eq!(out.map.frames.len(), 1);
    assert_eq!(out.map.frames[0].source, BoundingBox::new(0, 0, 8, 8));
}

#[test]
fn fully_transparent_image_is_an_error() {
    let img = DynamicImage::ImageRgba8(RgbaImage::new(64, 64));
    match regrid(&img, &SheetConfig::default()) {
        Err(SheetError::NoRegions) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected NoRegions"),
    }
}

#[test]
fn row_layout_runs_end_to_end() {
    let mut img = RgbaImage::new(64, 32);
    colored_rect(&mut img, 0, 0, 8, 8, RED);
    colored_rect(&mut img, 20, 2, 8, 10, BLUE);
    colored_rect(&mut img, 40, 0, 8, 8, RED);

    let cfg = SheetConfig::builder().layout(LayoutMode::Row).build();
    let out = regrid(&DynamicImage::ImageRgba8(img), &cfg).expect("regrid");
    assert_eq!((out.map.cols, out.map.rows), (3, 1));
    assert_eq!(out.rgba.dimensions(), (24, 10));
    // Shorter frames are bottom-anchored against the tallest.
    assert_eq!(out.map.frames[0].y, 2);
    assert_eq!(out.map.frames[1].y, 0);
    assert_eq!(out.map.frames[2].y, 2);
}

#[test]
fn stats_report_full_occupancy_for_uniform_squares() {
    let mut img = RgbaImage::new(64, 64);
    colored_rect(&mut img, 0, 0, 8, 8, RED);
    colored_rect(&mut img, 20, 20, 8, 8, BLUE);

    let out = regrid(&DynamicImage::ImageRgba8(img), &SheetConfig::default()).expect("regrid");
    let stats = out.stats();
    assert_eq!(stats.regions, 2);
    assert_eq!(stats.sheet_area, 128);
    assert_eq!(stats.used_area, 128);
    assert!((stats.occupancy - 1.0).abs() < f64::EPSILON);
    assert!(stats.summary().contains("Regions: 2"));
}
