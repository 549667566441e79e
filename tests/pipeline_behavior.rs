//! End-to-end behavior of pipelines built from the public API.
//!
//! Each test builds real pixel data with known geometry, runs it through a
//! pipeline, and checks the output dimensions and pixel placement. Wrong
//! offsets, wrong derived sizes, and wrong fill placement all show up as
//! concrete pixel mismatches.

use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};

use imgpipe::core::fill::FillSpec;
use imgpipe::{
    Align, Anchor, Boundary, CropRect, CropSquare, Dynamic, Expand, Flip, FlipDirection,
    GrayScale, Operator, Pipeline, Resize, Roll, RollDirection, Rotate, SizeSpec, Trim,
    Watermark, WatermarkAngle, dc_sticker, tg_sticker,
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn solid(w: u32, h: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, color))
}

/// A transparent canvas with an opaque block at the given rectangle.
fn block(w: u32, h: u32, x0: u32, y0: u32, bw: u32, bh: u32) -> DynamicImage {
    let mut img = RgbaImage::from_pixel(w, h, CLEAR);
    for y in y0..y0 + bh {
        for x in x0..x0 + bw {
            img.put_pixel(x, y, RED);
        }
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn resize_derives_missing_height_from_aspect_ratio() {
    let size: SizeSpec = "100x".parse().unwrap();
    let pipeline = Pipeline::new().add(Resize::from_size(size).unwrap());
    let out = pipeline.process(solid(200, 100, RED)).unwrap();
    assert_eq!(out.dimensions(), (100, 50));
}

#[test]
fn resize_derives_missing_width_from_aspect_ratio() {
    let size: SizeSpec = "x50".parse().unwrap();
    let pipeline = Pipeline::new().add(Resize::from_size(size).unwrap());
    let out = pipeline.process(solid(200, 100, RED)).unwrap();
    assert_eq!(out.dimensions(), (100, 50));
}

#[test]
fn crop_rect_fraction_and_pixel_boundaries_agree() {
    let src = solid(200, 200, RED);

    let by_fraction = CropRect::new(
        Boundary::Pixels(0),
        Boundary::Pixels(0),
        Boundary::Fraction(0.5),
        Boundary::Fraction(0.5),
    )
    .unwrap();
    let by_pixels = CropRect::new(
        Boundary::Pixels(0),
        Boundary::Pixels(0),
        Boundary::Pixels(100),
        Boundary::Pixels(100),
    )
    .unwrap();

    let a = by_fraction.apply(src.clone()).unwrap();
    let b = by_pixels.apply(src).unwrap();
    assert_eq!(a.dimensions(), (100, 100));
    assert_eq!(a.to_rgba8(), b.to_rgba8());
}

#[test]
fn crop_square_centers_wide_content() {
    // 40x20 block in a 100x100 canvas: square side is 40, content centered.
    let src = block(100, 100, 10, 10, 40, 20);
    let out = CropSquare::new(Align::Center).apply(src).unwrap();
    assert_eq!(out.dimensions(), (40, 40));

    let rgba = out.to_rgba8();
    assert_eq!(*rgba.get_pixel(20, 20), RED);
    assert_eq!(*rgba.get_pixel(20, 5), CLEAR);
    assert_eq!(*rgba.get_pixel(20, 35), CLEAR);
}

#[test]
fn trim_then_expand_restores_square_canvas() {
    let src = block(100, 100, 30, 40, 20, 10);
    let pipeline = Pipeline::new().add(Trim::new()).add(Expand::square(64));
    let out = pipeline.process(src).unwrap();
    assert_eq!(out.dimensions(), (64, 64));

    // Content is centered, surrounded by transparent fill.
    let rgba = out.to_rgba8();
    assert_eq!(*rgba.get_pixel(32, 32), RED);
    assert_eq!(*rgba.get_pixel(0, 0), CLEAR);
}

#[test]
fn expand_rejects_target_smaller_than_source() {
    let op = Expand::from_size(
        "50x50".parse().unwrap(),
        FillSpec::TRANSPARENT,
        Anchor::Center,
        0,
        0,
    );
    assert!(op.apply(solid(100, 100, RED)).is_err());
}

#[test]
fn expand_anchors_and_fills() {
    let op = Expand::from_size(
        "20x20".parse().unwrap(),
        FillSpec::from_hex("#0000FF").unwrap(),
        Anchor::TopLeft,
        0,
        0,
    );
    let out = op.apply(solid(10, 10, RED)).unwrap();
    let rgba = out.to_rgba8();
    assert_eq!(*rgba.get_pixel(0, 0), RED);
    assert_eq!(*rgba.get_pixel(19, 19), Rgba([0, 0, 255, 255]));
}

#[test]
fn roll_round_trips() {
    let src = block(30, 30, 0, 0, 5, 30);
    let forward = Roll::new(7, RollDirection::Right);
    let backward = Roll::new(7, RollDirection::Left);

    let rolled = forward.apply(src.clone()).unwrap();
    assert_eq!(*rolled.to_rgba8().get_pixel(7, 0), RED);
    assert_eq!(*rolled.to_rgba8().get_pixel(0, 0), CLEAR);

    let restored = backward.apply(rolled).unwrap();
    assert_eq!(restored.to_rgba8(), src.to_rgba8());
}

#[test]
fn flip_twice_is_identity() {
    let src = block(20, 10, 0, 0, 5, 5);
    let flip = Flip::new(FlipDirection::Horizontal);
    let once = flip.apply(src.clone()).unwrap();
    assert_ne!(once.to_rgba8(), src.to_rgba8());
    let twice = flip.apply(once).unwrap();
    assert_eq!(twice.to_rgba8(), src.to_rgba8());
}

#[test]
fn rotate_quarter_turn_swaps_dimensions() {
    let out = Rotate::new(90.0, FillSpec::TRANSPARENT)
        .apply(solid(100, 60, RED))
        .unwrap();
    let (w, h) = out.dimensions();
    assert!((59..=60).contains(&w), "width {w}");
    assert!((99..=100).contains(&h), "height {h}");
}

#[test]
fn grayscale_equalizes_channels() {
    let out = GrayScale::new()
        .apply(solid(4, 4, Rgba([200, 50, 10, 255])))
        .unwrap();
    let px = out.to_rgba8()[(0, 0)];
    assert_eq!(px[0], px[1]);
    assert_eq!(px[1], px[2]);
}

#[test]
fn empty_pipeline_is_identity() {
    let src = block(10, 10, 2, 2, 3, 3);
    let out = Pipeline::new().process(src.clone()).unwrap();
    assert_eq!(out.to_rgba8(), src.to_rgba8());
}

#[test]
fn pipeline_matches_sequential_application() {
    let src = block(100, 100, 10, 10, 40, 20);

    let piped = Pipeline::new()
        .add(Trim::new())
        .add(Resize::width(20))
        .process(src.clone())
        .unwrap();

    let trimmed = Trim::new().apply(src).unwrap();
    let sequential = Resize::width(20).apply(trimmed).unwrap();
    assert_eq!(piped.to_rgba8(), sequential.to_rgba8());
}

#[test]
fn dynamic_operator_branches_on_orientation() {
    let resize_longer = || {
        Dynamic::new(|img: &DynamicImage| {
            if img.width() >= img.height() {
                Box::new(Resize::width(32)) as Box<dyn Operator>
            } else {
                Box::new(Resize::height(32))
            }
        })
    };

    let wide = resize_longer().apply(solid(128, 64, RED)).unwrap();
    assert_eq!(wide.dimensions(), (32, 16));

    let tall = resize_longer().apply(solid(64, 128, RED)).unwrap();
    assert_eq!(tall.dimensions(), (16, 32));
}

#[test]
fn sticker_recipes_produce_preset_squares() {
    // Off-center wide content: the recipe trims, scales by the longer side,
    // and pads to a square.
    let src = block(300, 200, 20, 30, 200, 80);
    let dc = dc_sticker().process(src.clone()).unwrap();
    assert_eq!(dc.dimensions(), (256, 256));

    let tg = tg_sticker().process(src).unwrap();
    assert_eq!(tg.dimensions(), (512, 512));

    // The scaled content spans the full width and is vertically padded.
    let rgba = tg.to_rgba8();
    assert_eq!(rgba.get_pixel(256, 256)[3], 255);
    assert_eq!(rgba.get_pixel(256, 10)[3], 0);
}

#[test]
fn watermark_keeps_dimensions_and_marks_pixels() {
    let op = Watermark::new(
        "imgpipe",
        "FFFFFF",
        80,
        WatermarkAngle::Diagonal,
        None,
        None,
    )
    .unwrap();
    let src = solid(200, 100, Rgba([0, 0, 0, 255]));
    let out = op.apply(src.clone()).unwrap();
    assert_eq!(out.dimensions(), (200, 100));
    assert_ne!(out.to_rgba8(), src.to_rgba8());
}

#[test]
fn animated_gif_is_processed_frame_by_frame() {
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anim.gif");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GifEncoder::new(file);
        let delay = Delay::from_numer_denom_ms(100, 1);
        encoder
            .encode_frames(vec![
                Frame::from_parts(
                    RgbaImage::from_pixel(20, 10, Rgba([255, 0, 0, 255])),
                    0,
                    0,
                    delay,
                ),
                Frame::from_parts(
                    RgbaImage::from_pixel(20, 10, Rgba([0, 255, 0, 255])),
                    0,
                    0,
                    delay,
                ),
            ])
            .unwrap();
    }

    let pipeline = Pipeline::new().add(Resize::width(10));
    let mut out = Vec::new();
    imgpipe::run_to_writer(Some(&path), &pipeline, false, &mut out).unwrap();

    let frames = imgpipe::io::gif::decode_frames(&out).unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].buffer().dimensions(), (10, 5));
}

#[test]
fn grayscale_discards_transparency() {
    let out = GrayScale::new()
        .apply(solid(4, 4, Rgba([200, 50, 10, 128])))
        .unwrap();
    assert_eq!(out.to_rgba8().get_pixel(0, 0)[3], 255);
}

#[test]
fn run_to_writer_round_trips_through_source_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    block(200, 200, 50, 50, 100, 100)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let pipeline = Pipeline::new().add(Trim::new());
    let mut out = Vec::new();
    imgpipe::run_to_writer(Some(&path), &pipeline, false, &mut out).unwrap();

    let decoded = image::load_from_memory_with_format(&out, ImageFormat::Png).unwrap();
    assert_eq!(decoded.dimensions(), (100, 100));
}
