//! Rotation with canvas expansion and fill. The canvas is sized to exactly
//! contain the rotated bounding box; the rotated content is centered on it
//! over the fill color.
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use tracing::debug;

use crate::core::fill::FillSpec;
use crate::core::operator::Operator;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct Rotate {
    angle: f32,
    fill: FillSpec,
}

impl Rotate {
    pub fn new(angle: f32, fill: FillSpec) -> Self {
        Self { angle, fill }
    }
}

impl Operator for Rotate {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let rgba = image.into_rgba8();
        let fill = self.fill.resolve(&rgba);
        let rotated = rotate_with_expand(&rgba, self.angle, Rgba([0, 0, 0, 0]));
        debug!(
            "Rotated {}x{} by {} degrees -> {}x{}",
            rgba.width(),
            rgba.height(),
            self.angle,
            rotated.width(),
            rotated.height()
        );

        // Lay the rotated content over the fill so transparent corners and
        // any transparency in the source show the fill color.
        let mut canvas = RgbaImage::from_pixel(rotated.width(), rotated.height(), fill);
        imageops::overlay(&mut canvas, &rotated, 0, 0);
        Ok(DynamicImage::ImageRgba8(canvas))
    }
}

/// Rotate counter-clockwise by `degrees`, expanding the canvas to exactly
/// contain the rotated bounding box: `|w cos| + |h sin|` by
/// `|h cos| + |w sin|`, truncated. New area is `background`.
pub(crate) fn rotate_with_expand(src: &RgbaImage, degrees: f32, background: Rgba<u8>) -> RgbaImage {
    let (w, h) = src.dimensions();
    let theta = degrees.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let ew = ((w as f32 * cos + h as f32 * sin) as u32).max(1);
    let eh = ((h as f32 * cos + w as f32 * sin) as u32).max(1);

    // Rotate inside a square canvas large enough to hold the content at any
    // angle, then crop the expanded bounding box out of its center.
    let diag = ((w as f32).hypot(h as f32).ceil() as u32).max(1);
    let mut stage = RgbaImage::from_pixel(diag, diag, background);
    imageops::replace(
        &mut stage,
        src,
        ((diag - w) / 2) as i64,
        ((diag - h) / 2) as i64,
    );

    // imageproc rotates clockwise for positive theta; negate for the
    // conventional counter-clockwise angle.
    let rotated = rotate_about_center(&stage, -theta, Interpolation::Bilinear, background);
    imageops::crop_imm(&rotated, (diag - ew) / 2, (diag - eh) / 2, ew, eh).to_image()
}
