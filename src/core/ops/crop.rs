//! Cropping: to a square around the content bounding box, or to an explicit
//! rectangle given in pixels or image-relative proportions.
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::operator::Operator;
use crate::core::ops::bounding_box;
use crate::core::params::Boundary;
use crate::error::{Error, Result};
use crate::types::Align;

/// Crop to the tight bounding box of non-background content, then paste the
/// result onto a square transparent canvas sized to the larger cropped
/// dimension. A fully empty image yields a 1x1 transparent result.
#[derive(Copy, Clone, Debug)]
pub struct CropSquare {
    align: Align,
}

impl CropSquare {
    pub fn new(align: Align) -> Self {
        Self { align }
    }
}

impl Operator for CropSquare {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let rgba = image.into_rgba8();
        let Some((left, top, right, bottom)) = bounding_box(&rgba) else {
            return Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                1,
                1,
                Rgba([0, 0, 0, 0]),
            )));
        };

        let (cw, ch) = (right - left, bottom - top);
        debug!("Content bounding box: {}x{} at ({}, {})", cw, ch, left, top);
        let cropped = imageops::crop_imm(&rgba, left, top, cw, ch).to_image();

        let side = cw.max(ch);
        let mut square = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0]));
        let (px, py) = self.align.position(cw, ch, side);
        imageops::replace(&mut square, &cropped, px, py);
        Ok(DynamicImage::ImageRgba8(square))
    }
}

/// Crop to an explicit rectangle. Each bound resolves against the current
/// image size, is clamped into bounds, and `right`/`bottom` are further
/// clamped to be at least `left`/`top`.
#[derive(Copy, Clone, Debug)]
pub struct CropRect {
    left: Boundary,
    top: Boundary,
    right: Boundary,
    bottom: Boundary,
}

impl CropRect {
    pub fn new(left: Boundary, top: Boundary, right: Boundary, bottom: Boundary) -> Result<Self> {
        for bound in [left, top, right, bottom] {
            if let Boundary::Fraction(f) = bound {
                if !(0.0..=1.0).contains(&f) {
                    return Err(Error::invalid("boundary", f));
                }
            }
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }
}

impl Operator for CropRect {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let (w, h) = (image.width(), image.height());
        let left = self.left.resolve(w);
        let top = self.top.resolve(h);
        let right = self.right.resolve(w).max(left);
        let bottom = self.bottom.resolve(h).max(top);
        debug!("Cropping to ({}, {}, {}, {})", left, top, right, bottom);

        let rgba = image.into_rgba8();
        let cropped = imageops::crop_imm(&rgba, left, top, right - left, bottom - top).to_image();
        Ok(DynamicImage::ImageRgba8(cropped))
    }
}
