//! Trim to the content bounding box exactly, with no squaring.
use image::{DynamicImage, Rgba, RgbaImage, imageops};

use crate::core::operator::Operator;
use crate::core::ops::bounding_box;
use crate::error::Result;

#[derive(Copy, Clone, Debug, Default)]
pub struct Trim;

impl Trim {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for Trim {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let rgba = image.into_rgba8();
        let Some((left, top, right, bottom)) = bounding_box(&rgba) else {
            return Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                1,
                1,
                Rgba([0, 0, 0, 0]),
            )));
        };
        let cropped =
            imageops::crop_imm(&rgba, left, top, right - left, bottom - top).to_image();
        Ok(DynamicImage::ImageRgba8(cropped))
    }
}
