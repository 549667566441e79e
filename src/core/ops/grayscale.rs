//! Gray-scale conversion. The image is reduced to plain luminance and then
//! restored to four fully opaque channels, so any source transparency is
//! discarded along with the color.
use image::DynamicImage;

use crate::core::operator::Operator;
use crate::error::Result;

#[derive(Copy, Clone, Debug, Default)]
pub struct GrayScale;

impl GrayScale {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for GrayScale {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let luma = image.to_luma8();
        Ok(DynamicImage::ImageRgba8(
            DynamicImage::ImageLuma8(luma).into_rgba8(),
        ))
    }
}
