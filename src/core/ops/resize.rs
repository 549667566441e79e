//! Resize to a target size, deriving the missing dimension from the
//! original aspect ratio. Resampling is delegated to `fast_image_resize`
//! with a Lanczos3 convolution.
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::core::operator::Operator;
use crate::core::params::SizeSpec;
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug)]
pub struct Resize {
    width: Option<u32>,
    height: Option<u32>,
}

impl Resize {
    /// At least one dimension must be given, and neither may be zero.
    pub fn new(width: Option<u32>, height: Option<u32>) -> Result<Self> {
        if width.is_none() && height.is_none() {
            return Err(Error::MissingParameter {
                arg: "width or height",
            });
        }
        if width == Some(0) || height == Some(0) {
            return Err(Error::invalid("size", "0"));
        }
        Ok(Self { width, height })
    }

    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn height(height: u32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    pub fn from_size(size: SizeSpec) -> Result<Self> {
        Self::new(size.width, size.height)
    }

    /// Target dimensions for a source of `ow` x `oh`. A missing side is
    /// derived by preserving the aspect ratio, rounded toward zero.
    fn target(&self, ow: u32, oh: u32) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (w as f64 / ow as f64 * oh as f64) as u32;
                (w, h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f64 / oh as f64 * ow as f64) as u32;
                (w.max(1), h)
            }
            (None, None) => unreachable!("validated at construction"),
        }
    }
}

impl Operator for Resize {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let (ow, oh) = (image.width(), image.height());
        let (tw, th) = self.target(ow, oh);
        debug!("Resizing {}x{} -> {}x{}", ow, oh, tw, th);

        let rgba = image.into_rgba8();
        let src = Image::from_vec_u8(ow, oh, rgba.into_raw(), PixelType::U8x4)
            .map_err(Error::dependency)?;
        let mut dst = Image::new(tw, th, PixelType::U8x4);

        let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
        let mut resizer = Resizer::new();
        resizer
            .resize(&src, &mut dst, &options)
            .map_err(Error::dependency)?;

        let out = RgbaImage::from_raw(tw, th, dst.into_vec())
            .ok_or_else(|| Error::Dependency("resize produced a malformed buffer".to_string()))?;
        Ok(DynamicImage::ImageRgba8(out))
    }
}
