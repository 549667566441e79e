//! Expand the canvas around the original image, filling the new area with a
//! hex color or a pixel sampled from the source.
use image::{DynamicImage, RgbaImage, imageops};
use tracing::debug;

use crate::core::fill::FillSpec;
use crate::core::operator::Operator;
use crate::core::params::SizeSpec;
use crate::error::{Error, Result};
use crate::types::Anchor;

#[derive(Clone, Debug)]
pub struct Expand {
    width: Option<u32>,
    height: Option<u32>,
    fill: FillSpec,
    anchor: Anchor,
    dx: i64,
    dy: i64,
}

impl Expand {
    pub fn new(
        width: Option<u32>,
        height: Option<u32>,
        fill: FillSpec,
        anchor: Anchor,
        dx: i64,
        dy: i64,
    ) -> Self {
        Self {
            width,
            height,
            fill,
            anchor,
            dx,
            dy,
        }
    }

    pub fn from_size(size: SizeSpec, fill: FillSpec, anchor: Anchor, dx: i64, dy: i64) -> Self {
        Self::new(size.width, size.height, fill, anchor, dx, dy)
    }

    /// Centered expansion to a transparent `side` x `side` canvas.
    pub fn square(side: u32) -> Self {
        Self::new(
            Some(side),
            Some(side),
            FillSpec::TRANSPARENT,
            Anchor::Center,
            0,
            0,
        )
    }
}

impl Operator for Expand {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let (ow, oh) = (image.width(), image.height());
        let tw = self.width.unwrap_or(ow);
        let th = self.height.unwrap_or(oh);
        if tw < ow || th < oh {
            return Err(Error::invalid("size", format!("{}x{} (source is {}x{})", tw, th, ow, oh)));
        }

        let rgba = image.into_rgba8();
        let fill = self.fill.resolve(&rgba);
        let mut canvas = RgbaImage::from_pixel(tw, th, fill);

        let (px, py) = self.anchor.position(ow, oh, tw, th);
        // Shift by (dx, dy), then clamp so the original stays fully inside.
        let px = (px + self.dx).clamp(0, (tw - ow) as i64);
        let py = (py + self.dy).clamp(0, (th - oh) as i64);
        debug!("Expanding {}x{} -> {}x{} at ({}, {})", ow, oh, tw, th, px, py);

        imageops::replace(&mut canvas, &rgba, px, py);
        Ok(DynamicImage::ImageRgba8(canvas))
    }
}
