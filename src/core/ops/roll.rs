//! Wrap-around shift: the image is split at the shift boundary along the
//! rolled axis and the two parts swap order.
use image::{DynamicImage, RgbaImage, imageops};

use crate::core::operator::Operator;
use crate::error::Result;
use crate::types::RollDirection;

#[derive(Copy, Clone, Debug)]
pub struct Roll {
    shift: u32,
    direction: RollDirection,
}

impl Roll {
    pub fn new(shift: u32, direction: RollDirection) -> Self {
        Self { shift, direction }
    }
}

impl Operator for Roll {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let rgba = image.into_rgba8();
        let (w, h) = rgba.dimensions();
        let mut rolled = RgbaImage::new(w, h);

        match self.direction {
            RollDirection::Right => {
                let s = self.shift % w;
                let left = imageops::crop_imm(&rgba, 0, 0, w - s, h).to_image();
                let right = imageops::crop_imm(&rgba, w - s, 0, s, h).to_image();
                imageops::replace(&mut rolled, &right, 0, 0);
                imageops::replace(&mut rolled, &left, s as i64, 0);
            }
            RollDirection::Left => {
                let s = self.shift % w;
                let left = imageops::crop_imm(&rgba, 0, 0, s, h).to_image();
                let right = imageops::crop_imm(&rgba, s, 0, w - s, h).to_image();
                imageops::replace(&mut rolled, &right, 0, 0);
                imageops::replace(&mut rolled, &left, (w - s) as i64, 0);
            }
            RollDirection::Up => {
                let s = self.shift % h;
                let top = imageops::crop_imm(&rgba, 0, 0, w, s).to_image();
                let bottom = imageops::crop_imm(&rgba, 0, s, w, h - s).to_image();
                imageops::replace(&mut rolled, &bottom, 0, 0);
                imageops::replace(&mut rolled, &top, 0, (h - s) as i64);
            }
            RollDirection::Down => {
                let s = self.shift % h;
                let top = imageops::crop_imm(&rgba, 0, 0, w, h - s).to_image();
                let bottom = imageops::crop_imm(&rgba, 0, h - s, w, s).to_image();
                imageops::replace(&mut rolled, &bottom, 0, 0);
                imageops::replace(&mut rolled, &top, 0, s as i64);
            }
        }

        Ok(DynamicImage::ImageRgba8(rolled))
    }
}
