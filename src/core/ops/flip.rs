//! Mirror the image horizontally or vertically.
use image::DynamicImage;

use crate::core::operator::Operator;
use crate::error::Result;
use crate::types::FlipDirection;

#[derive(Copy, Clone, Debug)]
pub struct Flip {
    direction: FlipDirection,
}

impl Flip {
    pub fn new(direction: FlipDirection) -> Self {
        Self { direction }
    }
}

impl Operator for Flip {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        Ok(match self.direction {
            FlipDirection::Horizontal => image.fliph(),
            FlipDirection::Vertical => image.flipv(),
        })
    }
}
