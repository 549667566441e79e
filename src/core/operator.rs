//! The single-capability operator contract and the dynamic-dispatch wrapper.
use image::DynamicImage;

use crate::error::Result;

/// A single-purpose, stateless-after-construction pixel transform.
///
/// Operators validate their configuration at construction and must not fail
/// at transform time except for source-dependent contradictions (reported as
/// `Error::InvalidParameter`) or failures surfaced by the underlying imaging
/// crates.
pub trait Operator {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage>;
}

// A bare closure over an image is itself an operator.
impl<F> Operator for F
where
    F: Fn(DynamicImage) -> Result<DynamicImage>,
{
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        self(image)
    }
}

/// Content-dependent dispatch: wraps a pure function from image to operator,
/// evaluated against the current image and applied immediately. Enables
/// branching inside an otherwise static pipeline, e.g. resize by whichever
/// dimension is larger.
pub struct Dynamic {
    select: Box<dyn Fn(&DynamicImage) -> Box<dyn Operator>>,
}

impl Dynamic {
    pub fn new<F>(select: F) -> Self
    where
        F: Fn(&DynamicImage) -> Box<dyn Operator> + 'static,
    {
        Self {
            select: Box::new(select),
        }
    }
}

impl Operator for Dynamic {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        (self.select)(&image).apply(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ops::Resize;
    use image::RgbaImage;

    #[test]
    fn dynamic_selects_operator_from_image_content() {
        let op = Dynamic::new(|img| {
            if img.width() > img.height() {
                Box::new(Resize::width(64))
            } else {
                Box::new(Resize::height(64))
            }
        });

        let landscape = DynamicImage::ImageRgba8(RgbaImage::new(200, 100));
        let out = op.apply(landscape).unwrap();
        assert_eq!((out.width(), out.height()), (64, 32));

        let portrait = DynamicImage::ImageRgba8(RgbaImage::new(100, 200));
        let out = op.apply(portrait).unwrap();
        assert_eq!((out.width(), out.height()), (32, 64));
    }

    #[test]
    fn closures_are_operators() {
        let identity = |image: DynamicImage| Ok(image);
        let img = DynamicImage::ImageRgba8(RgbaImage::new(3, 3));
        let out = identity.apply(img).unwrap();
        assert_eq!((out.width(), out.height()), (3, 3));
    }
}
