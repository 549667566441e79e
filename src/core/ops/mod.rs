//! The operator set. Each operator owns an immutable configuration and
//! implements the single `Operator::apply` capability; pixel math is
//! delegated to the imaging crates, this module only computes geometry.
pub mod crop;
pub mod expand;
pub mod flip;
pub mod grayscale;
pub mod resize;
pub mod roll;
pub mod rotate;
pub mod trim;
pub mod watermark;

pub use crop::{CropRect, CropSquare};
pub use expand::Expand;
pub use flip::Flip;
pub use grayscale::GrayScale;
pub use resize::Resize;
pub use roll::Roll;
pub use rotate::Rotate;
pub use trim::Trim;
pub use watermark::Watermark;

use image::RgbaImage;

/// Tight bounding box of non-background content, PIL-style: the smallest
/// rectangle containing every pixel with any non-zero channel. Returns
/// `(left, top, right, bottom)` with exclusive right/bottom, or `None` for
/// a fully empty image.
pub(crate) fn bounding_box(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 == [0, 0, 0, 0] {
            continue;
        }
        found = true;
        left = left.min(x);
        top = top.min(y);
        right = right.max(x + 1);
        bottom = bottom.max(y + 1);
    }

    found.then_some((left, top, right, bottom))
}
