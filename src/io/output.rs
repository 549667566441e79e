//! Output encoding in the source container format.
use std::io::{Cursor, Write};

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::error::Result;

/// Encode `image` as `format` into `writer`. With `opaque`, or when the
/// format's encoder rejects alpha (JPEG), the image is flattened to RGB
/// first.
pub fn write_image(
    image: &DynamicImage,
    format: ImageFormat,
    opaque: bool,
    writer: &mut impl Write,
) -> Result<()> {
    let flattened;
    let to_encode = if opaque || !supports_alpha(format) {
        flattened = DynamicImage::ImageRgb8(image.to_rgb8());
        &flattened
    } else {
        image
    };

    // Encoders need Seek; encode into memory, then stream out.
    let mut buffer = Cursor::new(Vec::new());
    to_encode.write_to(&mut buffer, format)?;
    writer.write_all(buffer.get_ref())?;
    info!(
        ?format,
        bytes = buffer.get_ref().len(),
        "Image encoded"
    );
    Ok(())
}

fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}
