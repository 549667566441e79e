//! High-level, ergonomic entry points: resolve an input, run a pipeline
//! over it, and encode the result. Prefer these over wiring the `io` and
//! `core` modules together by hand when embedding imgpipe.
use std::io::Write;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::core::pipeline::Pipeline;
use crate::error::Result;
use crate::io::gif::process_animated;
use crate::io::{resolve_input, resolve_source, write_image};

/// Resolve the input (path, stdin, or dialog), run the pipeline, and encode
/// the result into `writer` using the source image's container format. GIF
/// inputs are processed frame by frame and re-encoded as an animation.
pub fn run_to_writer(
    input: Option<&Path>,
    pipeline: &Pipeline,
    opaque: bool,
    writer: &mut impl Write,
) -> Result<()> {
    let (bytes, format) = resolve_source(input)?;
    if format == ImageFormat::Gif {
        return process_animated(&bytes, pipeline, opaque, writer);
    }
    let image = image::load_from_memory_with_format(&bytes, format)?;
    let output = pipeline.process(image)?;
    write_image(&output, format, opaque, writer)
}

/// Load an image from a path and run the pipeline, returning the decoded
/// result for further in-memory use.
pub fn process_path(input: &Path, pipeline: &Pipeline) -> Result<DynamicImage> {
    let (image, _format) = resolve_input(Some(input))?;
    pipeline.process(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ops::Resize;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn run_to_writer_streams_in_source_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        RgbaImage::from_pixel(200, 100, Rgba([0, 0, 255, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let pipeline = Pipeline::new().add(Resize::width(100));
        let mut out = Vec::new();
        run_to_writer(Some(&path), &pipeline, false, &mut out).unwrap();

        let decoded = image::load_from_memory_with_format(&out, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 50));
    }

    #[test]
    fn process_path_returns_decoded_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        RgbaImage::from_pixel(64, 64, Rgba([9, 9, 9, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let out = process_path(&path, &Pipeline::new()).unwrap();
        assert_eq!((out.width(), out.height()), (64, 64));
    }
}
