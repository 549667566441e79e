//! Animated GIF support: decode every frame, run the pipeline over each
//! frame, and re-encode as an animation with the frame delays preserved.
use std::io::{Cursor, Write};

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, DynamicImage, Frame};
use tracing::debug;

use crate::core::pipeline::Pipeline;
use crate::error::Result;

/// Decode all frames of a GIF byte stream.
pub fn decode_frames(bytes: &[u8]) -> Result<Vec<Frame>> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    Ok(decoder.into_frames().collect_frames()?)
}

/// Apply `pipeline` to every frame, keeping each frame's delay and offset.
pub fn map_frames(frames: Vec<Frame>, pipeline: &Pipeline) -> Result<Vec<Frame>> {
    frames
        .into_iter()
        .map(|frame| {
            let delay = frame.delay();
            let (left, top) = (frame.left(), frame.top());
            let processed = pipeline.process(DynamicImage::ImageRgba8(frame.into_buffer()))?;
            Ok(Frame::from_parts(processed.into_rgba8(), left, top, delay))
        })
        .collect()
}

/// Run `pipeline` over every frame of `bytes` and encode the result as an
/// infinitely looping GIF into `writer`. With `opaque`, frame alpha is
/// flattened before encoding.
pub fn process_animated(
    bytes: &[u8],
    pipeline: &Pipeline,
    opaque: bool,
    writer: &mut impl Write,
) -> Result<()> {
    let frames = decode_frames(bytes)?;
    debug!(frames = frames.len(), "Decoded GIF frames");

    let mut processed = map_frames(frames, pipeline)?;
    if opaque {
        processed = processed.into_iter().map(flatten_alpha).collect();
    }

    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(processed)?;
    Ok(())
}

fn flatten_alpha(frame: Frame) -> Frame {
    let delay = frame.delay();
    let (left, top) = (frame.left(), frame.top());
    let mut buffer = frame.into_buffer();
    for pixel in buffer.pixels_mut() {
        pixel[3] = 255;
    }
    Frame::from_parts(buffer, left, top, delay)
}
