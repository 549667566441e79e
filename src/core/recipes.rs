//! Named presets that pre-assemble a pipeline for a target use case.
use image::DynamicImage;

use crate::core::operator::{Dynamic, Operator};
use crate::core::ops::{Expand, Resize, Trim};
use crate::core::pipeline::Pipeline;
use crate::types::StickerPreset;

/// Discord sticker format: trim, resize the longer side to 256, expand to a
/// transparent 256x256 square.
pub fn dc_sticker() -> Pipeline {
    sticker(256)
}

/// Telegram sticker format: same shape as [`dc_sticker`] at 512.
pub fn tg_sticker() -> Pipeline {
    sticker(512)
}

pub fn preset(preset: StickerPreset) -> Pipeline {
    match preset {
        StickerPreset::Dc => dc_sticker(),
        StickerPreset::Tg => tg_sticker(),
    }
}

fn sticker(side: u32) -> Pipeline {
    Pipeline::new()
        .add(Trim::new())
        .add(Dynamic::new(move |image: &DynamicImage| {
            if image.width() > image.height() {
                Box::new(Resize::width(side)) as Box<dyn Operator>
            } else {
                Box::new(Resize::height(side))
            }
        }))
        .add(Expand::square(side))
}
