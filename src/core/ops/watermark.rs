//! Text watermarking. The text is drawn on a transparent overlay sized to
//! the source, rotated with canvas expansion, squeezed back to the source
//! dimensions, and alpha-composited over the image.
use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, PxScale};
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::{debug, warn};

use crate::core::fill::parse_hex_rgba;
use crate::core::operator::Operator;
use crate::core::ops::rotate::rotate_with_expand;
use crate::error::{Error, Result};
use crate::types::WatermarkAngle;

/// Fallback font, embedded so watermarking works without any font installed.
static DEFAULT_FONT: &[u8] = include_bytes!("../../../assets/DejaVuSans.ttf");

#[derive(Clone, Debug)]
pub struct Watermark {
    text: String,
    color: Rgba<u8>,
    angle: WatermarkAngle,
    font_size: Option<f32>,
    font_path: Option<PathBuf>,
}

impl Watermark {
    /// `color` is a 6-digit hex string; `opacity` is a percentage in
    /// `0..=100` applied as the text alpha. `font_size` of `None` auto-fits
    /// the text to the image bounds.
    pub fn new(
        text: impl Into<String>,
        color: &str,
        opacity: u8,
        angle: WatermarkAngle,
        font_size: Option<f32>,
        font_path: Option<PathBuf>,
    ) -> Result<Self> {
        if opacity > 100 {
            return Err(Error::invalid("opacity", opacity));
        }
        if let Some(size) = font_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::invalid("font-size", size));
            }
        }
        let rgb = parse_hex_rgba(color)?;
        let alpha = (255.0 * (opacity as f32 / 100.0)) as u8;
        Ok(Self {
            text: text.into(),
            color: Rgba([rgb[0], rgb[1], rgb[2], alpha]),
            angle,
            font_size,
            font_path,
        })
    }
}

impl Operator for Watermark {
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        let (w, h) = (image.width(), image.height());
        let angle = self.angle.resolve(w, h);
        let font = load_font(self.font_path.as_deref())?;
        let size = match self.font_size {
            Some(size) => size,
            None => auto_font_size(&font, &self.text, w, h, angle),
        };
        debug!("Watermark text at {}px, {} degrees", size, angle);
        let scale = PxScale::from(size);

        let mut overlay = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
        let (tw, th) = text_size(scale, &font, &self.text);
        let x = (w.saturating_sub(tw) / 2) as i32;
        let y = (h.saturating_sub(th) / 2) as i32;
        draw_text_mut(&mut overlay, self.color, x, y, scale, &font, &self.text);

        let rotated = rotate_with_expand(&overlay, angle, Rgba([0, 0, 0, 0]));
        let resized = imageops::resize(&rotated, w, h, imageops::FilterType::Lanczos3);

        let mut base = image.into_rgba8();
        imageops::overlay(&mut base, &resized, 0, 0);
        Ok(DynamicImage::ImageRgba8(base))
    }
}

/// Load the requested font file, falling back to the embedded default when
/// the path is absent or the file cannot be read or parsed.
fn load_font(path: Option<&Path>) -> Result<FontArc> {
    if let Some(path) = path {
        match std::fs::read(path) {
            Ok(bytes) => match FontArc::try_from_vec(bytes) {
                Ok(font) => return Ok(font),
                Err(e) => warn!("Unusable font {}: {}. Using built-in font", path.display(), e),
            },
            Err(e) => warn!("Cannot read font {}: {}. Using built-in font", path.display(), e),
        }
    }
    FontArc::try_from_slice(DEFAULT_FONT).map_err(Error::dependency)
}

/// Best-effort auto-fit: measure the text at a large probe scale, project
/// its box through the rotation, and scale the probe down so the projected
/// box fits the image.
fn auto_font_size(font: &FontArc, text: &str, width: u32, height: u32, angle_deg: f32) -> f32 {
    const PROBE: f32 = 1000.0;
    let (tw, th) = text_size(PxScale::from(PROBE), font, text);
    if tw == 0 || th == 0 {
        return PROBE;
    }
    let theta = angle_deg.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let rotated_w = tw as f32 * cos + th as f32 * sin;
    let rotated_h = tw as f32 * sin + th as f32 * cos;
    let factor = (width as f32 / rotated_w).min(height as f32 / rotated_h);
    (PROBE * factor).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([10, 20, 30, 255]),
        ))
    }

    #[test]
    fn output_keeps_source_dimensions() {
        let op = Watermark::new("sample", "FFFFFF", 30, WatermarkAngle::Degrees(0.0), None, None)
            .unwrap();
        let out = op.apply(base(200, 120)).unwrap();
        assert_eq!((out.width(), out.height()), (200, 120));
    }

    #[test]
    fn watermark_changes_pixels_somewhere() {
        let op = Watermark::new(
            "WATERMARK",
            "FFFFFF",
            80,
            WatermarkAngle::Diagonal,
            None,
            None,
        )
        .unwrap();
        let out = op.apply(base(160, 90)).unwrap().into_rgba8();
        let touched = out
            .pixels()
            .any(|p| *p != Rgba([10, 20, 30, 255]));
        assert!(touched);
    }

    #[test]
    fn opacity_above_hundred_is_rejected() {
        assert!(
            Watermark::new("x", "FFFFFF", 101, WatermarkAngle::Degrees(0.0), None, None).is_err()
        );
    }

    #[test]
    fn nonpositive_font_size_is_rejected() {
        assert!(
            Watermark::new("x", "FFFFFF", 30, WatermarkAngle::Degrees(0.0), Some(0.0), None)
                .is_err()
        );
    }

    #[test]
    fn missing_font_file_falls_back_to_builtin() {
        let op = Watermark::new(
            "fallback",
            "FFFFFF",
            50,
            WatermarkAngle::Degrees(0.0),
            Some(24.0),
            Some(PathBuf::from("/definitely/not/a/font.ttf")),
        )
        .unwrap();
        assert!(op.apply(base(100, 100)).is_ok());
    }

    #[test]
    fn auto_size_shrinks_for_longer_text() {
        let font = load_font(None).unwrap();
        let short = auto_font_size(&font, "hi", 400, 200, 0.0);
        let long = auto_font_size(&font, "a much longer watermark text", 400, 200, 0.0);
        assert!(long < short);
    }
}
