//! Fill-color resolution shared by the expand and rotate operators.
//!
//! A fill is either a hex color string (6-digit treated as fully opaque,
//! 8-digit carries alpha) or a pixel sampled from the source image, where
//! negative coordinates index from the far edge.
use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillSpec {
    Color(Rgba<u8>),
    Sample { x: i64, y: i64 },
}

impl FillSpec {
    pub const TRANSPARENT: FillSpec = FillSpec::Color(Rgba([0, 0, 0, 0]));

    /// Parse a hex color string such as `#RRGGBB` or `#RRGGBBAA` (leading
    /// `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(FillSpec::Color(parse_hex_rgba(hex)?))
    }

    /// Build the fill from CLI options: a sample position wins over the hex
    /// string when both are given.
    pub fn from_options(fillwith: &str, fillwithpos: Option<(i64, i64)>) -> Result<Self> {
        match fillwithpos {
            Some((x, y)) => Ok(FillSpec::Sample { x, y }),
            None => FillSpec::from_hex(fillwith),
        }
    }

    /// Resolve to a concrete color against the source image.
    pub fn resolve(self, image: &RgbaImage) -> Rgba<u8> {
        match self {
            FillSpec::Color(c) => c,
            FillSpec::Sample { x, y } => {
                let (px, py) = adjust_position(x, y, image.width(), image.height());
                *image.get_pixel(px, py)
            }
        }
    }
}

/// Resolve possibly-negative sample coordinates, clamped into bounds.
fn adjust_position(x: i64, y: i64, width: u32, height: u32) -> (u32, u32) {
    let resolve = |v: i64, extent: u32| -> u32 {
        let v = if v >= 0 { v } else { extent as i64 + v };
        v.clamp(0, extent as i64 - 1) as u32
    };
    (resolve(x, width), resolve(y, height))
}

pub fn parse_hex_rgba(hex: &str) -> Result<Rgba<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let digits = match digits.len() {
        6 => format!("{digits}FF"),
        8 => digits.to_string(),
        _ => return Err(Error::invalid("fillwith", hex)),
    };
    let mut channels = [0u8; 4];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| Error::invalid("fillwith", hex))?;
    }
    Ok(Rgba(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_six_digits_is_opaque() {
        assert_eq!(parse_hex_rgba("FF8000").unwrap(), Rgba([255, 128, 0, 255]));
        assert_eq!(parse_hex_rgba("#FF8000").unwrap(), Rgba([255, 128, 0, 255]));
    }

    #[test]
    fn hex_eight_digits_carries_alpha() {
        assert_eq!(
            parse_hex_rgba("#00000000").unwrap(),
            Rgba([0, 0, 0, 0])
        );
        assert_eq!(
            parse_hex_rgba("12345678").unwrap(),
            Rgba([0x12, 0x34, 0x56, 0x78])
        );
    }

    #[test]
    fn hex_rejects_malformed_strings() {
        assert!(parse_hex_rgba("#FFF").is_err());
        assert!(parse_hex_rgba("GGGGGG").is_err());
        assert!(parse_hex_rgba("").is_err());
    }

    #[test]
    fn sample_supports_negative_indexing() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        img.put_pixel(3, 3, Rgba([9, 9, 9, 255]));
        let fill = FillSpec::Sample { x: -1, y: -1 };
        assert_eq!(fill.resolve(&img), Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn sample_clamps_out_of_range_positions() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([7, 7, 7, 255]));
        let fill = FillSpec::Sample { x: 100, y: -100 };
        assert_eq!(fill.resolve(&img), Rgba([7, 7, 7, 255]));
    }
}
