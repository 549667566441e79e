//! Shared types and enums used across imgpipe.
//! Includes square-crop alignment (`Align`), the 9-way canvas anchor
//! (`Anchor`), roll/flip directions, the watermark angle, and sticker presets.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Alignment of the cropped content inside the square canvas.
/// The unspecified axis is always centered.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Align {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Align {
    /// Paste offset of a `cw` x `ch` block inside a `side` x `side` square.
    /// Requires `side >= cw` and `side >= ch`.
    pub fn position(self, cw: u32, ch: u32, side: u32) -> (i64, i64) {
        let cx = ((side - cw) / 2) as i64;
        let cy = ((side - ch) / 2) as i64;
        match self {
            Align::Top => (cx, 0),
            Align::Bottom => (cx, (side - ch) as i64),
            Align::Left => (0, cy),
            Align::Right => ((side - cw) as i64, cy),
            Align::Center => (cx, cy),
        }
    }
}

impl std::fmt::Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Align::Top => "top",
            Align::Bottom => "bottom",
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        };
        write!(f, "{}", s)
    }
}

/// 9-way placement of the original image on an expanded canvas.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Anchor {
    #[value(name = "c")]
    Center,
    #[value(name = "t")]
    Top,
    #[value(name = "b")]
    Bottom,
    #[value(name = "l")]
    Left,
    #[value(name = "r")]
    Right,
    #[value(name = "lt")]
    TopLeft,
    #[value(name = "rt")]
    TopRight,
    #[value(name = "lb")]
    BottomLeft,
    #[value(name = "rb")]
    BottomRight,
}

impl Anchor {
    /// Paste offset of an `ow` x `oh` image inside a `tw` x `th` canvas.
    /// Requires `tw >= ow` and `th >= oh`.
    pub fn position(self, ow: u32, oh: u32, tw: u32, th: u32) -> (i64, i64) {
        let cx = ((tw - ow) / 2) as i64;
        let cy = ((th - oh) / 2) as i64;
        let right = (tw - ow) as i64;
        let bottom = (th - oh) as i64;
        match self {
            Anchor::Center => (cx, cy),
            Anchor::Top => (cx, 0),
            Anchor::Bottom => (cx, bottom),
            Anchor::Left => (0, cy),
            Anchor::Right => (right, cy),
            Anchor::TopLeft => (0, 0),
            Anchor::TopRight => (right, 0),
            Anchor::BottomLeft => (0, bottom),
            Anchor::BottomRight => (right, bottom),
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Anchor::Center => "c",
            Anchor::Top => "t",
            Anchor::Bottom => "b",
            Anchor::Left => "l",
            Anchor::Right => "r",
            Anchor::TopLeft => "lt",
            Anchor::TopRight => "rt",
            Anchor::BottomLeft => "lb",
            Anchor::BottomRight => "rb",
        };
        write!(f, "{}", s)
    }
}

/// Direction of the wrap-around roll.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum RollDirection {
    #[value(name = "l")]
    Left,
    #[value(name = "r")]
    Right,
    #[value(name = "u")]
    Up,
    #[value(name = "b")]
    Down,
}

impl std::fmt::Display for RollDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RollDirection::Left => "l",
            RollDirection::Right => "r",
            RollDirection::Up => "u",
            RollDirection::Down => "b",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum FlipDirection {
    #[value(name = "h")]
    Horizontal,
    #[value(name = "v")]
    Vertical,
}

impl std::fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FlipDirection::Horizontal => "h",
            FlipDirection::Vertical => "v",
        };
        write!(f, "{}", s)
    }
}

/// Watermark placement angle: an explicit angle in degrees, or `diagonal`
/// to derive the angle from the image's own aspect ratio.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum WatermarkAngle {
    Degrees(f32),
    Diagonal,
}

impl WatermarkAngle {
    /// Resolve against the target image dimensions.
    pub fn resolve(self, width: u32, height: u32) -> f32 {
        match self {
            WatermarkAngle::Degrees(d) => d,
            WatermarkAngle::Diagonal => (height as f32 / width as f32).atan().to_degrees(),
        }
    }
}

impl std::str::FromStr for WatermarkAngle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("diagonal") {
            return Ok(WatermarkAngle::Diagonal);
        }
        s.parse::<f32>()
            .map(WatermarkAngle::Degrees)
            .map_err(|_| Error::invalid("angle", s))
    }
}

impl std::fmt::Display for WatermarkAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatermarkAngle::Degrees(d) => write!(f, "{}", d),
            WatermarkAngle::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Named sticker recipe targets.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum StickerPreset {
    /// Discord sticker format (256x256)
    Dc,
    /// Telegram sticker format (512x512)
    Tg,
}

impl std::fmt::Display for StickerPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StickerPreset::Dc => "dc",
            StickerPreset::Tg => "tg",
        };
        write!(f, "{}", s)
    }
}
