use clap::{Parser, Subcommand};
use std::path::PathBuf;

use imgpipe::types::{Align, Anchor, FlipDirection, RollDirection, StickerPreset, WatermarkAngle};
use imgpipe::{Boundary, SizeSpec};

#[derive(Parser)]
#[command(name = "imgpipe", version, about = "A command-line tool for image processing")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Input image path (omitted: read piped stdin, else open a file picker)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output path (omitted: stream to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Convert the output image to an opaque format (RGB)
    #[arg(long, global = true, default_value_t = false)]
    pub opaque: bool,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resize an image
    Resize {
        /// Size in the format <width>x<height>, <width>x, or x<height>
        size: SizeSpec,
    },

    /// Crop an image: to a content square, or to an explicit rectangle when
    /// any boundary option is given
    Crop {
        /// Align the cropped content in the square
        #[arg(long, value_enum, default_value_t = Align::Center)]
        align: Align,

        /// Left boundary: <int> pixels or <float>x proportion
        #[arg(short = 'l', long)]
        left: Option<Boundary>,

        /// Top boundary
        #[arg(short = 't', long)]
        top: Option<Boundary>,

        /// Right boundary
        #[arg(short = 'r', long)]
        right: Option<Boundary>,

        /// Bottom boundary
        #[arg(short = 'b', long)]
        bottom: Option<Boundary>,
    },

    /// Convert an image to gray-scale
    GrayScale,

    /// Expand the canvas around the image
    Expand {
        /// Target size in the format <width>x<height>, <width>x, or x<height>
        size: SizeSpec,

        /// Fill color in HEX (6 digits opaque, 8 digits with alpha)
        #[arg(long, default_value = "#00000000")]
        fillwith: String,

        /// Placement of the original image on the expanded canvas
        #[arg(long, value_enum, default_value_t = Anchor::Center)]
        align: Anchor,

        /// Horizontal shift of the placement
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dx: i64,

        /// Vertical shift of the placement
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dy: i64,

        /// Sample the fill color from the source image at X Y
        /// (negative coordinates index from the far edge)
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        fillwithpos: Option<Vec<i64>>,
    },

    /// Roll the image with wrap-around
    Roll {
        /// Number of pixels to shift
        shift: u32,

        /// Roll direction
        #[arg(long, value_enum, default_value_t = RollDirection::Right)]
        direction: RollDirection,
    },

    /// Trim the image to its content bounding box
    Trim,

    /// Flip the image
    Flip {
        /// Flip direction
        #[arg(value_enum)]
        direction: FlipDirection,
    },

    /// Rotate the image, expanding the canvas to fit
    Rotate {
        /// Angle in degrees (counter-clockwise)
        #[arg(allow_negative_numbers = true)]
        angle: f32,

        /// Fill color in HEX (6 digits opaque, 8 digits with alpha)
        #[arg(long, default_value = "#00000000")]
        fillwith: String,

        /// Sample the fill color from the source image at X Y
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        fillwithpos: Option<Vec<i64>>,
    },

    /// Add a text watermark
    Watermark {
        /// Watermark text
        #[arg(long)]
        text: String,

        /// Text color in HEX
        #[arg(long, default_value = "FFFFFF")]
        color: String,

        /// Text opacity in percent
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(0..=100))]
        opacity: u8,

        /// Angle in degrees, or "diagonal" for the image's own diagonal
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        angle: WatermarkAngle,

        /// Font size in pixels (omitted: auto-fit to the image)
        #[arg(long)]
        font_size: Option<f32>,

        /// Path to a TTF/OTF font (falls back to the built-in font)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Format an image as a sticker using a named preset
    Sticker {
        /// Sticker preset
        #[arg(value_enum)]
        preset: StickerPreset,
    },
}
