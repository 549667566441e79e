use std::fs::File;
use std::io::Write;

use image::DynamicImage;
use tracing::info;

use imgpipe::core::fill::FillSpec;
use imgpipe::core::operator::Operator;
use imgpipe::core::recipes;
use imgpipe::{
    Boundary, CropRect, CropSquare, Expand, Flip, GrayScale, Pipeline, Resize, Roll, Rotate, Trim,
    Watermark, api,
};

use super::args::{CliArgs, Command};

fn fillwithpos_pair(fillwithpos: Option<Vec<i64>>) -> Option<(i64, i64)> {
    fillwithpos.map(|pos| (pos[0], pos[1]))
}

fn build_operator(command: Command) -> imgpipe::Result<Box<dyn Operator>> {
    Ok(match command {
        Command::Resize { size } => Box::new(Resize::from_size(size)?),

        Command::Crop {
            align,
            left,
            top,
            right,
            bottom,
        } => {
            if left.is_some() || top.is_some() || right.is_some() || bottom.is_some() {
                Box::new(CropRect::new(
                    left.unwrap_or(Boundary::Pixels(0)),
                    top.unwrap_or(Boundary::Pixels(0)),
                    right.unwrap_or(Boundary::Fraction(1.0)),
                    bottom.unwrap_or(Boundary::Fraction(1.0)),
                )?)
            } else {
                Box::new(CropSquare::new(align))
            }
        }

        Command::GrayScale => Box::new(GrayScale::new()),

        Command::Expand {
            size,
            fillwith,
            align,
            dx,
            dy,
            fillwithpos,
        } => {
            let fill = FillSpec::from_options(&fillwith, fillwithpos_pair(fillwithpos))?;
            Box::new(Expand::from_size(size, fill, align, dx, dy))
        }

        Command::Roll { shift, direction } => Box::new(Roll::new(shift, direction)),

        Command::Trim => Box::new(Trim::new()),

        Command::Flip { direction } => Box::new(Flip::new(direction)),

        Command::Rotate {
            angle,
            fillwith,
            fillwithpos,
        } => {
            let fill = FillSpec::from_options(&fillwith, fillwithpos_pair(fillwithpos))?;
            Box::new(Rotate::new(angle, fill))
        }

        Command::Watermark {
            text,
            color,
            opacity,
            angle,
            font_size,
            font,
        } => Box::new(Watermark::new(text, &color, opacity, angle, font_size, font)?),

        Command::Sticker { preset } => {
            let pipeline = recipes::preset(preset);
            Box::new(move |image: DynamicImage| pipeline.process(image))
        }
    })
}

pub fn run(args: CliArgs) -> imgpipe::Result<()> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    // Parameter validation happens here, before any pixel work.
    let pipeline = Pipeline::new().add_boxed(build_operator(args.command)?);

    match args.output {
        Some(path) => {
            let mut file = File::create(&path)?;
            api::run_to_writer(args.input.as_deref(), &pipeline, args.opaque, &mut file)?;
            info!("Output written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            api::run_to_writer(args.input.as_deref(), &pipeline, args.opaque, &mut lock)?;
            lock.flush()?;
        }
    }

    Ok(())
}
