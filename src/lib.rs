#![doc = r#"
imgpipe: a command-line image-editing toolkit.

This crate provides a set of single-purpose pixel-transform operators
(crop, resize, gray-scale, expand, roll, flip, rotate, trim, watermark)
composed through a small pipeline abstraction. It powers the `imgpipe` CLI
and can be embedded in your own Rust applications. The pixel math itself
(decoding, resampling, compositing, text rasterization) is delegated to the
`image`, `fast_image_resize`, and `imageproc` crates; this crate's own code
only computes geometry such as crop rectangles, paste offsets, and rotated
canvas sizes.

Quick start: build and run a pipeline
-------------------------------------
```rust,no_run
use imgpipe::core::ops::{Expand, Resize, Trim};
use imgpipe::core::pipeline::Pipeline;

fn main() -> imgpipe::Result<()> {
    let pipeline = Pipeline::new()
        .add(Trim::new())
        .add(Resize::width(256))
        .add(Expand::square(256));

    let image = image::open("input.png")?;
    let output = pipeline.process(image)?;
    output.save("output.png")?;
    Ok(())
}
```

Content-dependent branching
---------------------------
```rust
use image::DynamicImage;
use imgpipe::core::operator::{Dynamic, Operator};
use imgpipe::core::ops::Resize;
use imgpipe::core::pipeline::Pipeline;

let pipeline = Pipeline::new().add(Dynamic::new(|image: &DynamicImage| {
    if image.width() > image.height() {
        Box::new(Resize::width(512)) as Box<dyn Operator>
    } else {
        Box::new(Resize::height(512))
    }
}));
```

Recipes
-------
Preset pipelines for common targets:
```rust
let sticker = imgpipe::core::recipes::tg_sticker();
assert_eq!(sticker.len(), 3);
```

Error handling
--------------
All public functions return `imgpipe::Result<T>`; match on `imgpipe::Error`
to handle specific cases, e.g. invalid parameters or input resolution
failures.

Feature flags
-------------
- `dialog` (default): offers an `rfd` file picker when the CLI is run
  interactively with no input path and no piped stdin.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::operator::{Dynamic, Operator};
pub use crate::core::ops::{
    CropRect, CropSquare, Expand, Flip, GrayScale, Resize, Roll, Rotate, Trim, Watermark,
};
pub use crate::core::params::{Boundary, SizeSpec};
pub use crate::core::pipeline::Pipeline;
pub use crate::core::recipes::{dc_sticker, tg_sticker};
pub use crate::error::{Error, Result};
pub use crate::types::{Align, Anchor, FlipDirection, RollDirection, StickerPreset, WatermarkAngle};

pub use crate::api::{process_path, run_to_writer};
