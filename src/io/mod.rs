//! The I/O boundary: resolving raw input bytes from a path, piped standard
//! input, or an interactive file picker, and encoding the processed image
//! back out in the source container format. Animated GIFs have their own
//! frame-by-frame path in [`gif`].
pub mod gif;
pub mod input;
pub mod output;

pub use input::{resolve_input, resolve_source};
pub use output::write_image;
