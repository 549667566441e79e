//! Input resolution: explicit path, piped stdin, or a file dialog, in that
//! order of preference.
use std::io::{IsTerminal, Read};
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::error::{Error, Result};

/// Resolve the raw input bytes and their container format, detected from
/// content rather than the file extension. With no path, piped stdin is
/// read; on an interactive terminal a file dialog is offered (when the
/// `dialog` feature is enabled). Returns [`Error::InputResolution`] when
/// nothing yields an image.
pub fn resolve_source(path: Option<&Path>) -> Result<(Vec<u8>, ImageFormat)> {
    if let Some(path) = path {
        return read_path(path);
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = Vec::new();
        stdin.lock().read_to_end(&mut buffer)?;
        let format = image::guess_format(&buffer)?;
        info!(bytes = buffer.len(), ?format, "Image read from stdin");
        return Ok((buffer, format));
    }

    #[cfg(feature = "dialog")]
    {
        if let Some(picked) = rfd::FileDialog::new()
            .set_title("Select an image to process")
            .add_filter(
                "images",
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
            )
            .pick_file()
        {
            return read_path(&picked);
        }
        return Err(Error::InputResolution(
            "file dialog was cancelled".to_string(),
        ));
    }

    #[cfg(not(feature = "dialog"))]
    Err(Error::InputResolution(
        "no input path given and stdin is a terminal".to_string(),
    ))
}

/// Resolve and decode the input image. Animated inputs decode as their
/// first frame; use [`crate::io::gif`] to process every frame.
pub fn resolve_input(path: Option<&Path>) -> Result<(DynamicImage, ImageFormat)> {
    let (bytes, format) = resolve_source(path)?;
    let image = image::load_from_memory_with_format(&bytes, format)?;
    info!(
        width = image.width(),
        height = image.height(),
        ?format,
        "Image decoded"
    );
    Ok((image, format))
}

fn read_path(path: &Path) -> Result<(Vec<u8>, ImageFormat)> {
    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes).map_err(|_| {
        Error::InputResolution(format!(
            "could not determine image format of {}",
            path.display()
        ))
    })?;
    info!(bytes = bytes.len(), ?format, "Image read from {}", path.display());
    Ok((bytes, format))
}
