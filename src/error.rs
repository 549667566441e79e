//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and imaging-library errors, and provides semantic
//! variants for parameter validation and input resolution.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {arg}={value}")]
    InvalidParameter { arg: &'static str, value: String },

    #[error("Missing required parameter: {arg}")]
    MissingParameter { arg: &'static str },

    #[error("No input image could be resolved: {0}")]
    InputResolution(String),

    #[error("Dependency error: {0}")]
    Dependency(String),
}

impl Error {
    pub fn invalid(arg: &'static str, value: impl std::fmt::Display) -> Self {
        Error::InvalidParameter {
            arg,
            value: value.to_string(),
        }
    }

    pub fn dependency<E: std::fmt::Display>(e: E) -> Self {
        Error::Dependency(e.to_string())
    }
}
