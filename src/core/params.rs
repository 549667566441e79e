//! Parsed CLI parameter grammars shared by operators and the command line.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target dimensions in the grammar `<int>?x<int>?`; at least one side
/// must be present. `200x100`, `200x`, and `x100` are all valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SizeSpec {
    pub fn new(width: Option<u32>, height: Option<u32>) -> Result<Self> {
        if width.is_none() && height.is_none() {
            return Err(Error::MissingParameter {
                arg: "width or height",
            });
        }
        Ok(Self { width, height })
    }
}

impl std::str::FromStr for SizeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((width_str, height_str)) = s.split_once('x') else {
            return Err(Error::invalid("size", s));
        };
        let width = match width_str {
            "" => None,
            w => Some(w.parse::<u32>().map_err(|_| Error::invalid("size", s))?),
        };
        let height = match height_str {
            "" => None,
            h => Some(h.parse::<u32>().map_err(|_| Error::invalid("size", s))?),
        };
        if width.is_none() && height.is_none() {
            return Err(Error::invalid("size", s));
        }
        Ok(Self { width, height })
    }
}

impl std::fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.width {
            Some(w) => write!(f, "{}", w)?,
            None => {}
        }
        write!(f, "x")?;
        match self.height {
            Some(h) => write!(f, "{}", h),
            None => Ok(()),
        }
    }
}

/// One crop boundary: an absolute pixel coordinate, or a proportion of the
/// corresponding image dimension. Grammar: `<int>` for pixels, `<float>x`
/// for a proportion in `[0.0, 1.0]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    Pixels(u32),
    Fraction(f32),
}

impl Boundary {
    pub fn fraction(f: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&f) {
            return Err(Error::invalid("boundary", f));
        }
        Ok(Boundary::Fraction(f))
    }

    /// Resolve against the current image dimension, clamped into
    /// `[0, dimension]`.
    pub fn resolve(self, dimension: u32) -> u32 {
        match self {
            Boundary::Pixels(p) => p.min(dimension),
            Boundary::Fraction(f) => ((f as f64 * dimension as f64) as u32).min(dimension),
        }
    }
}

impl std::str::FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(frac_str) = s.strip_suffix('x') {
            let f = frac_str
                .parse::<f32>()
                .map_err(|_| Error::invalid("boundary", s))?;
            return Boundary::fraction(f).map_err(|_| Error::invalid("boundary", s));
        }
        s.parse::<u32>()
            .map(Boundary::Pixels)
            .map_err(|_| Error::invalid("boundary", s))
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Pixels(p) => write!(f, "{}", p),
            Boundary::Fraction(v) => write!(f, "{}x", v),
        }
    }
}
