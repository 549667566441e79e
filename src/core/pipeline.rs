//! Ordered operator sequences applied as a left fold over the input image.
use image::DynamicImage;
use tracing::debug;

use crate::core::operator::Operator;
use crate::error::Result;

/// An ordered sequence of operators. Processing applies each operator in
/// turn, each consuming the previous operator's output; the empty pipeline
/// is the identity transform. A failure in any operator aborts the whole
/// pipeline. The input image is never mutated in place, so the caller
/// always retains the original.
#[derive(Default)]
pub struct Pipeline {
    operators: Vec<Box<dyn Operator>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operator, returning the pipeline for chaining.
    pub fn add(mut self, operator: impl Operator + 'static) -> Self {
        self.operators.push(Box::new(operator));
        self
    }

    /// Append an already-boxed operator.
    pub fn add_boxed(mut self, operator: Box<dyn Operator>) -> Self {
        self.operators.push(operator);
        self
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn process(&self, image: DynamicImage) -> Result<DynamicImage> {
        let mut result = image;
        for (i, operator) in self.operators.iter().enumerate() {
            result = operator.apply(result)?;
            debug!(
                step = i,
                width = result.width(),
                height = result.height(),
                "operator applied"
            );
        }
        Ok(result)
    }
}
