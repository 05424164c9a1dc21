use std::fmt;

use ndarray::ShapeError;
use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::ColebrookError;

/// Identifies which input argument failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    ReynoldsNumber,
    RelativeRoughness,
    LengthToDiameter,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReynoldsNumber => "Reynolds number",
            Self::RelativeRoughness => "relative roughness",
            Self::LengthToDiameter => "length-to-diameter ratio",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while computing friction factors.
#[derive(Debug, Error)]
pub enum FrictionError {
    /// An input element is outside its domain.
    ///
    /// Raised before any computation begins.
    #[error("invalid {argument} at index {index} ({value}): {source}")]
    Invalid {
        /// The offending argument.
        argument: Argument,

        /// Flat row-major index into the argument's own array.
        index: usize,

        /// The rejected value.
        value: f64,

        /// The violated constraint.
        source: ConstraintError,
    },

    /// The input shapes are not broadcast-compatible.
    #[error("input shapes cannot be broadcast together: {shapes:?}")]
    Broadcast {
        /// Shapes of the Reynolds number, roughness, and L/D arrays.
        shapes: Vec<Vec<usize>>,
    },

    /// A configuration field is out of range.
    #[error("invalid configuration `{field}`: {source}")]
    Config {
        /// Dotted path of the offending field.
        field: &'static str,

        /// The violated constraint.
        source: ConstraintError,
    },

    /// The implicit Colebrook solve failed for an element.
    #[error("colebrook solve failed at index {index} (Re={re}, ε/D={rel_roughness})")]
    Solve {
        /// Flat row-major index into the broadcast result.
        index: usize,

        /// Reynolds number of the element.
        re: f64,

        /// Relative roughness of the element.
        rel_roughness: f64,

        /// Underlying solver failure.
        source: ColebrookError,
    },

    /// The result could not be assembled into the broadcast shape.
    #[error("result shape mismatch")]
    Shape(#[from] ShapeError),
}
