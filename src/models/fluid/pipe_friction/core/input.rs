use ndarray::{Array, ArrayD, Dimension, arr0};

use crate::support::constraint::{
    Constraint, ConstraintError, FiniteOrNan, NonNegative, StrictlyPositive,
};

use super::{Argument, FrictionError};

/// Inputs to a friction factor evaluation.
///
/// The three arrays are broadcast against each other. Roughness defaults to
/// a hydraulically smooth `0.0` and the length-to-diameter ratio to `1.0`,
/// which yields the plain Darcy friction factor.
///
/// ```
/// use ndarray::{arr0, arr1};
/// use pipe_friction::models::fluid::pipe_friction::FrictionInput;
///
/// let input = FrictionInput::new(arr1(&[1.0e4, 1.0e5, 1.0e6]))
///     .with_roughness(arr0(0.001))
///     .with_length_to_diameter(arr0(250.0));
///
/// assert_eq!(input.re.shape(), &[3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionInput {
    /// Reynolds numbers: positive, or `NaN` to mark missing data.
    pub re: ArrayD<f64>,

    /// Relative roughness `ε/D`: zero or positive, or `NaN`.
    pub rel_roughness: ArrayD<f64>,

    /// Length-to-diameter ratio `L/D`: strictly positive.
    ///
    /// Values other than one turn the friction factor into a k-factor.
    pub length_to_diameter: ArrayD<f64>,
}

impl FrictionInput {
    /// Creates an input for a smooth pipe with `L/D = 1`.
    pub fn new<D: Dimension>(re: Array<f64, D>) -> Self {
        Self {
            re: re.into_dyn(),
            rel_roughness: arr0(0.0).into_dyn(),
            length_to_diameter: arr0(1.0).into_dyn(),
        }
    }

    /// Creates a single-element input.
    #[must_use]
    pub fn scalar(re: f64) -> Self {
        Self::new(arr0(re))
    }

    /// Sets the relative roughness.
    #[must_use]
    pub fn with_roughness<D: Dimension>(self, rel_roughness: Array<f64, D>) -> Self {
        Self {
            rel_roughness: rel_roughness.into_dyn(),
            ..self
        }
    }

    /// Sets the length-to-diameter ratio.
    #[must_use]
    pub fn with_length_to_diameter<D: Dimension>(self, length_to_diameter: Array<f64, D>) -> Self {
        Self {
            length_to_diameter: length_to_diameter.into_dyn(),
            ..self
        }
    }

    /// Checks every element against its argument's domain.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::Invalid`] for the first offending element,
    /// checking Reynolds number, then roughness, then `L/D`.
    pub(super) fn validate(&self) -> Result<(), FrictionError> {
        check_all(
            Argument::ReynoldsNumber,
            &self.re,
            <FiniteOrNan<StrictlyPositive> as Constraint<f64>>::check,
        )?;
        check_all(
            Argument::RelativeRoughness,
            &self.rel_roughness,
            <FiniteOrNan<NonNegative> as Constraint<f64>>::check,
        )?;
        check_all(
            Argument::LengthToDiameter,
            &self.length_to_diameter,
            |value: &f64| {
                <StrictlyPositive as Constraint<f64>>::check(value)?;
                if value.is_infinite() {
                    return Err(ConstraintError::Infinite);
                }
                Ok(())
            },
        )
    }
}

fn check_all(
    argument: Argument,
    values: &ArrayD<f64>,
    check: impl Fn(&f64) -> Result<(), ConstraintError>,
) -> Result<(), FrictionError> {
    values
        .iter()
        .enumerate()
        .try_for_each(|(index, value)| {
            check(value).map_err(|source| FrictionError::Invalid {
                argument,
                index,
                value: *value,
                source,
            })
        })
}
