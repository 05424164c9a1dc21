use std::marker::PhantomData;

use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type that admits `NaN`, or a finite value satisfying `C`.
///
/// Gridded evaluations often carry `NaN` as a "no data" sentinel. Wrapping
/// an inner constraint with `FiniteOrNan` lets those sentinels through
/// untouched while still rejecting infinities and values outside the inner
/// constraint.
///
/// # Examples
///
/// ```
/// use pipe_friction::support::constraint::{FiniteOrNan, NonNegative, StrictlyPositive};
///
/// assert!(FiniteOrNan::<StrictlyPositive>::new(1.0e4).is_ok());
/// assert!(FiniteOrNan::<StrictlyPositive>::new(f64::NAN).is_ok());
/// assert!(FiniteOrNan::<StrictlyPositive>::new(0.0).is_err());
/// assert!(FiniteOrNan::<StrictlyPositive>::new(f64::INFINITY).is_err());
///
/// assert!(FiniteOrNan::<NonNegative>::new(0.0).is_ok());
/// assert!(FiniteOrNan::<NonNegative>::new(-0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiniteOrNan<C>(PhantomData<C>);

impl<C> FiniteOrNan<C> {
    /// Constructs a [`Constrained<T, FiniteOrNan<C>>`] if the value is `NaN`
    /// or a finite value satisfying `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or violates `C`.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, FiniteOrNan<C>>, ConstraintError>
    where
        C: Constraint<T>,
    {
        Constrained::<T, FiniteOrNan<C>>::new(value)
    }
}

impl<T: Float, C: Constraint<T>> Constraint<T> for FiniteOrNan<C> {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            return Ok(());
        }
        if value.is_infinite() {
            return Err(ConstraintError::Infinite);
        }
        C::check(value)
    }
}
