use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    friction::TransitionConfig,
};

use super::{ColebrookConfig, FrictionError};

/// Configuration for friction factor evaluation.
///
/// Every field is independently overridable:
///
/// ```
/// use pipe_friction::models::fluid::pipe_friction::FrictionConfig;
///
/// let fast = FrictionConfig {
///     implicit: false,
///     ..FrictionConfig::default()
/// };
/// assert!(fast.transition.re_low < fast.transition.re_high);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionConfig {
    /// Solve the Colebrook equation (`true`) or use Swamee-Jain alone (`false`).
    ///
    /// The implicit solve is accurate but costs one root-find per element.
    pub implicit: bool,

    /// Root-finder options for the implicit solve.
    pub solver: ColebrookConfig,

    /// Laminar-turbulent transition window.
    pub transition: TransitionConfig,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            implicit: true,
            solver: ColebrookConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

impl FrictionConfig {
    /// Checks that every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), FrictionError> {
        let t = &self.transition;
        finite("transition.re_low", t.re_low)?;
        finite("transition.re_high", t.re_high)?;
        check::<StrictlyPositive>("transition.re_high", t.re_high - t.re_low)?;
        check::<StrictlyPositive>("transition.small_laminar", t.small_laminar)?;
        check::<StrictlyPositive>("transition.small_turb", t.small_turb)?;
        finite("transition.small_laminar", t.small_laminar)?;
        finite("transition.small_turb", t.small_turb)?;

        let s = &self.solver;
        check::<NonNegative>("solver.f_abs_tol", s.f_abs_tol)?;
        check::<NonNegative>("solver.f_rel_tol", s.f_rel_tol)?;
        check::<NonNegative>("solver.residual_tol", s.residual_tol)?;
        check::<StrictlyPositive>("solver.bracket_factor", s.bracket_factor - 1.0)?;
        finite("solver.bracket_factor", s.bracket_factor)?;

        Ok(())
    }
}

fn check<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<(), FrictionError> {
    C::check(&value).map_err(|source| FrictionError::Config { field, source })
}

fn finite(field: &'static str, value: f64) -> Result<(), FrictionError> {
    let source = if value.is_nan() {
        ConstraintError::NotANumber
    } else if value.is_infinite() {
        ConstraintError::Infinite
    } else {
        return Ok(());
    };
    Err(FrictionError::Config { field, source })
}
