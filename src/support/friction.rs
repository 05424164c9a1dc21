//! Closed-form Darcy friction factor correlations.
//!
//! These are the scalar building blocks of the friction factor model:
//!
//! - [`laminar`]: Hagen-Poiseuille, `f = 64 / Re`
//! - [`swamee_jain`]: explicit approximation of the Colebrook equation
//! - [`colebrook_residual`]: residual of the implicit Colebrook equation
//! - [`transition_weight`] and [`blend`]: smooth laminar-turbulent blending
//!
//! Every function is pure and propagates `NaN`. Inputs are not validated
//! here; callers are expected to check domains with
//! [`constraint`](crate::support::constraint) types first.
//!
//! # Example
//!
//! ```
//! use pipe_friction::support::friction::{
//!     TransitionConfig, blend, laminar, swamee_jain, transition_weight,
//! };
//!
//! let re = 3000.0;
//! let t = transition_weight(re, &TransitionConfig::default());
//! let f = blend(laminar(re), swamee_jain(re, 0.001), t);
//! assert!(f > laminar(re));
//! ```

use crate::support::smooth::{smooth_max, smooth_min};

/// Default Reynolds number where the laminar-turbulent transition begins.
pub const RE_TRANSITION_LOW: f64 = 2000.0;

/// Default Reynolds number where the laminar-turbulent transition ends.
pub const RE_TRANSITION_HIGH: f64 = 4000.0;

/// Laminar-turbulent transition window and its smoothing widths.
///
/// The widths are expressed in units of the normalized transition fraction,
/// where 0 is `re_low` and 1 is `re_high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Reynolds number below which flow is treated as laminar.
    pub re_low: f64,

    /// Reynolds number above which flow is treated as turbulent.
    pub re_high: f64,

    /// Smoothing width at the laminar edge of the window.
    pub small_laminar: f64,

    /// Smoothing width at the turbulent edge of the window.
    pub small_turb: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            re_low: RE_TRANSITION_LOW,
            re_high: RE_TRANSITION_HIGH,
            small_laminar: 0.1,
            small_turb: 0.4,
        }
    }
}

/// Flow regime of a Reynolds number relative to a transition window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number against the transition window.
    ///
    /// Returns `None` if `re` is `NaN`.
    #[must_use]
    pub fn classify(re: f64, transition: &TransitionConfig) -> Option<Self> {
        if re.is_nan() {
            None
        } else if re < transition.re_low {
            Some(Self::Laminar)
        } else if re < transition.re_high {
            Some(Self::Transitional)
        } else {
            Some(Self::Turbulent)
        }
    }
}

/// Laminar (Hagen-Poiseuille) friction factor, `64 / Re`.
#[must_use]
pub fn laminar(re: f64) -> f64 {
    64.0 / re
}

/// Swamee-Jain explicit approximation of the Colebrook equation.
///
/// `f = 0.25 / log10(ε/D / 3.7 + 5.74 / Re^0.9)²`
#[must_use]
pub fn swamee_jain(re: f64, rel_roughness: f64) -> f64 {
    let arg = rel_roughness / 3.7 + 5.74 / re.powf(0.9);
    0.25 / arg.log10().powi(2)
}

/// Residual of the Colebrook equation at friction factor `f`.
///
/// `1/√f + 2·log10(ε/D / 3.7 + 2.51 / (Re·√f))`
///
/// The residual is strictly decreasing in `f` and tends to `+∞` as `f → 0⁺`.
#[must_use]
pub fn colebrook_residual(f: f64, re: f64, rel_roughness: f64) -> f64 {
    let sqrt_f = f.sqrt();
    1.0 / sqrt_f + 2.0 * (rel_roughness / 3.7 + 2.51 / (re * sqrt_f)).log10()
}

/// Turbulent weight of the laminar-turbulent blend.
///
/// The raw fraction `(Re - re_low) / (re_high - re_low)` is clamped to
/// `[0, 1]` with smooth min/max so the weight has a continuous derivative
/// at both edges of the window.
#[must_use]
pub fn transition_weight(re: f64, transition: &TransitionConfig) -> f64 {
    let t = (re - transition.re_low) / (transition.re_high - transition.re_low);
    smooth_max(
        0.0,
        smooth_min(1.0, t, transition.small_turb),
        transition.small_laminar,
    )
}

/// Blends laminar and turbulent friction factors with turbulent weight `t`.
#[must_use]
pub fn blend(f_laminar: f64, f_turbulent: f64, t: f64) -> f64 {
    (1.0 - t) * f_laminar + t * f_turbulent
}
