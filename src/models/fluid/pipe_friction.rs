//! Darcy friction factor for flow in a pipe.
//!
//! The friction factor is continuous and smooth across the laminar,
//! transitional, and turbulent regimes, which keeps downstream solvers that
//! differentiate through it well behaved. Two turbulent correlations are
//! available through [`FrictionConfig::implicit`]:
//!
//! - implicit (default): the Colebrook equation, solved per element
//! - explicit: the Swamee-Jain approximation, closed form and much faster
//!
//! The smooth clamp on the blending weight does not stay inside `[0, 1]`:
//!
//! - Just past the transition window the weight overshoots one, so `f`
//!   still rises with `Re` until about `Re = 4550` (with the default
//!   window) and only decreases from there on.
//! - Deep in the laminar regime the weight sits near `-0.0025`. Explicit
//!   mode departs from `64 / Re` by more than 1% for roughly `5.9 < Re < 8.7`
//!   and returns `0.0` near `Re = 7`, where Swamee-Jain is singular.
//!   Implicit mode departs below about `Re = 0.02` and returns `0.0` below
//!   about `Re = 2.5e-4`.
//!
//! # Example
//!
//! ```
//! use ndarray::{arr0, arr1};
//! use pipe_friction::models::fluid::pipe_friction::{
//!     FrictionConfig, FrictionInput, friction_factor,
//! };
//!
//! let input = FrictionInput::new(arr1(&[1000.0, 3000.0, 1.0e5])).with_roughness(arr0(0.001));
//! let f = friction_factor(&input, &FrictionConfig::default()).unwrap();
//!
//! assert!((f[[0]] - 0.064).abs() < 1e-3);
//! assert!((f[[2]] - 0.0221).abs() < 1e-3);
//! ```

pub(crate) mod core;

use ndarray::{ArrayD, Ix0, arr0};
use twine_core::Model;

pub use self::core::{
    Argument, ColebrookConfig, ColebrookError, FrictionConfig, FrictionError, FrictionInput,
};
pub use crate::support::friction::TransitionConfig;

/// Computes the friction factor, or k-factor when `L/D ≠ 1`, for every
/// element of the broadcast inputs.
///
/// `NaN` in the Reynolds number or roughness yields `NaN` at the same
/// position without error.
///
/// # Errors
///
/// Returns [`FrictionError`] if the configuration or any input element is
/// invalid, the input shapes are incompatible, or an implicit solve fails.
pub fn friction_factor(
    input: &FrictionInput,
    config: &FrictionConfig,
) -> Result<ArrayD<f64>, FrictionError> {
    self::core::friction_factor(input, config)
}

/// Computes the Darcy friction factor for a single pipe.
///
/// # Errors
///
/// See [`friction_factor`].
pub fn darcy_friction_factor(
    re: f64,
    rel_roughness: f64,
    config: &FrictionConfig,
) -> Result<f64, FrictionError> {
    let input = FrictionInput::scalar(re).with_roughness(arr0(rel_roughness));
    let f = friction_factor(&input, config)?;
    Ok(f.into_dimensionality::<Ix0>()?.into_scalar())
}

/// Friction factor model for composing with other Twine models.
///
/// A thin adapter over [`friction_factor`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PipeFriction {
    pub config: FrictionConfig,
}

impl PipeFriction {
    #[must_use]
    pub fn new(config: FrictionConfig) -> Self {
        Self { config }
    }
}

impl Model for PipeFriction {
    type Input = FrictionInput;
    type Output = ArrayD<f64>;
    type Error = FrictionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        friction_factor(input, &self.config)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;

    use ndarray::arr1;
    use proptest::prelude::*;

    fn explicit() -> FrictionConfig {
        FrictionConfig {
            implicit: false,
            ..FrictionConfig::default()
        }
    }

    proptest! {
        #[test]
        fn laminar_regime_is_hagen_poiseuille(re in 10.0_f64..1500.0, rr in 0.0_f64..0.01) {
            for config in [explicit(), FrictionConfig::default()] {
                let f = darcy_friction_factor(re, rr, &config).unwrap();
                let f_laminar = 64.0 / re;
                prop_assert!((f - f_laminar).abs() <= 0.01 * f_laminar);
            }
        }

        #[test]
        fn turbulent_decreases_with_re(
            re in 5.0e3_f64..1.0e8,
            step in 1.01_f64..2.0,
            rr in 1.0e-6_f64..0.05,
        ) {
            for config in [explicit(), FrictionConfig::default()] {
                let f_low = darcy_friction_factor(re, rr, &config).unwrap();
                let f_high = darcy_friction_factor(re * step, rr, &config).unwrap();
                prop_assert!(f_high <= f_low + 1e-12);
            }
        }

        #[test]
        fn k_factor_scales_with_length(
            re in 100.0_f64..1.0e7,
            rr in 0.0_f64..0.05,
            l_over_d in 0.1_f64..1.0e4,
        ) {
            let config = FrictionConfig::default();
            let base = FrictionInput::new(arr1(&[re])).with_roughness(arr0(rr));
            let scaled = base.clone().with_length_to_diameter(arr0(l_over_d));

            let f = friction_factor(&base, &config).unwrap()[[0]];
            let k = friction_factor(&scaled, &config).unwrap()[[0]];
            prop_assert_eq!(k, f * l_over_d);
        }

        #[test]
        fn result_is_non_negative(re in 1.0_f64..1.0e8, rr in 0.0_f64..0.05) {
            for config in [explicit(), FrictionConfig::default()] {
                let f = darcy_friction_factor(re, rr, &config).unwrap();
                prop_assert!(f >= 0.0);
            }
        }
    }
}
