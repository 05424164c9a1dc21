//! Elementwise friction factor evaluation.
//!
//! Each element is computed independently:
//!
//! 1. Swamee-Jain gives the explicit turbulent estimate.
//! 2. In implicit mode, the Colebrook equation is solved from that estimate.
//! 3. The laminar value `64 / Re` is blended with the turbulent value using
//!    a smoothly clamped transition weight.
//! 4. The blend is scaled by `L/D`.
//!
//! `NaN` in either Reynolds number or roughness skips the solve and yields
//! `NaN` at that position.

mod broadcast;
mod colebrook;
mod config;
mod error;
mod input;

pub use colebrook::{ColebrookConfig, ColebrookError};
pub use config::FrictionConfig;
pub use error::{Argument, FrictionError};
pub use input::FrictionInput;

use ndarray::{ArrayD, IxDyn};
use tracing::debug;

use crate::support::friction::{blend, laminar, swamee_jain, transition_weight};

use broadcast::broadcast_shape;
use colebrook::colebrook;

/// Computes the blended friction factor (or k-factor) for every element.
///
/// # Errors
///
/// Returns [`FrictionError`] if the configuration or any input element is
/// invalid, the inputs cannot be broadcast together, or an implicit solve
/// fails. Validation happens before any element is evaluated.
pub(crate) fn friction_factor(
    input: &FrictionInput,
    config: &FrictionConfig,
) -> Result<ArrayD<f64>, FrictionError> {
    config.validate()?;
    input.validate()?;

    let shapes = [
        input.re.shape(),
        input.rel_roughness.shape(),
        input.length_to_diameter.shape(),
    ];
    let broadcast_error = || FrictionError::Broadcast {
        shapes: shapes.iter().map(|shape| shape.to_vec()).collect(),
    };
    let shape = broadcast_shape(&shapes).ok_or_else(broadcast_error)?;

    let re = input
        .re
        .broadcast(shape.clone())
        .ok_or_else(broadcast_error)?;
    let rel_roughness = input
        .rel_roughness
        .broadcast(shape.clone())
        .ok_or_else(broadcast_error)?;
    let length_to_diameter = input
        .length_to_diameter
        .broadcast(shape.clone())
        .ok_or_else(broadcast_error)?;

    debug!(
        elements = re.len(),
        shape = ?shape,
        implicit = config.implicit,
        "evaluating friction factors"
    );

    let values = re
        .iter()
        .zip(rel_roughness.iter())
        .zip(length_to_diameter.iter())
        .enumerate()
        .map(|(index, ((&re, &rel_roughness), &l_over_d))| {
            element(re, rel_roughness, config)
                .map(|f| f * l_over_d)
                .map_err(|source| FrictionError::Solve {
                    index,
                    re,
                    rel_roughness,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArrayD::from_shape_vec(IxDyn(&shape), values)?)
}

/// Friction factor for a single validated element.
fn element(re: f64, rel_roughness: f64, config: &FrictionConfig) -> Result<f64, ColebrookError> {
    let f_explicit = swamee_jain(re, rel_roughness);

    let f_turbulent = if config.implicit && !re.is_nan() && !rel_roughness.is_nan() {
        colebrook(re, rel_roughness, f_explicit, &config.solver)?
    } else {
        f_explicit
    };

    let t = transition_weight(re, &config.transition);
    let f = blend(laminar(re), f_turbulent, t);

    // Deep in the laminar regime the weight settles near -0.0025, so a large
    // turbulent value drives the blend negative: around Re ≈ 7 where
    // Swamee-Jain is singular, and below Re ≈ 2.5e-4 where the Colebrook
    // root grows like 1/Re².
    Ok(if f < 0.0 { 0.0 } else { f })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array1, arr0, arr1, arr2};

    use crate::support::friction::{TransitionConfig, colebrook_residual};

    fn explicit() -> FrictionConfig {
        FrictionConfig {
            implicit: false,
            ..FrictionConfig::default()
        }
    }

    fn scalar(re: f64, rel_roughness: f64, config: &FrictionConfig) -> f64 {
        let input = FrictionInput::scalar(re).with_roughness(arr0(rel_roughness));
        friction_factor(&input, config).expect("evaluation should succeed")[[]]
    }

    fn log_space(start: f64, stop: f64, n: usize) -> Array1<f64> {
        Array1::logspace(10.0, start, stop, n)
    }

    #[test]
    fn concrete_scenario() {
        // Hand-computed Swamee-Jain value at Re = 1e5, ε/D = 0.001.
        let f_closed_form = 0.022_342;

        let f_explicit = scalar(1.0e5, 0.001, &explicit());
        assert_relative_eq!(f_explicit, f_closed_form, max_relative = 0.01);

        let f_implicit = scalar(1.0e5, 0.001, &FrictionConfig::default());
        assert_relative_eq!(f_implicit, f_explicit, max_relative = 0.02);
    }

    #[test]
    fn implicit_tracks_colebrook_in_turbulent_flow() {
        let config = FrictionConfig::default();
        for &re in &log_space(4.5, 8.0, 15) {
            for rr in [0.0, 1.0e-5, 1.0e-3, 0.01] {
                let f_colebrook = colebrook(re, rr, swamee_jain(re, rr), &config.solver)
                    .expect("colebrook solve should succeed");
                assert!(colebrook_residual(f_colebrook, re, rr).abs() < 1e-9);

                // The smooth clamp leaves the turbulent weight a fraction of a
                // percent away from one.
                let f = scalar(re, rr, &config);
                assert_relative_eq!(f, f_colebrook, max_relative = 5e-3);
            }
        }
    }

    #[test]
    fn explicit_tracks_swamee_jain_in_turbulent_flow() {
        for &re in &log_space(4.5, 8.0, 15) {
            for rr in [0.0, 1.0e-4, 0.05] {
                let f = scalar(re, rr, &explicit());
                assert_relative_eq!(f, swamee_jain(re, rr), max_relative = 5e-3);
            }
        }
    }

    #[test]
    fn laminar_below_transition() {
        for config in [explicit(), FrictionConfig::default()] {
            for &re in &log_space(1.0, 3.0, 20) {
                for rr in [0.0, 0.001, 0.01] {
                    let f = scalar(re, rr, &config);
                    assert_relative_eq!(f, 64.0 / re, max_relative = 0.01);
                }
            }
        }
    }

    #[test]
    fn vector_with_scalar_roughness() {
        let input =
            FrictionInput::new(arr1(&[500.0, 3000.0, 1.0e5])).with_roughness(arr0(0.001));
        let f = friction_factor(&input, &explicit()).unwrap();

        assert_eq!(f.shape(), &[3]);
        for (i, &re) in [500.0, 3000.0, 1.0e5].iter().enumerate() {
            assert_eq!(f[[i]], scalar(re, 0.001, &explicit()));
        }
    }

    #[test]
    fn grid_broadcast() {
        let re = arr2(&[[1.0e3], [1.0e4], [1.0e5], [1.0e6]]);
        let rr = arr1(&[0.0, 1.0e-4, 1.0e-2]);
        let input = FrictionInput::new(re).with_roughness(rr);

        let f = friction_factor(&input, &FrictionConfig::default()).unwrap();
        assert_eq!(f.shape(), &[4, 3]);

        let config = FrictionConfig::default();
        assert_eq!(f[[2, 1]], scalar(1.0e5, 1.0e-4, &config));
        assert_eq!(f[[3, 2]], scalar(1.0e6, 1.0e-2, &config));
    }

    #[test]
    fn nan_propagates_positionally() {
        let input = FrictionInput::new(arr1(&[f64::NAN, 1.0e4, 1.0e4]))
            .with_roughness(arr1(&[0.01, f64::NAN, 0.01]));

        for config in [explicit(), FrictionConfig::default()] {
            let f = friction_factor(&input, &config).unwrap();
            assert!(f[[0]].is_nan());
            assert!(f[[1]].is_nan());
            assert!(f[[2]].is_finite() && f[[2]] > 0.0);
        }
    }

    #[test]
    fn length_to_diameter_scales_result() {
        let re = log_space(2.0, 7.0, 30);
        for config in [explicit(), FrictionConfig::default()] {
            let base = FrictionInput::new(re.clone()).with_roughness(arr0(0.002));
            let doubled = base.clone().with_length_to_diameter(arr0(2.0));

            let f1 = friction_factor(&base, &config).unwrap();
            let f2 = friction_factor(&doubled, &config).unwrap();
            assert_eq!(f2, f1 * 2.0);
        }
    }

    #[test]
    fn per_element_length_to_diameter() {
        let input = FrictionInput::new(arr1(&[1.0e5, 1.0e5]))
            .with_roughness(arr0(0.001))
            .with_length_to_diameter(arr1(&[10.0, 100.0]));
        let k = friction_factor(&input, &explicit()).unwrap();
        assert_relative_eq!(k[[1]], 10.0 * k[[0]], max_relative = 1e-12);
    }

    #[test]
    fn idempotent() {
        let input = FrictionInput::new(log_space(1.0, 8.0, 50)).with_roughness(arr0(1.0e-3));
        let config = FrictionConfig::default();
        assert_eq!(
            friction_factor(&input, &config).unwrap(),
            friction_factor(&input, &config).unwrap()
        );
    }

    #[test]
    fn non_negative_everywhere() {
        let re = log_space(0.0, 8.0, 400);
        for rr in [0.0, 1.0e-4, 0.01, 0.05] {
            let input = FrictionInput::new(re.clone()).with_roughness(arr0(rr));
            for config in [explicit(), FrictionConfig::default()] {
                let f = friction_factor(&input, &config).unwrap();
                assert!(f.iter().all(|&value| value >= 0.0), "negative at ε/D={rr}");
            }
        }
    }

    #[test]
    fn explicit_breaks_down_near_swamee_jain_singularity() {
        let config = explicit();
        for rr in [0.0, 0.001, 0.01] {
            // Clamped to zero around the pole at 5.74 / Re^0.9 ≈ 1.
            assert_eq!(scalar(7.0, rr, &config), 0.0);

            // Pulled well below laminar on either side of the pole.
            assert!(scalar(6.5, rr, &config) < 0.95 * laminar(6.5));
            assert!(scalar(7.5, rr, &config) < 0.95 * laminar(7.5));

            // Laminar again outside roughly 5.9 < Re < 8.7.
            for re in [1.0e-3, 1.0, 5.0, 10.0] {
                assert_relative_eq!(scalar(re, rr, &config), laminar(re), max_relative = 0.01);
            }
        }
    }

    #[test]
    fn implicit_breaks_down_at_tiny_reynolds_numbers() {
        let config = FrictionConfig::default();

        // Laminar through the explicit pole and down to Re ≈ 0.02.
        for re in [0.1, 1.0, 5.0, 7.0, 8.0] {
            assert_relative_eq!(scalar(re, 0.05, &config), laminar(re), max_relative = 0.01);
        }

        // Below that the Colebrook root dominates the blend.
        let ratio = scalar(1.0e-3, 0.05, &config) / laminar(1.0e-3);
        assert!(ratio > 0.7 && ratio < 0.8, "ratio {ratio}");
        assert_eq!(scalar(1.0e-6, 0.05, &config), 0.0);
    }

    #[test]
    fn rises_just_past_transition_high() {
        // The turbulent-side smoothing pushes the weight above one, so the
        // blend keeps climbing toward the turbulent value until Re ≈ 4550.
        for config in [explicit(), FrictionConfig::default()] {
            for rr in [0.0, 1.0e-3, 0.01, 0.05] {
                assert!(scalar(4010.0, rr, &config) > scalar(4000.0, rr, &config));
            }
        }
    }

    #[test]
    fn monotone_from_just_past_transition() {
        let re = log_space(5000.0_f64.log10(), 8.0, 300);
        for rr in [0.0, 1.0e-5, 1.0e-3, 0.01, 0.05] {
            let input = FrictionInput::new(re.clone()).with_roughness(arr0(rr));
            for config in [explicit(), FrictionConfig::default()] {
                let f = friction_factor(&input, &config).unwrap();
                for pair in f.as_slice().unwrap().windows(2) {
                    assert!(pair[1] <= pair[0] + 1e-12, "increase at ε/D={rr}");
                }
            }
        }
    }

    #[test]
    fn monotone_in_turbulent_region() {
        let re = log_space(4.0, 8.0, 200);
        for rr in [1.0e-5, 1.0e-3, 0.01, 0.05] {
            let input = FrictionInput::new(re.clone()).with_roughness(arr0(rr));
            for config in [explicit(), FrictionConfig::default()] {
                let f = friction_factor(&input, &config).unwrap();
                for pair in f.as_slice().unwrap().windows(2) {
                    assert!(pair[1] <= pair[0] + 1e-12, "increase at ε/D={rr}");
                }
            }
        }
    }

    #[test]
    fn continuous_across_transition_edges() {
        let config = FrictionConfig::default();
        for edge in [2000.0, 4000.0] {
            let re = Array1::linspace(edge - 50.0, edge + 50.0, 101);
            let input = FrictionInput::new(re).with_roughness(arr0(0.01));
            let f = friction_factor(&input, &config).unwrap();
            for pair in f.as_slice().unwrap().windows(2) {
                assert!((pair[1] - pair[0]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn shifted_window_forces_laminar() {
        let config = FrictionConfig {
            implicit: false,
            transition: TransitionConfig {
                re_low: 1.0e6,
                re_high: 2.0e6,
                ..TransitionConfig::default()
            },
            ..FrictionConfig::default()
        };
        assert_relative_eq!(scalar(1.0e4, 0.0, &config), 64.0 / 1.0e4, max_relative = 0.01);
    }

    #[test]
    fn validation_runs_before_evaluation() {
        let input = FrictionInput::new(arr1(&[1.0e4, -1.0]));
        assert!(matches!(
            friction_factor(&input, &FrictionConfig::default()),
            Err(FrictionError::Invalid {
                argument: Argument::ReynoldsNumber,
                index: 1,
                ..
            })
        ));

        let input = FrictionInput::scalar(1.0e4).with_roughness(arr0(-0.01));
        assert!(matches!(
            friction_factor(&input, &FrictionConfig::default()),
            Err(FrictionError::Invalid {
                argument: Argument::RelativeRoughness,
                ..
            })
        ));
    }

    #[test]
    fn incompatible_shapes() {
        let input =
            FrictionInput::new(arr1(&[1.0e4, 1.0e5])).with_roughness(arr1(&[0.0, 0.1, 0.2]));
        let err = friction_factor(&input, &FrictionConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            FrictionError::Broadcast { ref shapes } if shapes == &[vec![2], vec![3], vec![]]
        ));
    }

    #[test]
    fn solve_failure_is_reported_with_position() {
        // ε/D = 5 has no Colebrook root.
        let input =
            FrictionInput::new(arr1(&[1.0e4, 1.0e5])).with_roughness(arr1(&[0.001, 5.0]));
        let err = friction_factor(&input, &FrictionConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            FrictionError::Solve {
                index: 1,
                source: ColebrookError::Bracket { .. },
                ..
            }
        ));

        // The explicit correlation has no solve to fail.
        assert!(friction_factor(&input, &explicit()).is_ok());
    }
}
