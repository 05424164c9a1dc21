//! Iterative solver for the implicit Colebrook equation.
//!
//! The Colebrook residual is strictly decreasing in the friction factor, so a
//! sign change is bracketed around the explicit Swamee-Jain estimate and the
//! root is refined by bisection.

mod config;
mod error;
mod problem;

pub use config::ColebrookConfig;
pub use error::ColebrookError;

use tracing::{trace, warn};
use twine_solvers::equation::bisection;

use crate::support::friction::{colebrook_residual, laminar};

use problem::{ColebrookModel, ColebrookProblem};

/// Solves the Colebrook equation for one element.
///
/// The `seed` is normally the Swamee-Jain estimate. If it is not a usable
/// positive number (Swamee-Jain is singular near `Re ≈ 7`), the laminar
/// value seeds the bracket instead.
///
/// # Errors
///
/// Returns [`ColebrookError`] if no root can be bracketed, the bisection
/// solver fails, or the iteration limit is reached and
/// [`ColebrookConfig::allow_unconverged`] is not set.
pub(super) fn colebrook(
    re: f64,
    rel_roughness: f64,
    seed: f64,
    config: &ColebrookConfig,
) -> Result<f64, ColebrookError> {
    let seed = if seed.is_finite() && seed > 0.0 {
        seed
    } else {
        laminar(re)
    };

    let bracket = bracket(re, rel_roughness, seed, config)?;

    let model = ColebrookModel::new(re, rel_roughness);

    let solution = bisection::solve(
        &model,
        &ColebrookProblem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // The residual only overflows for tiny trial values, where it
            // tends to +∞. Steer bisection toward larger friction factors.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        if !config.allow_unconverged {
            return Err(ColebrookError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            });
        }
        warn!(
            re,
            rel_roughness,
            residual = solution.residual,
            iters = solution.iters,
            "accepting unconverged Colebrook iterate"
        );
    }

    Ok(solution.snapshot.output.friction_factor)
}

/// Finds `[lower, upper]` with a positive residual at `lower` and a negative
/// residual at `upper`.
fn bracket(
    re: f64,
    rel_roughness: f64,
    seed: f64,
    config: &ColebrookConfig,
) -> Result<[f64; 2], ColebrookError> {
    let k = config.bracket_factor;
    let mut lower = seed / k;
    let mut upper = seed * k;

    for expansion in 0..=config.max_bracket_expansions {
        let lower_ok = colebrook_residual(lower, re, rel_roughness) > 0.0;
        let upper_ok = colebrook_residual(upper, re, rel_roughness) < 0.0;
        if lower_ok && upper_ok {
            return Ok([lower, upper]);
        }
        if expansion == config.max_bracket_expansions {
            break;
        }
        if !lower_ok {
            lower /= k;
        }
        if !upper_ok {
            upper *= k;
        }
        trace!(re, rel_roughness, lower, upper, expansion, "widened Colebrook bracket");
    }

    Err(ColebrookError::Bracket { lower, upper })
}
