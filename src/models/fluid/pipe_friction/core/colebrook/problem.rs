//! Problem formulation for the implicit Colebrook solve.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};

use crate::support::friction::colebrook_residual;

/// A trial friction factor paired with its Colebrook residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ColebrookPoint {
    pub(super) friction_factor: f64,
    pub(super) residual: f64,
}

/// The residual could not be evaluated at a trial friction factor.
///
/// Only occurs for trial values so small that `1/√f` overflows.
#[derive(Debug, Clone, Copy, Error)]
#[error("colebrook residual is not finite at f={friction_factor:e}")]
pub(super) struct NonFiniteResidual {
    friction_factor: f64,
}

/// Model evaluating the Colebrook residual for one pipe element.
pub(super) struct ColebrookModel {
    re: f64,
    rel_roughness: f64,
}

impl ColebrookModel {
    pub(super) fn new(re: f64, rel_roughness: f64) -> Self {
        Self { re, rel_roughness }
    }
}

impl Model for ColebrookModel {
    type Input = f64;
    type Output = ColebrookPoint;
    type Error = NonFiniteResidual;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let friction_factor = *input;
        let residual = colebrook_residual(friction_factor, self.re, self.rel_roughness);
        if !residual.is_finite() {
            return Err(NonFiniteResidual { friction_factor });
        }
        Ok(ColebrookPoint {
            friction_factor,
            residual,
        })
    }
}

/// Equation problem driving the Colebrook residual to zero.
pub(super) struct ColebrookProblem;

impl EquationProblem<1> for ColebrookProblem {
    type Input = f64;
    type Output = ColebrookPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
