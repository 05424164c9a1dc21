use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving the Colebrook equation.
#[derive(Debug, Error)]
pub enum ColebrookError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:e}")]
    MaxIters {
        /// Best Colebrook residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// No sign change of the residual was found around the initial estimate.
    ///
    /// This happens when the relative roughness is large enough
    /// (`ε/D ≥ 3.7`) that the Colebrook equation has no root.
    #[error("no root bracketed in [{lower:e}, {upper:e}]")]
    Bracket {
        /// Lower end of the widest bracket tried.
        lower: f64,

        /// Upper end of the widest bracket tried.
        upper: f64,
    },
}
