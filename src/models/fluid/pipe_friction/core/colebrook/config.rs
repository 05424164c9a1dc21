use twine_solvers::equation::bisection;

/// Root-finder configuration for the implicit Colebrook solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the friction factor.
    pub f_abs_tol: f64,

    /// Relative tolerance on the friction factor.
    pub f_rel_tol: f64,

    /// Absolute tolerance on the Colebrook residual.
    pub residual_tol: f64,

    /// Initial bracket is `[seed / k, seed * k]` around the explicit estimate.
    ///
    /// Must be greater than one. Each bracket expansion widens the failing
    /// side by the same factor.
    pub bracket_factor: f64,

    /// Maximum number of bracket expansions before giving up.
    pub max_bracket_expansions: usize,

    /// Accept the best iterate when `max_iters` is reached.
    ///
    /// When `false`, hitting the iteration limit is an error.
    pub allow_unconverged: bool,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            f_abs_tol: 1e-14,
            f_rel_tol: 1e-12,
            residual_tol: 1e-12,
            bracket_factor: 2.0,
            max_bracket_expansions: 50,
            allow_unconverged: false,
        }
    }
}

impl ColebrookConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.f_abs_tol,
            x_rel_tol: self.f_rel_tol,
            residual_tol: self.residual_tol,
        }
    }
}
