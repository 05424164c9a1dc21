//! Smooth approximations of piecewise functions.
//!
//! Hard `min`, `max`, and step functions have discontinuous derivatives,
//! which upsets Newton-type solvers working on models built from them. The
//! functions here replace those kinks with a transition region whose width
//! is set by a smoothing parameter `e`. As `e → 0` each function approaches
//! its piecewise counterpart.
//!
//! All functions are generic over [`num_traits::Float`] and propagate `NaN`.
//!
//! ```
//! use pipe_friction::support::smooth::{smooth_max, smooth_min};
//!
//! // Clamp `t` smoothly into [0, 1].
//! let t = 0.5_f64;
//! let clamped = smooth_max(0.0, smooth_min(1.0, t, 0.01), 0.01);
//! assert!((clamped - 0.5).abs() < 1e-3);
//! ```

use num_traits::Float;

/// Smooth approximation of the unit step function.
///
/// Returns `0.5 * x / sqrt(x² + e²) + 0.5`, which rises from 0 to 1 as `x`
/// crosses zero. The value at `x = 0` is exactly one half.
///
/// `e` must be non-zero; with `e = 0` the result at `x = 0` is `NaN`.
pub fn smooth_step<T: Float>(x: T, e: T) -> T {
    let half = T::from(0.5).unwrap_or_else(|| T::one() / (T::one() + T::one()));
    half * x / (x * x + e * e).sqrt() + half
}

/// Smooth approximation of `min(a, b)`.
pub fn smooth_min<T: Float>(a: T, b: T, e: T) -> T {
    smooth_step(a - b, e) * b + smooth_step(b - a, e) * a
}

/// Smooth approximation of `max(a, b)`.
pub fn smooth_max<T: Float>(a: T, b: T, e: T) -> T {
    smooth_step(a - b, e) * a + smooth_step(b - a, e) * b
}
