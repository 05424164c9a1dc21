//! Dimensional helpers for a single pipe segment.
//!
//! The friction factor model works entirely in dimensionless numbers. These
//! helpers bridge to [`uom`] quantities on either side of it: building the
//! Reynolds number and relative roughness from physical properties, and
//! turning a k-factor back into a Darcy-Weisbach pressure drop.
//!
//! ```
//! use pipe_friction::support::pipe::{pressure_drop, relative_roughness, reynolds_number};
//! use uom::si::{
//!     f64::{DynamicViscosity, Length, MassDensity, Velocity},
//!     dynamic_viscosity::pascal_second,
//!     length::millimeter,
//!     mass_density::kilogram_per_cubic_meter,
//!     pressure::pascal,
//!     ratio::ratio,
//!     velocity::meter_per_second,
//! };
//!
//! let density = MassDensity::new::<kilogram_per_cubic_meter>(998.2);
//! let velocity = Velocity::new::<meter_per_second>(2.0);
//! let diameter = Length::new::<millimeter>(50.0);
//!
//! let re = reynolds_number(
//!     density,
//!     velocity,
//!     diameter,
//!     DynamicViscosity::new::<pascal_second>(1.002e-3),
//! )
//! .unwrap();
//! let rr = relative_roughness(Length::new::<millimeter>(0.045), diameter).unwrap();
//!
//! assert!(re.get::<ratio>() > 4000.0);
//! assert!(rr.get::<ratio>() < 0.001);
//!
//! let dp = pressure_drop(2.0, density, velocity).unwrap();
//! assert!((dp.get::<pascal>() - 3992.8).abs() < 1e-9);
//! ```

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, Pressure, Ratio, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::constraint::{ConstraintResult, NonNegative, StrictlyPositive};

/// Reynolds number `ρ·|v|·D / μ` for flow in a round pipe.
///
/// The velocity sign only encodes flow direction and is ignored.
///
/// # Errors
///
/// Returns `Err` if density, diameter, or viscosity is not strictly positive.
pub fn reynolds_number(
    density: MassDensity,
    velocity: Velocity,
    diameter: Length,
    dynamic_viscosity: DynamicViscosity,
) -> ConstraintResult<Ratio> {
    let rho = StrictlyPositive::new(density)?.into_inner();
    let d = StrictlyPositive::new(diameter)?.into_inner();
    let mu = StrictlyPositive::new(dynamic_viscosity)?.into_inner();

    let re = rho.get::<kilogram_per_cubic_meter>()
        * velocity.get::<meter_per_second>().abs()
        * d.get::<meter>()
        / mu.get::<pascal_second>();

    Ok(Ratio::new::<ratio>(re))
}

/// Relative roughness `ε / D` of a pipe wall.
///
/// # Errors
///
/// Returns `Err` if the roughness is negative or the diameter is not
/// strictly positive.
pub fn relative_roughness(roughness: Length, diameter: Length) -> ConstraintResult<Ratio> {
    let eps = NonNegative::new(roughness)?.into_inner();
    let d = StrictlyPositive::new(diameter)?.into_inner();
    Ok(Ratio::new::<ratio>(eps.get::<meter>() / d.get::<meter>()))
}

/// Darcy-Weisbach pressure drop `K·ρ·v² / 2` for a loss coefficient `K`.
///
/// For a straight pipe `K` is the k-factor `f·L/D`.
///
/// # Errors
///
/// Returns `Err` if `k_factor` is negative or `NaN`, or if the density is
/// not strictly positive.
pub fn pressure_drop(
    k_factor: f64,
    density: MassDensity,
    velocity: Velocity,
) -> ConstraintResult<Pressure> {
    let k = NonNegative::new(k_factor)?.into_inner();
    let rho = StrictlyPositive::new(density)?.into_inner();
    let v = velocity.get::<meter_per_second>();

    Ok(Pressure::new::<pascal>(
        0.5 * k * rho.get::<kilogram_per_cubic_meter>() * v * v,
    ))
}
