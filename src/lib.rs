//! # Pipe Friction
//!
//! Darcy friction factor models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The friction factor is evaluated elementwise over broadcast arrays of
//! Reynolds number and relative roughness. Laminar and turbulent
//! correlations are blended smoothly across the transition region, and the
//! turbulent value comes either from the explicit Swamee-Jain correlation or
//! from an implicit Colebrook solve.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (per-call summaries at `debug`, bracket
//! expansion at `trace`, accepted unconverged solves at `warn`). No subscriber
//! is installed; that is left to the application.

pub mod models;
pub mod support;
