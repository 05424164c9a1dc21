//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `fluid`).
//! This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; the types a caller needs are re-exported from the
//! model module itself.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API.

pub mod fluid;
