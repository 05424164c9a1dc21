//! Fluid flow models.
//!
//! This module contains models for single-phase, steady, incompressible
//! flow through piping elements.

pub mod pipe_friction;
