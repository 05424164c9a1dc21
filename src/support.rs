//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints used for input validation.
//! - [`friction`]: Closed-form friction factor correlations.
//! - [`pipe`]: Dimensional helpers for a single pipe segment.
//! - [`smooth`]: Smooth approximations of step, min, and max.

pub mod constraint;
pub mod friction;
pub mod pipe;
pub mod smooth;
