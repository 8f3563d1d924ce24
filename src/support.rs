//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`curve`]: Temperature-dependent performance curves.

pub mod constraint;
pub mod curve;
