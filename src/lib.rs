//! # Twine Ratings
//!
//! Seasonal efficiency rating models for variable-capacity HVAC equipment,
//! built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The centerpiece is the inverse rating problem: given a nameplate seasonal
//! rating (SEER or HSPF), find the rated efficiency at standard test
//! conditions that reproduces it through a bin-weighted seasonal calculation.
//! See [`models::hvac::seasonal`].
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
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models.

pub mod models;
pub mod support;
