//! Heating, ventilation and air-conditioning models.
//!
//! This module contains rating models for vapor-compression air conditioners
//! and heat pumps.

pub mod seasonal;
