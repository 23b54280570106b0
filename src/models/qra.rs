//! Quantitative risk assessment models.
//!
//! - [`consequence`]: fatality probabilities per leak size from hazard fields.
//! - [`leak_frequency`]: lognormal leak frequency parameters per component.

pub mod consequence;
pub mod leak_frequency;
