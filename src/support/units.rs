//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, heat flux).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Quantities
//!
//! - [`SpecificEnthalpy`]: J/kg, used for both enthalpy and kinetic energy per unit mass.
//! - [`SpecificGasConstant`]: J/kg·K.
//! - [`PressureImpulse`]: Pa·s, the blast impulse fed to overpressure probits.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_qra::support::units::TemperatureDifference;
//!
//! let stagnation = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let throat = ThermodynamicTemperature::new::<kelvin>(250.0);
//! let delta_t = stagnation.minus(throat);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::{PressureImpulse, SpecificEnthalpy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
