//! Capability traits used to query and construct thermodynamic states.
//!
//! A model implements only the capabilities it supports, and consumers state
//! the capabilities they need as trait bounds.
//! The notional nozzle, for example, needs density from temperature and
//! pressure, temperature from pressure and density, enthalpy, and the speed
//! of sound.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::*;
pub use state_from::StateFrom;
