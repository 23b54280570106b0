//! Release source models.
//!
//! These models describe the fluid leaving a leak, upstream of any
//! dispersion, ignition, or harm calculation.

pub mod notional_nozzle;
