//! # Twine QRA
//!
//! Release and consequence models for hydrogen, methane, and propane
//! quantitative risk assessment, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//!   - [`models::release::notional_nozzle`]: maps an under-expanded jet at an
//!     orifice throat to an equivalent source at ambient pressure.
//!   - [`models::qra::consequence`]: turns per-position hazard fields into
//!     per-leak-size fatality probabilities through pluggable probits.
//!   - [`models::qra::leak_frequency`]: lognormal leak frequency parameters
//!     by species, phase, and component.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module, moves to a
//! domain-level module when a second model in the domain needs it, and ends
//! up in [`support`] once it is useful across domains.
//!
//! ## Logging
//!
//! Models emit diagnostics through [`tracing`]. The crate never installs a
//! subscriber; applications choose one.

pub mod models;
pub mod support;
