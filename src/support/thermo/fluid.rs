//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted through trait implementations (e.g., constants for the
//! [`PerfectGas`](crate::support::thermo::model::PerfectGas) model).
//!
//! The released fuels are [`Hydrogen`], [`Methane`], and [`Propane`].

mod hydrogen;
mod methane;
mod propane;

pub use hydrogen::Hydrogen;
pub use methane::Methane;
pub use propane::Propane;
