//! Thermodynamic and fluid property modeling.
//!
//! Models expose what they can compute through the traits in [`capability`],
//! and release models ask for exactly the capabilities they use.
//! [`model::PerfectGas`] is the bundled reference model; real-fluid backends
//! plug in by implementing the same traits.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
