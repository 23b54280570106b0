//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by the stage of a risk assessment they serve:
//!
//! - [`release`]: source-term models describing how fluid leaves a leak.
//! - [`qra`]: risk aggregation over occupants, leak sizes, and components.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; only the types needed to call it are re-exported.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core API.

pub mod qra;
pub mod release;
