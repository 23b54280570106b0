//! Consequence aggregation.
//!
//! Hazard models produce one value per (leak size, position) pair. This
//! module turns those values into fatality probabilities with a probit and
//! sums them over positions, giving one expected-fatality value per leak
//! size.

mod aggregate;
mod consequence_type;
mod error;
mod input;
mod probit;

#[cfg(test)]
mod test_support;

pub use aggregate::{calculate_event_consequence, per_position_probability, reduce_to_per_leak_size};
pub use consequence_type::ConsequenceType;
pub use error::ConsequenceError;
pub use input::{ConsequenceDecisions, PhysicalResponses};
pub use probit::{FatalityProbit, Probability};
