//! Dose-response seam for fatality probabilities.

use uom::si::f64::{HeatFluxDensity, Pressure, Time};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::PressureImpulse,
};

/// A fatality probability in `[0, 1]`.
pub type Probability = Constrained<f64, UnitInterval>;

/// Probit dose-response functions.
///
/// Implementations select a curve by its identifier (for example a published
/// thermal probit such as Eisenberg or Tsao) and evaluate it for one
/// position's hazard values.
pub trait FatalityProbit {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Probability of fatality from a heat flux sustained for `exposure_time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] for an unknown probit or invalid inputs.
    fn thermal(
        &self,
        probit: &str,
        heat_flux: HeatFluxDensity,
        exposure_time: Time,
    ) -> Result<Probability, Self::Error>;

    /// Probability of fatality from a blast's peak overpressure and impulse.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] for an unknown probit or invalid inputs.
    fn overpressure(
        &self,
        probit: &str,
        overpressure: Pressure,
        impulse: PressureImpulse,
    ) -> Result<Probability, Self::Error>;
}
