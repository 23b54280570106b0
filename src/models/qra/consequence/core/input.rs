//! Hazard fields and modeling decisions for a consequence calculation.

use uom::si::f64::{HeatFluxDensity, Pressure, Time};

use crate::support::units::PressureImpulse;

/// Physical hazard values for every (leak size, position) pair of an event.
///
/// Each array is flat and row-major: all positions for the first leak size,
/// then all positions for the second, and so on.
/// Only the arrays the consequence type needs must be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalResponses {
    /// Radiant heat flux at each position.
    pub heat_fluxes: Option<Vec<HeatFluxDensity>>,

    /// Peak overpressure at each position.
    pub overpressures: Option<Vec<Pressure>>,

    /// Overpressure impulse at each position.
    pub impulses: Option<Vec<PressureImpulse>>,
}

impl PhysicalResponses {
    /// Responses for a thermal consequence.
    #[must_use]
    pub fn thermal(heat_fluxes: Vec<HeatFluxDensity>) -> Self {
        Self {
            heat_fluxes: Some(heat_fluxes),
            ..Self::default()
        }
    }

    /// Responses for an overpressure consequence.
    #[must_use]
    pub fn overpressure(overpressures: Vec<Pressure>, impulses: Vec<PressureImpulse>) -> Self {
        Self {
            overpressures: Some(overpressures),
            impulses: Some(impulses),
            ..Self::default()
        }
    }
}

/// Probit choices and exposure settings for consequence modeling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsequenceDecisions {
    /// Identifier of the thermal probit.
    pub thermal_probit: String,

    /// How long occupants are exposed to radiant heat.
    pub exposure_time: Time,

    /// Identifier of the overpressure probit.
    pub overpressure_probit: String,
}
