use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};
use crate::support::units::SpecificGasConstant;

/// Canonical identifier for propane (C₃H₈).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Propane;

impl PerfectGasFluid for Propane {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(188.56),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1679.0),
        )
    }
}
