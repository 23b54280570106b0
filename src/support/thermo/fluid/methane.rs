use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};
use crate::support::units::SpecificGasConstant;

/// Canonical identifier for methane (CH₄), the usual stand-in for natural gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Methane;

impl PerfectGasFluid for Methane {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(518.28),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2226.0),
        )
    }
}
