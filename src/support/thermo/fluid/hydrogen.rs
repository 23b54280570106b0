use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};
use crate::support::units::SpecificGasConstant;

/// Canonical identifier for normal hydrogen (H₂).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hydrogen;

impl PerfectGasFluid for Hydrogen {
    /// Gas constant from a molar mass of 2.01588 g/mol; `cp` at 300 K.
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(4124.2),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(14_307.0),
        )
    }
}
