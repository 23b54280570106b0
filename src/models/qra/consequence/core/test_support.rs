use std::cell::Cell;

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{HeatFluxDensity, Pressure, Time},
    heat_flux_density::watt_per_square_meter,
    pressure::pascal,
    time::second,
};

use crate::support::{constraint::UnitInterval, units::PressureImpulse};

use super::{ConsequenceDecisions, FatalityProbit, Probability};

#[derive(Debug, Error)]
pub(super) enum TestProbitError {
    #[error("unknown probit {0:?}")]
    UnknownProbit(String),
    #[error("probability out of range")]
    OutOfRange,
}

/// Probit whose probabilities are simple functions of the hazard values.
///
/// Thermal: `q / 10 W/m²`. Overpressure: `(P / 1 kPa)·(I / 1 Pa·s) / 100`.
/// Counts its calls so tests can assert that no work was done.
#[derive(Debug, Default)]
pub(super) struct LinearProbit {
    calls: Cell<usize>,
}

impl LinearProbit {
    pub(super) fn calls(&self) -> usize {
        self.calls.get()
    }

    fn check(&self, probit: &str, expected: &str, p: f64) -> Result<Probability, TestProbitError> {
        self.calls.set(self.calls.get() + 1);
        if probit != expected {
            return Err(TestProbitError::UnknownProbit(probit.to_string()));
        }
        UnitInterval::new(p).map_err(|_| TestProbitError::OutOfRange)
    }
}

impl FatalityProbit for LinearProbit {
    type Error = TestProbitError;

    fn thermal(
        &self,
        probit: &str,
        heat_flux: HeatFluxDensity,
        _exposure_time: Time,
    ) -> Result<Probability, Self::Error> {
        self.check(probit, "linear", heat_flux.get::<watt_per_square_meter>() / 10.0)
    }

    fn overpressure(
        &self,
        probit: &str,
        overpressure: Pressure,
        impulse: PressureImpulse,
    ) -> Result<Probability, Self::Error> {
        let p = overpressure.get::<pascal>() / 1000.0 * impulse.get::<pascal_second>() / 100.0;
        self.check(probit, "linear", p)
    }
}

pub(super) fn decisions() -> ConsequenceDecisions {
    ConsequenceDecisions {
        thermal_probit: "linear".to_string(),
        exposure_time: Time::new::<second>(60.0),
        overpressure_probit: "linear".to_string(),
    }
}

pub(super) fn heat_fluxes(values: &[f64]) -> Vec<HeatFluxDensity> {
    values
        .iter()
        .map(|&q| HeatFluxDensity::new::<watt_per_square_meter>(q))
        .collect()
}

pub(super) fn overpressures(values: &[f64]) -> Vec<Pressure> {
    values.iter().map(|&p| Pressure::new::<pascal>(p)).collect()
}

pub(super) fn impulses(values: &[f64]) -> Vec<PressureImpulse> {
    values
        .iter()
        .map(|&i| PressureImpulse::new::<pascal_second>(i))
        .collect()
}
