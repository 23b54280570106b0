use twine_solvers::equation::bisection;
use uom::si::{
    available_energy::joule_per_kilogram, f64::MassDensity,
    mass_density::kilogram_per_cubic_meter,
};

use crate::support::{solve::secant, units::SpecificEnthalpy};

/// Solver configuration for the energy-conserving notional nozzles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotionalNozzleConfig {
    /// Bracketed density search used by the momentum-conserving model.
    pub bisection: BisectionTolerances,

    /// Open density search used by the sonic model, in kg/m³.
    pub secant: secant::Config,
}

/// Tolerances for the bracketed density search.
#[derive(Debug, Clone, Copy)]
pub struct BisectionTolerances {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the exit density search variable.
    pub density_tol: MassDensity,

    /// Absolute tolerance for the total enthalpy residual.
    pub energy_tol: SpecificEnthalpy,
}

impl Default for BisectionTolerances {
    fn default() -> Self {
        Self {
            max_iters: 100,
            density_tol: MassDensity::new::<kilogram_per_cubic_meter>(1e-12),
            energy_tol: SpecificEnthalpy::new::<joule_per_kilogram>(1e-9),
        }
    }
}

impl BisectionTolerances {
    /// Converts these tolerances into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.density_tol.get::<kilogram_per_cubic_meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.energy_tol.get::<joule_per_kilogram>(),
        }
    }
}
