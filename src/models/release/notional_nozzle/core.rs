//! Notional nozzle modeling.
//!
//! A highly under-expanded jet leaves the orifice throat above ambient
//! pressure and expands through a shock structure before it behaves like
//! an ordinary free jet. A notional nozzle replaces that region with an
//! equivalent source at ambient pressure: a state, a velocity, and an
//! effective diameter that carries the same mass flow as the throat.

mod config;
mod energy;
mod error;
mod input;
mod model;
mod results;
mod solve;
mod traits;

#[cfg(test)]
mod test_support;

pub use config::{BisectionTolerances, NotionalNozzleConfig};
pub use energy::{energy_residual, total_enthalpy};
pub use error::NotionalNozzleError;
pub use input::{Ambient, JetState, Known};
pub use model::{NozzleModel, TemperatureMode};
pub use results::NozzleExit;
pub use traits::NotionalNozzleThermoModel;

/// Solves a notional nozzle for a known throat and ambient.
///
/// # Errors
///
/// Returns [`NotionalNozzleError`] on invalid boundary conditions, solver
/// failures, thermodynamic model failures, or a non-physical exit state.
pub fn calculate<Fluid, Thermo>(
    known: &Known<Fluid>,
    model: NozzleModel,
    config: &NotionalNozzleConfig,
    thermo: &Thermo,
) -> Result<NozzleExit<Fluid>, NotionalNozzleError>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    solve::solve(known, model, config, thermo)
}
