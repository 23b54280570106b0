//! Total enthalpy balance between the throat and a candidate exit state.
//!
//! The energy-conserving notional nozzles search over exit density at
//! ambient pressure until the total specific enthalpy, `h + v²/2`, matches
//! the throat.

use std::marker::PhantomData;

use twine_core::{EquationProblem, Model};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, Velocity},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::support::{
    thermo::{
        State,
        capability::{HasEnthalpy, HasSoundSpeed},
    },
    units::SpecificEnthalpy,
};

use super::{JetState, NotionalNozzleError, traits::NotionalNozzleThermoModel};

/// Returns the total specific enthalpy of a jet, `h + v²/2`.
///
/// # Errors
///
/// Returns [`NotionalNozzleError::ThermoModelFailed`] if the enthalpy cannot
/// be evaluated.
pub fn total_enthalpy<Thermo: HasEnthalpy>(
    thermo: &Thermo,
    jet: &JetState<Thermo::Fluid>,
) -> Result<SpecificEnthalpy, NotionalNozzleError> {
    let h = thermo
        .enthalpy(&jet.state)
        .map_err(|err| NotionalNozzleError::thermo_failed("enthalpy", err))?;

    let v = jet.velocity.get::<meter_per_second>();
    let kinetic = SpecificEnthalpy::new::<joule_per_kilogram>(0.5 * v * v);

    Ok(h + kinetic)
}

/// Returns `(h₁ + v₁²/2) − (h₂ + v₂²/2)`.
///
/// Zero when total specific enthalpy is conserved from `upstream` to
/// `downstream`.
///
/// # Errors
///
/// Returns [`NotionalNozzleError::ThermoModelFailed`] if either enthalpy
/// cannot be evaluated.
pub fn energy_residual<Thermo: HasEnthalpy>(
    thermo: &Thermo,
    upstream: &JetState<Thermo::Fluid>,
    downstream: &JetState<Thermo::Fluid>,
) -> Result<SpecificEnthalpy, NotionalNozzleError> {
    Ok(total_enthalpy(thermo, upstream)? - total_enthalpy(thermo, downstream)?)
}

/// How the exit velocity follows from the exit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ExitVelocity {
    /// Velocity fixed by the momentum balance.
    Fixed(Velocity),

    /// Local speed of sound.
    Sonic,
}

impl ExitVelocity {
    pub(super) fn resolve<Thermo: HasSoundSpeed>(
        self,
        thermo: &Thermo,
        state: &State<Thermo::Fluid>,
    ) -> Result<Velocity, NotionalNozzleError> {
        match self {
            Self::Fixed(velocity) => Ok(velocity),
            Self::Sonic => thermo
                .sound_speed(state)
                .map_err(|err| NotionalNozzleError::thermo_failed("exit speed of sound", err)),
        }
    }
}

/// Builds a candidate exit jet at ambient pressure from its density.
pub(super) struct EnergyBalanceModel<'a, Fluid, Thermo> {
    thermo: &'a Thermo,
    fluid: &'a Fluid,
    pressure: Pressure,
    velocity: ExitVelocity,
}

impl<'a, Fluid, Thermo> EnergyBalanceModel<'a, Fluid, Thermo> {
    pub(super) fn new(
        thermo: &'a Thermo,
        fluid: &'a Fluid,
        pressure: Pressure,
        velocity: ExitVelocity,
    ) -> Self {
        Self {
            thermo,
            fluid,
            pressure,
            velocity,
        }
    }
}

impl<Fluid, Thermo> Model for EnergyBalanceModel<'_, Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    type Input = MassDensity;
    type Output = JetState<Fluid>;
    type Error = NotionalNozzleError;

    fn call(&self, density: &Self::Input) -> Result<Self::Output, Self::Error> {
        let state = self
            .thermo
            .state_from((self.fluid.clone(), self.pressure, *density))
            .map_err(|err| NotionalNozzleError::thermo_failed("exit state from (P, rho)", err))?;

        let velocity = self.velocity.resolve(self.thermo, &state)?;

        Ok(JetState::new(state, self.pressure, velocity))
    }
}

/// Equation problem for total enthalpy conservation.
///
/// Computes the residual as `H_throat − H_exit` in J/kg.
pub(super) struct EnergyBalanceProblem<'a, Fluid, Thermo> {
    thermo: &'a Thermo,
    upstream: &'a JetState<Fluid>,
    _fluid: PhantomData<Fluid>,
}

impl<'a, Fluid, Thermo> EnergyBalanceProblem<'a, Fluid, Thermo> {
    pub(super) fn new(thermo: &'a Thermo, upstream: &'a JetState<Fluid>) -> Self {
        Self {
            thermo,
            upstream,
            _fluid: PhantomData,
        }
    }
}

impl<Fluid, Thermo> EquationProblem<1> for EnergyBalanceProblem<'_, Fluid, Thermo>
where
    Thermo: HasEnthalpy<Fluid = Fluid>,
{
    type Input = MassDensity;
    type Output = JetState<Fluid>;
    type Error = NotionalNozzleError;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let residual = energy_residual(self.thermo, self.upstream, output)?;
        Ok([residual.get::<joule_per_kilogram>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, pressure::pascal, thermodynamic_temperature::kelvin};

    use crate::support::thermo::{capability::StateFrom, fluid::Hydrogen};

    use super::super::test_support::hydrogen;

    fn jet(temperature: f64, velocity: f64) -> JetState<Hydrogen> {
        let thermo = hydrogen();
        let pressure = Pressure::new::<pascal>(101_325.0);
        let state = thermo
            .state_from((
                Hydrogen,
                ThermodynamicTemperature::new::<kelvin>(temperature),
                pressure,
            ))
            .unwrap();
        JetState::new(state, pressure, Velocity::new::<meter_per_second>(velocity))
    }

    #[test]
    fn identical_jets_have_zero_residual() {
        let thermo = hydrogen();
        let a = jet(250.0, 1200.0);

        let residual = energy_residual(&thermo, &a, &a).unwrap();

        assert_eq!(residual.get::<joule_per_kilogram>(), 0.0);
    }

    #[test]
    fn kinetic_energy_trades_against_enthalpy() {
        let thermo = hydrogen();
        let slow_hot = jet(300.0, 0.0);
        let fast_cold = jet(250.0, 1000.0);

        let residual = energy_residual(&thermo, &slow_hot, &fast_cold)
            .unwrap()
            .get::<joule_per_kilogram>();

        // cp·ΔT − v²/2 for hydrogen's constant cp.
        assert_relative_eq!(residual, 14_307.0 * 50.0 - 500_000.0, max_relative = 1e-12);
    }

    #[test]
    fn sonic_candidate_moves_at_the_speed_of_sound() {
        let thermo = hydrogen();
        let pressure = Pressure::new::<pascal>(101_325.0);
        let model = EnergyBalanceModel::new(&thermo, &Hydrogen, pressure, ExitVelocity::Sonic);

        let candidate = model
            .call(&MassDensity::new::<kilogram_per_cubic_meter>(0.1))
            .unwrap();
        let a = thermo.sound_speed(&candidate.state).unwrap();

        assert_eq!(candidate.pressure, pressure);
        assert_relative_eq!(
            candidate.velocity.get::<meter_per_second>(),
            a.get::<meter_per_second>()
        );
    }
}
