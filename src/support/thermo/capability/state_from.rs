use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which combinations of
/// inputs a model can use to construct a state.
/// If a model does not implement `StateFrom<Input>`, that input is simply
/// not supported.
///
/// The equation-of-state queries used by release models map onto inputs:
/// - `(Fluid, ThermodynamicTemperature, Pressure)` gives `ρ(T, P)`
/// - `(Fluid, Pressure, MassDensity)` gives `T(P, ρ)`
/// - `(Fluid, Pressure, SpecificEnthalpy)` gives the state on an isobar at known enthalpy
///
/// ## Default fluid convenience
///
/// If a model implements `StateFrom<(Fluid, A, B)>` and `Fluid: Default`,
/// it also implements `StateFrom<(A, B)>`, so marker fluids like
/// [`Hydrogen`](crate::support::thermo::fluid::Hydrogen) can be omitted:
/// `thermo.state_from((t, p))`.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Default-fluid convenience impl.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
