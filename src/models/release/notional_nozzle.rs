//! Notional nozzle model.
//!
//! [`NotionalNozzle`] is a [`twine_core::Model`] that maps the jet at a leak
//! orifice throat to an equivalent source at ambient pressure using one of
//! the published notional nozzle models (see [`NozzleModel`]).
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_qra::{
//!     models::release::notional_nozzle::{
//!         Ambient, JetState, Known, NotionalNozzle, NotionalNozzleInput, NozzleModel,
//!     },
//!     support::{
//!         orifice::Orifice,
//!         thermo::{capability::StateFrom, fluid::Hydrogen, model::PerfectGas},
//!     },
//! };
//! use uom::si::{
//!     f64::{Length, Pressure, ThermodynamicTemperature, Velocity},
//!     length::millimeter,
//!     pressure::{bar, pascal},
//!     thermodynamic_temperature::kelvin,
//!     velocity::meter_per_second,
//! };
//!
//! let thermo = PerfectGas::<Hydrogen>::new().unwrap();
//!
//! let throat_pressure = Pressure::new::<bar>(5.28);
//! let throat_state = thermo
//!     .state_from((ThermodynamicTemperature::new::<kelvin>(240.0), throat_pressure))
//!     .unwrap();
//!
//! let known = Known {
//!     throat: JetState::new(
//!         throat_state,
//!         throat_pressure,
//!         Velocity::new::<meter_per_second>(1180.0),
//!     ),
//!     orifice: Orifice::with_discharge_coefficient(Length::new::<millimeter>(1.0), 0.9).unwrap(),
//!     ambient: Ambient {
//!         pressure: Pressure::new::<pascal>(101_325.0),
//!         temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
//!     },
//! };
//!
//! let nozzle = NotionalNozzle::new(&thermo);
//! let exit = nozzle
//!     .call(&NotionalNozzleInput {
//!         known,
//!         model: NozzleModel::YuceilOtugen,
//!     })
//!     .unwrap();
//!
//! assert_eq!(exit.jet.pressure, known.ambient.pressure);
//! assert!(exit.diameter() > known.orifice.diameter());
//! ```

mod core;

pub use self::core::{
    Ambient, BisectionTolerances, JetState, Known, NotionalNozzleConfig, NotionalNozzleError,
    NotionalNozzleThermoModel, NozzleExit, NozzleModel, TemperatureMode, energy_residual,
    total_enthalpy,
};

use std::marker::PhantomData;

use twine_core::Model;

use crate::support::thermo::capability::ThermoModel;

/// Input to the [`NotionalNozzle`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotionalNozzleInput<Fluid> {
    pub known: Known<Fluid>,
    pub model: NozzleModel,
}

/// A notional nozzle bound to a thermodynamic model.
///
/// The thermodynamic model is borrowed, never copied, so one backend can
/// serve many nozzle evaluations.
#[derive(Debug, Clone, Copy)]
pub struct NotionalNozzle<'a, Fluid, Thermo> {
    thermo: &'a Thermo,
    config: NotionalNozzleConfig,
    _fluid: PhantomData<fn() -> Fluid>,
}

impl<'a, Fluid, Thermo> NotionalNozzle<'a, Fluid, Thermo>
where
    Thermo: ThermoModel<Fluid = Fluid>,
{
    /// Creates a notional nozzle with the default solver configuration.
    #[must_use]
    pub fn new(thermo: &'a Thermo) -> Self {
        Self::with_config(thermo, NotionalNozzleConfig::default())
    }

    #[must_use]
    pub fn with_config(thermo: &'a Thermo, config: NotionalNozzleConfig) -> Self {
        Self {
            thermo,
            config,
            _fluid: PhantomData,
        }
    }

    #[must_use]
    pub fn config(&self) -> &NotionalNozzleConfig {
        &self.config
    }
}

impl<Fluid, Thermo> NotionalNozzle<'_, Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    /// Solves the notional nozzle for `known` with the chosen model.
    ///
    /// # Errors
    ///
    /// Returns [`NotionalNozzleError`] on invalid boundary conditions, solver
    /// failures, thermodynamic model failures, or a non-physical exit state.
    pub fn calculate(
        &self,
        known: &Known<Fluid>,
        model: NozzleModel,
    ) -> Result<NozzleExit<Fluid>, NotionalNozzleError> {
        self::core::calculate(known, model, &self.config, self.thermo)
    }
}

impl<Fluid, Thermo> Model for NotionalNozzle<'_, Fluid, Thermo>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    type Input = NotionalNozzleInput<Fluid>;
    type Output = NozzleExit<Fluid>;
    type Error = NotionalNozzleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.calculate(&input.known, input.model)
    }
}
