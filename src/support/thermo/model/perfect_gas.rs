//! Calorically perfect gas model.
//!
//! `PerfectGas` implements a simple and widely-used engineering approximation:
//! an ideal gas equation of state with constant heat capacities.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R·T`
//! - Calorically perfect: `cp` and `cv` are constant (do not vary with temperature)
//! - Speed of sound: `a = √(γ·R·T)` with `γ = cp/cv`
//!
//! # When To Use
//!
//! Hydrogen stays close to ideal at ambient temperature and moderate
//! pressure, so this model is adequate for screening release calculations and
//! for exercising release models in tests. High-pressure storage (hundreds of
//! bar) and cryogenic releases need a real-fluid backend implementing the same
//! capability traits.
//!
//! # Reference State
//!
//! Enthalpy is reported relative to a configurable reference state
//! (`T_ref`, `p_ref`, `h_ref`).

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
        pressure::{atmosphere, pascal},
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
        velocity::meter_per_second,
    },
};

use crate::support::units::{SpecificEnthalpy, SpecificGasConstant, TemperatureDifference};
use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{HasCp, HasCv, HasEnthalpy, HasPressure, HasSoundSpeed, StateFrom, ThermoModel},
    },
};

use super::ideal_gas_eos;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerfectGasParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid reference pressure: {p_ref:?}")]
    ReferencePressure { p_ref: Pressure },
    #[error("non-physical heat capacities: cv = cp - R must be > 0; cp={cp:?}, R={r:?}, cv={cv:?}")]
    NonPhysicalCv {
        r: SpecificGasConstant,
        cp: SpecificHeatCapacity,
        cv: SpecificHeatCapacity,
    },
}

/// Reference values used to define the enthalpy offset for a [`PerfectGas`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasReference {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
}

impl PerfectGasReference {
    /// Returns a standard reference: 0°C, 1 atm, `h_ref = 0`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            pressure: Pressure::new::<atmosphere>(1.0),
            enthalpy: SpecificEnthalpy::ZERO,
        }
    }
}

/// Constant parameters for the [`PerfectGas`] model.
///
/// These values are typically provided by a fluid's [`PerfectGasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
    pub reference: PerfectGasReference,
}

impl PerfectGasParameters {
    #[must_use]
    pub fn new(gas_constant: SpecificGasConstant, cp: SpecificHeatCapacity) -> Self {
        Self {
            gas_constant,
            cp,
            reference: PerfectGasReference::standard(),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: PerfectGasReference) -> Self {
        self.reference = reference;
        self
    }
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas model (constant `cp`/`cv`) using the ideal gas equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas<Fluid> {
    r: SpecificGasConstant,
    cp: SpecificHeatCapacity,
    cv: SpecificHeatCapacity,
    t_ref: ThermodynamicTemperature,
    p_ref: Pressure,
    h_ref: SpecificEnthalpy,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for PerfectGas<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: PerfectGasFluid> PerfectGas<Fluid> {
    /// Creates a perfect gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if any required constant is
    /// invalid or if `cv = cp - R` is non-physical.
    pub fn new() -> Result<Self, PerfectGasParametersError> {
        Self::from_parameters(Fluid::parameters())
    }
}

impl<Fluid> PerfectGas<Fluid> {
    /// Creates a perfect gas model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if any constant is invalid or if
    /// `cv = cp - R` is non-physical.
    pub fn from_parameters(
        parameters: PerfectGasParameters,
    ) -> Result<Self, PerfectGasParametersError> {
        let gas_constant = parameters.gas_constant;
        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::GasConstant { r: gas_constant });
        }

        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::Cp { cp });
        }

        let reference_temperature = parameters.reference.temperature;
        if StrictlyPositive::check(&reference_temperature.get::<kelvin>()).is_err() {
            return Err(PerfectGasParametersError::ReferenceTemperature {
                t_ref: reference_temperature,
            });
        }

        let reference_pressure = parameters.reference.pressure;
        if StrictlyPositive::check(&reference_pressure.get::<pascal>()).is_err() {
            return Err(PerfectGasParametersError::ReferencePressure {
                p_ref: reference_pressure,
            });
        }

        let cv = cp - gas_constant;
        if StrictlyPositive::check(&cv.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::NonPhysicalCv {
                r: gas_constant,
                cp,
                cv,
            });
        }

        Ok(Self {
            r: gas_constant,
            cp,
            cv,
            t_ref: reference_temperature,
            p_ref: reference_pressure,
            h_ref: parameters.reference.enthalpy,
            _marker: PhantomData,
        })
    }

    /// Creates a state at the reference temperature and pressure.
    #[must_use]
    pub fn reference_state(&self, fluid: Fluid) -> State<Fluid> {
        let temperature = self.t_ref;
        let pressure = self.p_ref;
        let density = ideal_gas_eos::density(temperature, pressure, self.r);

        State {
            temperature,
            density,
            fluid,
        }
    }

    /// Ratio of specific heats, `γ = cp/cv`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        (self.cp / self.cv).get::<ratio>()
    }
}

impl<Fluid> HasPressure for PerfectGas<Fluid> {
    /// Computes pressure with `P = ρ·R·T`.
    fn pressure(&self, state: &State<Fluid>) -> Result<Pressure, PropertyError> {
        Ok(ideal_gas_eos::pressure(
            state.temperature,
            state.density,
            self.r,
        ))
    }
}

impl<Fluid> HasEnthalpy for PerfectGas<Fluid> {
    /// Computes enthalpy with `h = h₀ + cp·(T − T₀)`.
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(self.h_ref + self.cp * state.temperature.minus(self.t_ref))
    }
}

impl<Fluid> HasCp for PerfectGas<Fluid> {
    /// Returns the constant `cp` of the fluid.
    fn cp(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cp)
    }
}

impl<Fluid> HasCv for PerfectGas<Fluid> {
    /// Returns the constant `cv` of the fluid.
    fn cv(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cv)
    }
}

impl<Fluid> HasSoundSpeed for PerfectGas<Fluid> {
    /// Computes the speed of sound with `a = √(γ·R·T)`.
    fn sound_speed(&self, state: &State<Fluid>) -> Result<Velocity, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        if !(t.is_finite() && t > 0.0) {
            return Err(PropertyError::OutOfDomain {
                context: format!("speed of sound requires a positive temperature, got {t} K"),
            });
        }

        let r = self.r.get::<joule_per_kilogram_kelvin>();
        Ok(Velocity::new::<meter_per_second>(
            (self.gamma() * r * t).sqrt(),
        ))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, MassDensity)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, density): (Fluid, ThermodynamicTemperature, MassDensity),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        let density = ideal_gas_eos::density(temperature, pressure, self.r);

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl<Fluid> StateFrom<(Fluid, Pressure, MassDensity)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, pressure, density): (Fluid, Pressure, MassDensity),
    ) -> Result<State<Fluid>, Self::Error> {
        let temperature = ideal_gas_eos::temperature(pressure, density, self.r);

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl<Fluid> StateFrom<(Fluid, Pressure, SpecificEnthalpy)> for PerfectGas<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Fluid, Pressure, SpecificEnthalpy),
    ) -> Result<State<Fluid>, Self::Error> {
        let temperature = self.t_ref + (enthalpy - self.h_ref) / self.cp;
        let density = ideal_gas_eos::density(temperature, pressure, self.r);

        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}
