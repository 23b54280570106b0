//! Boundary conditions for a notional nozzle calculation.

use uom::si::{
    f64::{MassDensity, MassRate, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{orifice::Orifice, thermo::State};

use super::NotionalNozzleError;

/// A flowing fluid: thermodynamic state, static pressure, and bulk velocity.
///
/// The pressure is carried alongside the state because jet calculations
/// work at a known pressure, and re-evaluating it through a real-fluid model
/// is both costly and a source of round-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JetState<Fluid> {
    pub state: State<Fluid>,
    pub pressure: Pressure,
    pub velocity: Velocity,
}

impl<Fluid> JetState<Fluid> {
    #[must_use]
    pub fn new(state: State<Fluid>, pressure: Pressure, velocity: Velocity) -> Self {
        Self {
            state,
            pressure,
            velocity,
        }
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.state.temperature
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.state.density
    }

    /// Mass flow rate of this jet through `orifice`.
    #[must_use]
    pub fn mass_flow(&self, orifice: &Orifice) -> MassRate {
        orifice.mass_flow(self.state.density, self.velocity)
    }
}

/// Ambient conditions the jet expands into.
///
/// Only the pressure and temperature of the surroundings matter to the
/// notional nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

/// Known conditions for a notional nozzle calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Known<Fluid> {
    /// Jet at the orifice throat, after expansion through the real orifice.
    pub throat: JetState<Fluid>,

    /// The real orifice, including its discharge coefficient.
    pub orifice: Orifice,

    pub ambient: Ambient,
}

impl<Fluid> Known<Fluid> {
    /// Checks that the inputs describe an under-expanded jet.
    ///
    /// All pressures, temperatures, the throat density, and the throat
    /// velocity must be finite and positive, and the throat pressure must not
    /// be below ambient.
    pub(super) fn validate(&self) -> Result<(), NotionalNozzleError> {
        let throat = &self.throat;
        let checks = [
            ("throat pressure", throat.pressure.get::<pascal>()),
            (
                "throat density",
                throat.density().get::<kilogram_per_cubic_meter>(),
            ),
            ("throat temperature", throat.temperature().get::<kelvin>()),
            (
                "throat velocity",
                throat.velocity.get::<meter_per_second>(),
            ),
            ("ambient pressure", self.ambient.pressure.get::<pascal>()),
            (
                "ambient temperature",
                self.ambient.temperature.get::<kelvin>(),
            ),
        ];

        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(NotionalNozzleError::InvalidBoundary {
                    context: format!("{name} must be finite and positive, got {value}"),
                });
            }
        }

        if throat.pressure < self.ambient.pressure {
            return Err(NotionalNozzleError::InvalidBoundary {
                context: format!(
                    "throat pressure {} Pa is below ambient pressure {} Pa",
                    throat.pressure.get::<pascal>(),
                    self.ambient.pressure.get::<pascal>(),
                ),
            });
        }

        Ok(())
    }
}
