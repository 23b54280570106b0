use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::millimeter,
    pressure::{bar, pascal},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    orifice::Orifice,
    thermo::{
        capability::{HasSoundSpeed, StateFrom},
        fluid::Hydrogen,
        model::PerfectGas,
    },
};

use super::{Ambient, JetState, Known};

pub(super) fn hydrogen() -> PerfectGas<Hydrogen> {
    PerfectGas::<Hydrogen>::new().expect("hydrogen parameters must be physically valid")
}

pub(super) fn ambient() -> Ambient {
    Ambient {
        pressure: Pressure::new::<pascal>(101_325.0),
        temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
    }
}

/// Choked hydrogen flow from a reservoir through a 1 mm orifice.
///
/// Throat conditions follow the isentropic critical-flow relations for a
/// perfect gas, so the throat velocity is exactly sonic.
pub(super) fn choked_hydrogen(reservoir_bar: f64, discharge_coefficient: f64) -> Known<Hydrogen> {
    let thermo = hydrogen();
    let gamma = thermo.gamma();
    let critical = 2.0 / (gamma + 1.0);

    let t0 = ambient().temperature.get::<kelvin>();
    let throat_temperature = ThermodynamicTemperature::new::<kelvin>(t0 * critical);
    let throat_pressure =
        Pressure::new::<bar>(reservoir_bar * critical.powf(gamma / (gamma - 1.0)));

    let state = thermo
        .state_from((Hydrogen, throat_temperature, throat_pressure))
        .expect("perfect gas states are infallible");
    let velocity = thermo
        .sound_speed(&state)
        .expect("throat temperature is positive");

    Known {
        throat: JetState::new(state, throat_pressure, velocity),
        orifice: Orifice::with_discharge_coefficient(
            Length::new::<millimeter>(1.0),
            discharge_coefficient,
        )
        .expect("test orifice is valid"),
        ambient: ambient(),
    }
}
