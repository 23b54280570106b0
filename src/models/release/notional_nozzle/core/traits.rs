//! Internal traits for notional nozzle solving.

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::thermo::capability::{HasEnthalpy, HasSoundSpeed, StateFrom, ThermoModel};

/// Required thermo model bounds for notional nozzles.
///
/// Every variant needs `ρ(T, P)`; the energy-solving variants also need
/// `T(P, ρ)` and enthalpy, and the sonic variants need the speed of sound.
#[doc(hidden)]
pub trait NotionalNozzleThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasEnthalpy
    + HasSoundSpeed
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
    + StateFrom<(Fluid, Pressure, MassDensity)>
{
}

impl<Fluid, T> NotionalNozzleThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasEnthalpy
        + HasSoundSpeed
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
        + StateFrom<(Fluid, Pressure, MassDensity)>
{
}
