//! Results type for notional nozzle solving.

use uom::si::f64::{Length, ThermodynamicTemperature};

use crate::support::orifice::Orifice;

use super::{JetState, NozzleModel};

/// The equivalent ambient-pressure source produced by a notional nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleExit<Fluid> {
    /// Jet at the notional nozzle exit, at ambient pressure.
    pub jet: JetState<Fluid>,

    /// Ideal (`Cd = 1`) orifice that passes the throat mass flow at the exit
    /// density and velocity.
    pub orifice: Orifice,

    /// The model that produced this exit.
    pub model: NozzleModel,
}

impl<Fluid> NozzleExit<Fluid> {
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.jet.temperature()
    }

    /// Effective source diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.orifice.diameter()
    }
}
