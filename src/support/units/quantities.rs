use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
///
/// Also the dimension of specific kinetic energy (`v²/2`).
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Overpressure impulse, Pa·s in SI.
///
/// The time integral of a blast overpressure.
/// Dimensionally identical to dynamic viscosity, so values can be built with
/// `uom::si::dynamic_viscosity` units or as `Pressure * Time`.
pub type PressureImpulse = Quantity<ISQ<N1, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
