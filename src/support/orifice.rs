//! Circular orifice geometry.
//!
//! An [`Orifice`] is a circular opening characterized by its diameter and a
//! discharge coefficient `Cd`, the ratio of actual to ideal mass flow.
//! Leaks are modeled as orifices; so are notional nozzles, which always use
//! `Cd = 1`.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, MassDensity, MassRate, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    velocity::meter_per_second,
};

use crate::support::constraint::{
    Constrained, ConstraintError, StrictlyPositive, UnitIntervalLowerOpen,
};

/// A circular orifice with a discharge coefficient.
///
/// # Example
///
/// ```
/// use twine_qra::support::orifice::Orifice;
/// use uom::si::{f64::Length, length::millimeter};
///
/// let leak = Orifice::with_discharge_coefficient(Length::new::<millimeter>(1.0), 0.61).unwrap();
/// assert_eq!(leak.discharge_coefficient(), 0.61);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orifice {
    diameter: Constrained<Length, StrictlyPositive>,
    discharge_coefficient: Constrained<f64, UnitIntervalLowerOpen>,
}

impl Orifice {
    /// Creates an ideal orifice (`Cd = 1`) with the given diameter.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the diameter is not strictly positive.
    pub fn new(diameter: Length) -> Result<Self, ConstraintError> {
        Ok(Self {
            diameter: StrictlyPositive::new(diameter)?,
            discharge_coefficient: UnitIntervalLowerOpen::one(),
        })
    }

    /// Creates an orifice with the given diameter and discharge coefficient.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the diameter is not strictly positive
    /// or if `cd` is outside `(0, 1]`.
    pub fn with_discharge_coefficient(diameter: Length, cd: f64) -> Result<Self, ConstraintError> {
        Ok(Self {
            diameter: StrictlyPositive::new(diameter)?,
            discharge_coefficient: UnitIntervalLowerOpen::new(cd)?,
        })
    }

    /// Creates an ideal orifice that passes `m_dot` at the given density and velocity.
    ///
    /// Solves `ṁ = ρ·v·(π/4)·d²` for `d`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the resulting diameter is not strictly
    /// positive (including `NaN` from a non-positive `ρ·v`).
    pub fn conserving_mass_flow(
        m_dot: MassRate,
        density: MassDensity,
        velocity: Velocity,
    ) -> Result<Self, ConstraintError> {
        let flux = density.get::<kilogram_per_cubic_meter>() * velocity.get::<meter_per_second>();
        let area = m_dot.get::<kilogram_per_second>() / flux;
        Self::new(Length::new::<meter>((4.0 * area / PI).sqrt()))
    }

    /// Returns the orifice diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.into_inner()
    }

    /// Returns the discharge coefficient.
    #[must_use]
    pub fn discharge_coefficient(&self) -> f64 {
        self.discharge_coefficient.into_inner()
    }

    /// Returns the geometric flow area, `π·d²/4`.
    #[must_use]
    pub fn area(&self) -> Area {
        let d = self.diameter().get::<meter>();
        Area::new::<square_meter>(PI * d * d / 4.0)
    }

    /// Returns the mass flow rate through the orifice, `Cd·ρ·v·A`.
    #[must_use]
    pub fn mass_flow(&self, density: MassDensity, velocity: Velocity) -> MassRate {
        MassRate::new::<kilogram_per_second>(
            self.discharge_coefficient()
                * density.get::<kilogram_per_cubic_meter>()
                * velocity.get::<meter_per_second>()
                * self.area().get::<square_meter>(),
        )
    }
}
