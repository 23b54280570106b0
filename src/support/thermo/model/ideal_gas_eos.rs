//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state:
//! `p = ρ·R·T`.
//!
//! They are shared by models that assume ideal gas behavior (e.g. calorically perfect gases)
//! and keep the unit bookkeeping for `R·T` in one place.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    temperature_interval, thermodynamic_temperature,
};

use crate::support::units::SpecificGasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub(crate) fn pressure(
    temperature: ThermodynamicTemperature,
    density: MassDensity,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    density * gas_constant * temperature
}

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Computes temperature using the ideal gas equation of state.
///
/// Since [`SpecificGasConstant`] is associated with a `TemperatureInterval`,
/// the result must be manually converted to an absolute temperature.
#[must_use]
pub(crate) fn temperature(
    pressure: Pressure,
    density: MassDensity,
    gas_constant: SpecificGasConstant,
) -> ThermodynamicTemperature {
    let temperature = pressure / (density * gas_constant);
    ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(
        temperature.get::<temperature_interval::kelvin>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::bar,
        specific_heat_capacity::joule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    fn hydrogen_r() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(4124.2)
    }

    #[test]
    fn storage_density_of_hydrogen() {
        // 350 bar at 15°C; the ideal gas law overpredicts the real ~24 kg/m³.
        let t = ThermodynamicTemperature::new::<kelvin>(288.15);
        let p = Pressure::new::<bar>(350.0);

        let rho = density(t, p, hydrogen_r());

        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            29.45,
            max_relative = 1e-3
        );
    }

    #[test]
    fn pressure_temperature_density_are_consistent() {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.2);
        let p = Pressure::new::<bar>(2.5);

        let t = temperature(p, rho, hydrogen_r());
        assert_relative_eq!(pressure(t, rho, hydrogen_r()).get::<bar>(), 2.5);
        assert_relative_eq!(
            density(t, p, hydrogen_r()).get::<kilogram_per_cubic_meter>(),
            1.2
        );
    }
}
