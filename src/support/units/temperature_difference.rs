use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// yield a [`TemperatureInterval`], so enthalpy offsets like `cp·(T − T₀)`
/// need this helper.
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn cryogenic_to_ambient() {
        let liquid_hydrogen = ThermodynamicTemperature::new::<abs_kelvin>(20.3);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(15.0);

        assert_relative_eq!(
            ambient.minus(liquid_hydrogen).get::<delta_kelvin>(),
            267.85,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            liquid_hydrogen.minus(ambient).get::<delta_kelvin>(),
            -267.85,
            epsilon = 1e-9
        );
    }
}
