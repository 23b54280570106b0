use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// A `State<Fluid>` captures temperature, density, and any fluid-specific
/// data. Pressure, enthalpy, and other properties are evaluated from it by a
/// capability-based thermodynamic model.
///
/// The `Fluid` type parameter is usually a marker type such as
/// [`Hydrogen`](crate::support::thermo::fluid::Hydrogen), but can carry
/// state-defining data like a blend composition.
///
/// # Example
///
/// ```
/// use twine_qra::support::thermo::{State, fluid::Hydrogen};
/// use uom::si::{
///     f64::{ThermodynamicTemperature, MassDensity},
///     thermodynamic_temperature::kelvin,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
///     density: MassDensity::new::<kilogram_per_cubic_meter>(23.0),
///     fluid: Hydrogen,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given density, keeping other fields unchanged.
    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self { density, ..self }
    }
}
