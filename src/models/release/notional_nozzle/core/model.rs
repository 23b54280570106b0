//! Notional nozzle model variants.

use std::fmt;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::NotionalNozzleError;

/// How the exit temperature of a notional nozzle is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureMode {
    /// Solve for the temperature that conserves total enthalpy.
    SolveEnergy,

    /// Use a given temperature, usually the stagnation temperature.
    Fixed(ThermodynamicTemperature),

    /// Keep the temperature at the orifice throat.
    Throat,
}

/// The published notional nozzle models.
///
/// | Model | Momentum | Temperature |
/// |---|---|---|
/// | [`YuceilOtugen`](Self::YuceilOtugen) | conserved | solved from energy |
/// | [`Birch2`](Self::Birch2) | conserved | fixed |
/// | [`EwanMoodie`](Self::EwanMoodie) | sonic exit | throat |
/// | [`Birch`](Self::Birch) | sonic exit | fixed |
/// | [`Molkov`](Self::Molkov) | sonic exit | solved from energy |
///
/// Momentum-conserving models accelerate the jet from the throat to the exit
/// plane; the others assume the exit velocity is the local speed of sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NozzleModel {
    /// Yüceil & Ötügen (2002).
    YuceilOtugen,

    /// Birch et al. (1987), momentum-conserving variant.
    Birch2 {
        temperature: ThermodynamicTemperature,
    },

    /// Ewan & Moodie (1986).
    EwanMoodie,

    /// Birch et al. (1984).
    Birch {
        temperature: ThermodynamicTemperature,
    },

    /// Molkov et al. (2009).
    Molkov,
}

impl NozzleModel {
    /// Resolves a momentum flag and temperature mode to a named model.
    ///
    /// # Errors
    ///
    /// Returns [`NotionalNozzleError::UnsupportedModel`] for a throat
    /// temperature combined with momentum conservation, which no published
    /// model uses.
    pub fn from_flags(
        conserve_momentum: bool,
        temperature_mode: TemperatureMode,
    ) -> Result<Self, NotionalNozzleError> {
        match (conserve_momentum, temperature_mode) {
            (true, TemperatureMode::SolveEnergy) => Ok(Self::YuceilOtugen),
            (true, TemperatureMode::Fixed(temperature)) => Ok(Self::Birch2 { temperature }),
            (true, TemperatureMode::Throat) => Err(NotionalNozzleError::UnsupportedModel {
                reason: "throat temperature with momentum conservation",
            }),
            (false, TemperatureMode::Throat) => Ok(Self::EwanMoodie),
            (false, TemperatureMode::Fixed(temperature)) => Ok(Self::Birch { temperature }),
            (false, TemperatureMode::SolveEnergy) => Ok(Self::Molkov),
        }
    }

    /// Parses a short model key: `yuce`, `bir2`, `ewan`, `birc`, or `molk`.
    ///
    /// Keys are case-insensitive.
    /// The Birch variants take `stagnation_temperature` as their fixed exit
    /// temperature; the other models ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`NotionalNozzleError::UnknownModelKey`] for any other key.
    pub fn from_key(
        key: &str,
        stagnation_temperature: ThermodynamicTemperature,
    ) -> Result<Self, NotionalNozzleError> {
        let temperature = stagnation_temperature;
        match key.trim().to_ascii_lowercase().as_str() {
            "yuce" => Ok(Self::YuceilOtugen),
            "bir2" => Ok(Self::Birch2 { temperature }),
            "ewan" => Ok(Self::EwanMoodie),
            "birc" => Ok(Self::Birch { temperature }),
            "molk" => Ok(Self::Molkov),
            _ => Err(NotionalNozzleError::UnknownModelKey {
                key: key.to_string(),
            }),
        }
    }

    /// Returns true if the model conserves momentum between throat and exit.
    #[must_use]
    pub fn conserves_momentum(&self) -> bool {
        matches!(self, Self::YuceilOtugen | Self::Birch2 { .. })
    }

    #[must_use]
    pub fn temperature_mode(&self) -> TemperatureMode {
        match *self {
            Self::YuceilOtugen | Self::Molkov => TemperatureMode::SolveEnergy,
            Self::Birch2 { temperature } | Self::Birch { temperature } => {
                TemperatureMode::Fixed(temperature)
            }
            Self::EwanMoodie => TemperatureMode::Throat,
        }
    }

    /// Short key accepted by [`NozzleModel::from_key`].
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::YuceilOtugen => "yuce",
            Self::Birch2 { .. } => "bir2",
            Self::EwanMoodie => "ewan",
            Self::Birch { .. } => "birc",
            Self::Molkov => "molk",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::YuceilOtugen => "Yuceil/Otugen",
            Self::Birch2 { .. } => "Birch2",
            Self::EwanMoodie => "Ewan/Moodie",
            Self::Birch { .. } => "Birch",
            Self::Molkov => "Molkov",
        }
    }
}

impl fmt::Display for NozzleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Birch2 { temperature } | Self::Birch { temperature } => {
                write!(f, "{} (T = {} K)", self.name(), temperature.get::<kelvin>())
            }
            _ => f.write_str(self.name()),
        }
    }
}
