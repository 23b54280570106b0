use std::{fmt, str::FromStr};

use super::ConsequenceError;

/// The hazard a consequence calculation evaluates.
///
/// The absence of a hazard is expressed as `Option::<ConsequenceType>::None`,
/// which contributes zero fatalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsequenceType {
    /// Radiant heat flux from a jet fire.
    #[cfg_attr(feature = "serde", serde(rename = "thermal"))]
    Thermal,

    /// Peak overpressure and impulse from an explosion.
    #[cfg_attr(feature = "serde", serde(rename = "overp", alias = "overpressure"))]
    Overpressure,
}

impl ConsequenceType {
    /// Short key used in logs and configuration.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::Overpressure => "overp",
        }
    }
}

impl fmt::Display for ConsequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConsequenceType {
    type Err = ConsequenceError;

    /// Parses `thermal`, `overp`, or `overpressure`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thermal" => Ok(Self::Thermal),
            "overp" | "overpressure" => Ok(Self::Overpressure),
            _ => Err(ConsequenceError::UnsupportedConsequenceType(s.to_string())),
        }
    }
}
