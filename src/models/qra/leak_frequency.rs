//! Component leak frequencies.
//!
//! Leak frequencies for each component type are lognormal distributions
//! with one set of parameters per leak size. Leak sizes are expressed as a
//! fraction of the component's flow area.
//!
//! The tables distinguish hydrogen and methane, and a gas-phase release from
//! a release of saturated fluid. Propane has no data of its own: it uses the
//! methane gas table for both phases.
//!
//! # Example
//!
//! ```
//! use twine_qra::models::qra::leak_frequency::{
//!     Component, LeakSize, Species, component_leak_parameters,
//! };
//!
//! let vessel = component_leak_parameters(Component::Vessel, Species::Hydrogen, None);
//! let full_bore = vessel[LeakSize::Full.index()];
//!
//! assert!(full_bore.is_available());
//! assert!(full_bore.median() < 1e-6);
//! ```

mod tables;

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Sentinel value marking a missing parameter.
const SENTINEL: f64 = 999.0;

/// Released fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Hydrogen,
    Methane,
    Propane,
}

impl FromStr for Species {
    type Err = LookupError;

    /// Parses a chemical formula (`h2`, `ch4`, `c3h8`) or name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h2" | "hydrogen" => Ok(Self::Hydrogen),
            "ch4" | "methane" => Ok(Self::Methane),
            "c3h8" | "propane" => Ok(Self::Propane),
            _ => Err(LookupError::UnknownSpecies(s.to_string())),
        }
    }
}

/// Phase of a saturated release.
///
/// Either phase selects the saturated-fluid table. A fluid that is not
/// saturated has no phase (`None`) and uses the gas table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaturatedPhase {
    Gas,
    Liquid,
}

impl FromStr for SaturatedPhase {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gas" => Ok(Self::Gas),
            "liquid" => Ok(Self::Liquid),
            _ => Err(LookupError::UnknownPhase(s.to_string())),
        }
    }
}

/// Component types with leak frequency data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Compressor,
    Vessel,
    Filter,
    Flange,
    Hose,
    Joint,
    Pipe,
    Valve,
    Instrument,
    Exchanger,
    Vaporizer,
    /// Loading arm.
    Arm,
    /// User-defined component slot.
    Extra1,
    /// User-defined component slot.
    Extra2,
}

impl Component {
    /// Every component, in table order.
    pub const ALL: [Self; 14] = [
        Self::Compressor,
        Self::Vessel,
        Self::Filter,
        Self::Flange,
        Self::Hose,
        Self::Joint,
        Self::Pipe,
        Self::Valve,
        Self::Instrument,
        Self::Exchanger,
        Self::Vaporizer,
        Self::Arm,
        Self::Extra1,
        Self::Extra2,
    ];

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Compressor => "compressor",
            Self::Vessel => "vessel",
            Self::Filter => "filter",
            Self::Flange => "flange",
            Self::Hose => "hose",
            Self::Joint => "joint",
            Self::Pipe => "pipe",
            Self::Valve => "valve",
            Self::Instrument => "instrument",
            Self::Exchanger => "exchanger",
            Self::Vaporizer => "vaporizer",
            Self::Arm => "arm",
            Self::Extra1 => "extra1",
            Self::Extra2 => "extra2",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Component {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|component| component.key() == key)
            .ok_or_else(|| LookupError::UnknownComponent(s.to_string()))
    }
}

/// Leak size as a fraction of the component flow area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeakSize {
    /// 0.01 %
    VerySmall,
    /// 0.1 %
    Small,
    /// 1 %
    Medium,
    /// 10 %
    Large,
    /// 100 %, a full-bore rupture.
    Full,
}

impl LeakSize {
    pub const COUNT: usize = 5;

    /// Every leak size, smallest first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::VerySmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Full,
    ];

    /// Position of this size in a parameter row.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Leak area divided by component flow area.
    #[must_use]
    pub fn area_fraction(self) -> f64 {
        match self {
            Self::VerySmall => 1e-4,
            Self::Small => 1e-3,
            Self::Medium => 1e-2,
            Self::Large => 1e-1,
            Self::Full => 1.0,
        }
    }
}

/// Parameters `(μ, σ)` of a lognormal leak frequency distribution.
///
/// The natural log of the annual leak frequency is normally distributed
/// with mean `μ` and standard deviation `σ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LognormalParameters {
    pub mu: f64,
    pub sigma: f64,
}

impl LognormalParameters {
    /// Marks a component and leak size without data.
    pub const NO_DATA: Self = Self {
        mu: SENTINEL,
        sigma: SENTINEL,
    };

    #[must_use]
    pub fn is_available(&self) -> bool {
        !(self.mu == SENTINEL && self.sigma == SENTINEL)
    }

    /// Returns the parameters, or `None` for the no-data sentinel.
    #[must_use]
    pub fn distribution(self) -> Option<Self> {
        self.is_available().then_some(self)
    }

    /// Median leak frequency per year, `e^μ`.
    ///
    /// Meaningless for the no-data sentinel; check [`is_available`](Self::is_available).
    #[must_use]
    pub fn median(&self) -> f64 {
        self.mu.exp()
    }

    /// Mean leak frequency per year, `e^(μ + σ²/2)`.
    ///
    /// Meaningless for the no-data sentinel; check [`is_available`](Self::is_available).
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }
}

/// Lognormal parameters for every component and leak size of one fluid.
#[derive(Debug, PartialEq)]
pub struct LeakTable([[LognormalParameters; LeakSize::COUNT]; 14]);

impl LeakTable {
    /// Parameters for `component`, ordered like [`LeakSize::ALL`].
    #[must_use]
    pub fn get(&self, component: Component) -> &[LognormalParameters; LeakSize::COUNT] {
        &self.0[component as usize]
    }
}

/// Errors from looking up leak parameters by string key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown species {0:?}")]
    UnknownSpecies(String),

    #[error("unknown component {0:?}")]
    UnknownComponent(String),

    #[error("unknown saturated phase {0:?}; expected \"gas\" or \"liquid\"")]
    UnknownPhase(String),
}

/// Returns the parameter table for a species and saturated phase.
///
/// Any saturated phase selects the saturated-fluid table; `None` selects the
/// gas table. Both propane tables are the methane gas table.
#[must_use]
pub fn leak_table(species: Species, saturated_phase: Option<SaturatedPhase>) -> &'static LeakTable {
    let saturated = saturated_phase.is_some();
    match species {
        Species::Hydrogen if saturated => &tables::H2_LIQUID,
        Species::Hydrogen => &tables::H2_GAS,
        Species::Methane if saturated => &tables::CH4_LIQUID,
        Species::Methane | Species::Propane => &tables::CH4_GAS,
    }
}

/// Returns the five leak-size parameters of one component.
#[must_use]
pub fn component_leak_parameters(
    component: Component,
    species: Species,
    saturated_phase: Option<SaturatedPhase>,
) -> [LognormalParameters; LeakSize::COUNT] {
    *leak_table(species, saturated_phase).get(component)
}

/// Looks up leak parameters by string keys.
///
/// # Errors
///
/// Returns a [`LookupError`] naming the first key that is not recognized.
pub fn component_leak_parameters_by_key(
    component: &str,
    species: &str,
    saturated_phase: Option<&str>,
) -> Result<[LognormalParameters; LeakSize::COUNT], LookupError> {
    let species: Species = species.parse()?;
    let saturated_phase = saturated_phase
        .map(str::parse::<SaturatedPhase>)
        .transpose()?;
    let component: Component = component.parse()?;
    Ok(component_leak_parameters(component, species, saturated_phase))
}
