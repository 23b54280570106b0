use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::{solve::secant, units::SpecificEnthalpy};

/// Errors that can occur while solving a notional nozzle.
#[derive(Debug, Error)]
pub enum NotionalNozzleError {
    /// The momentum and temperature options do not name a published model.
    #[error("unsupported notional nozzle model: {reason}")]
    UnsupportedModel { reason: &'static str },

    /// A model key did not match any known notional nozzle.
    #[error("unknown notional nozzle model key: {key:?}")]
    UnknownModelKey { key: String },

    /// The throat or ambient conditions do not describe an under-expanded jet.
    #[error("invalid boundary conditions: {context}")]
    InvalidBoundary { context: String },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The secant solver encountered an error.
    #[error("secant solver error")]
    Secant(#[from] secant::Error),

    /// A solver reached its iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Total enthalpy residual at the last iterate.
        residual: SpecificEnthalpy,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The solved exit state has a non-positive or non-finite density or velocity.
    #[error("non-physical notional nozzle exit: {context}")]
    NonPhysicalExit { context: String },

    /// A thermodynamic model operation failed.
    ///
    /// This failure can be from property evaluation or state construction.
    #[error("thermodynamic model failed: {context}")]
    ThermoModelFailed {
        /// Operation context for the thermodynamic model failure.
        context: String,

        /// Underlying thermodynamic model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl NotionalNozzleError {
    /// Creates a thermo model failure error with context.
    pub(super) fn thermo_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ThermoModelFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }

    /// Returns true if the error comes from how the nozzle was configured.
    ///
    /// This covers the model choice and invalid solver tolerances, none of
    /// which depend on the throat or ambient conditions.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedModel { .. }
                | Self::UnknownModelKey { .. }
                | Self::Bisection(bisection::Error::InvalidConfig(_))
                | Self::Secant(secant::Error::InvalidConfig(_))
        )
    }

    /// Returns true if a root search failed to produce a converged solution.
    ///
    /// Solver configuration errors and failed model evaluations are excluded.
    #[must_use]
    pub fn is_convergence(&self) -> bool {
        matches!(
            self,
            Self::Bisection(
                bisection::Error::InvalidBracket(_) | bisection::Error::NoSuccessfulEvaluation
            ) | Self::Secant(
                secant::Error::FlatResidual { .. } | secant::Error::NonFinite { .. }
            ) | Self::MaxIters { .. }
        )
    }
}
