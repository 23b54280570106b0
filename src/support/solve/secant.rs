//! Derivative-free secant root finding for scalar equation problems.
//!
//! The solver works on the same [`Model`] + [`EquationProblem`] pair as
//! [`twine_solvers::equation::bisection`], so a problem can switch between
//! bracketed and open solving without changes.
//!
//! The method starts from a single seed `x0` and a second point perturbed
//! from it, then iterates `x₂ = x₁ − f₁·(x₁ − x₀)/(f₁ − f₀)`.
//! Convergence is not guaranteed. A flat secant or a non-finite iterate is
//! reported as an [`Error`]; running out of iterations returns a
//! [`Solution`] with [`Status::MaxIters`].

use std::error::Error as StdError;

use thiserror::Error;
use twine_core::{EquationProblem, Model, Snapshot};
use twine_solvers::equation::{EvalError, Evaluation, evaluate};

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of secant updates.
    pub max_iters: usize,

    /// Absolute tolerance on the step size.
    pub x_abs_tol: f64,

    /// Relative tolerance on the step size.
    pub x_rel_tol: f64,

    /// Residual magnitude accepted as converged regardless of step size.
    pub residual_tol: f64,

    /// Relative (and absolute) perturbation used to place the second point.
    pub perturbation: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            x_abs_tol: 1.48e-8,
            x_rel_tol: 0.0,
            residual_tol: 0.0,
            perturbation: 1e-4,
        }
    }
}

/// Errors from an invalid [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,
    #[error("tolerances must be finite and non-negative")]
    Tolerance,
    #[error("perturbation must be finite and positive, got {0}")]
    Perturbation(f64),
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        let tolerances = [self.x_abs_tol, self.x_rel_tol, self.residual_tol];
        if tolerances.iter().any(|tol| !tol.is_finite() || *tol < 0.0) {
            return Err(ConfigError::Tolerance);
        }

        if !(self.perturbation.is_finite() && self.perturbation > 0.0) {
            return Err(ConfigError::Perturbation(self.perturbation));
        }

        Ok(())
    }
}

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Two successive residuals were equal, so the secant has no root.
    #[error("flat secant at x={x}: residual={residual}")]
    FlatResidual { x: f64, residual: f64 },

    /// An iterate or seed was infinite or NaN.
    #[error("non-finite iterate: x={x}")]
    NonFinite { x: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

/// Termination status of a secant solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    MaxIters,
}

/// Result of a secant solve.
///
/// Holds the most recent evaluation, which is the converged point when
/// `status` is [`Status::Converged`].
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    fn from_eval(eval: Evaluation<I, O, 1>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
        }
    }
}

/// Finds a root of a scalar equation problem starting from `x0`.
///
/// # Errors
///
/// Returns an [`Error`] if the config is invalid, the seed or an iterate is
/// not finite, the secant becomes flat, or a model/problem evaluation fails.
pub fn solve<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Error: StdError + Send + Sync + 'static,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    config.validate()?;

    if !x0.is_finite() {
        return Err(Error::NonFinite { x: x0 });
    }

    let mut prev = evaluate(model, problem, [x0])?;
    if prev.residuals[0].abs() <= config.residual_tol {
        return Ok(Solution::from_eval(prev, Status::Converged, 0));
    }

    let x1 = {
        let eps = config.perturbation;
        let x = x0 * (1.0 + eps);
        if x >= 0.0 { x + eps } else { x - eps }
    };
    let mut curr = evaluate(model, problem, [x1])?;

    for iter in 1..=config.max_iters {
        let (x_prev, f_prev) = (prev.x[0], prev.residuals[0]);
        let (x_curr, f_curr) = (curr.x[0], curr.residuals[0]);

        if f_curr.abs() <= config.residual_tol {
            return Ok(Solution::from_eval(curr, Status::Converged, iter - 1));
        }

        let df = f_curr - f_prev;
        if df == 0.0 {
            return Err(Error::FlatResidual {
                x: x_curr,
                residual: f_curr,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / df;
        if !x_next.is_finite() {
            return Err(Error::NonFinite { x: x_next });
        }

        let next = evaluate(model, problem, [x_next])?;
        prev = curr;
        curr = next;

        let step = (x_next - x_curr).abs();
        if step <= config.x_abs_tol + config.x_rel_tol * x_next.abs() {
            return Ok(Solution::from_eval(curr, Status::Converged, iter));
        }
    }

    Ok(Solution::from_eval(
        curr,
        Status::MaxIters,
        config.max_iters,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Evaluates `f(x)` for a plain closure.
    struct Function<F>(F);

    #[derive(Debug, Error)]
    #[error("outside the domain: x={0}")]
    struct DomainError(f64);

    impl<F: Fn(f64) -> Result<f64, DomainError>> Model for Function<F> {
        type Input = f64;
        type Output = f64;
        type Error = DomainError;

        fn call(&self, input: &f64) -> Result<f64, DomainError> {
            (self.0)(*input)
        }
    }

    struct Root;

    impl EquationProblem<1> for Root {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
            Ok([*output])
        }
    }

    #[test]
    fn finds_square_root() {
        let model = Function(|x: f64| Ok(x * x - 4.0));

        let solution = solve(&model, &Root, 3.0, &Config::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(solution.snapshot.output, 0.0, epsilon = 1e-9);
        assert!(solution.iters < 15);
    }

    #[test]
    fn seed_on_root_returns_immediately() {
        let model = Function(|x: f64| Ok(x - 1.0));

        let solution = solve(&model, &Root, 1.0, &Config::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn reports_iteration_budget_exhaustion() {
        let model = Function(|x: f64| Ok(x.powi(3) - 2.0 * x + 2.0));
        let config = Config {
            max_iters: 2,
            ..Config::default()
        };

        let solution = solve(&model, &Root, 0.5, &config).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 2);
    }

    #[test]
    fn flat_residual_is_an_error() {
        let model = Function(|_x: f64| Ok(1.0));

        let err = solve(&model, &Root, 1.0, &Config::default()).unwrap_err();

        assert!(matches!(err, Error::FlatResidual { .. }));
    }

    #[test]
    fn model_errors_propagate() {
        let model = Function(|x: f64| {
            if x > 0.0 {
                Ok(x.ln())
            } else {
                Err(DomainError(x))
            }
        });

        // The first secant step from x≈10 jumps below zero.
        let err = solve(&model, &Root, 10.0, &Config::default()).unwrap_err();

        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn rejects_invalid_config() {
        let model = Function(|x: f64| Ok(x));
        let config = Config {
            perturbation: 0.0,
            ..Config::default()
        };

        let err = solve(&model, &Root, 1.0, &config).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidConfig(ConfigError::Perturbation(_))
        ));
        assert!(matches!(
            solve(&model, &Root, f64::NAN, &Config::default()),
            Err(Error::NonFinite { .. })
        ));
    }
}
