//! Equation solvers that complement [`twine_solvers`].
//!
//! [`twine_solvers::equation::bisection`] covers bracketed root finding.
//! This module adds [`secant`], an open method for problems where no reliable
//! bracket is known up front.

pub mod secant;
