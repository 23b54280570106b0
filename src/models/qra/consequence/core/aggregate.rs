//! Per-position probits and the reduction to per-leak-size totals.

use tracing::{debug, info};
use uom::si::f64::{HeatFluxDensity, Pressure};

use crate::support::units::PressureImpulse;

use super::{
    ConsequenceDecisions, ConsequenceError, ConsequenceType, FatalityProbit, PhysicalResponses,
};

/// Computes summed fatality probabilities for each leak size of an event.
///
/// With no consequence type the event has no harm model, so the result is
/// `num_leak_sizes` zeros and the probit is never called.
/// Otherwise each position's probability comes from `probit` and the
/// positions of each leak size are summed, giving the expected number of
/// fatalities for that leak size.
///
/// # Errors
///
/// Returns [`ConsequenceError`] if a required response array is missing or
/// has the wrong length, or if the probit fails.
pub fn calculate_event_consequence<P: FatalityProbit>(
    consequence_type: Option<ConsequenceType>,
    num_leak_sizes: usize,
    total_occupants: usize,
    responses: &PhysicalResponses,
    decisions: &ConsequenceDecisions,
    probit: &P,
) -> Result<Vec<f64>, ConsequenceError> {
    let Some(consequence_type) = consequence_type else {
        return Ok(vec![0.0; num_leak_sizes]);
    };

    info!("calculating {consequence_type} fatality probabilities");

    let expected = table_len(num_leak_sizes, total_occupants)?;
    let positions = response_len(consequence_type, responses)?;
    if positions != expected {
        return Err(ConsequenceError::DimensionMismatch {
            context: "physical responses",
            expected,
            actual: positions,
        });
    }

    let probabilities = per_position_probability(consequence_type, responses, decisions, probit)?;
    let per_leak_size = reduce_to_per_leak_size(&probabilities, num_leak_sizes, total_occupants)?;

    debug!(
        consequence = %consequence_type,
        per_leak_size = ?per_leak_size,
        "probit results by leak size"
    );
    Ok(per_leak_size)
}

/// Evaluates the probit for every position, in array order.
///
/// # Errors
///
/// Returns [`ConsequenceError::MissingResponse`] if a needed array is absent,
/// [`ConsequenceError::DimensionMismatch`] if overpressures and impulses
/// differ in length, and [`ConsequenceError::Probit`] if the probit fails.
pub fn per_position_probability<P: FatalityProbit>(
    consequence_type: ConsequenceType,
    responses: &PhysicalResponses,
    decisions: &ConsequenceDecisions,
    probit: &P,
) -> Result<Vec<f64>, ConsequenceError> {
    let probit_failed = |name: &str, position: usize, err: P::Error| ConsequenceError::Probit {
        consequence_type,
        probit: name.to_string(),
        position,
        source: Box::new(err),
    };

    match consequence_type {
        ConsequenceType::Thermal => {
            let name = decisions.thermal_probit.as_str();
            heat_fluxes(responses)?
                .iter()
                .enumerate()
                .map(|(position, &heat_flux)| {
                    probit
                        .thermal(name, heat_flux, decisions.exposure_time)
                        .map(|p| p.into_inner())
                        .map_err(|err| probit_failed(name, position, err))
                })
                .collect()
        }
        ConsequenceType::Overpressure => {
            let name = decisions.overpressure_probit.as_str();
            let (overpressures, impulses) = blast_loads(responses)?;
            overpressures
                .iter()
                .zip(impulses)
                .enumerate()
                .map(|(position, (&overpressure, &impulse))| {
                    probit
                        .overpressure(name, overpressure, impulse)
                        .map(|p| p.into_inner())
                        .map_err(|err| probit_failed(name, position, err))
                })
                .collect()
        }
    }
}

/// Sums a row-major `num_leak_sizes × total_occupants` table over positions.
///
/// # Errors
///
/// Returns [`ConsequenceError::DimensionMismatch`] unless `values` holds
/// exactly `num_leak_sizes × total_occupants` entries, and
/// [`ConsequenceError::TableOverflow`] if that product overflows `usize`.
pub fn reduce_to_per_leak_size(
    values: &[f64],
    num_leak_sizes: usize,
    total_occupants: usize,
) -> Result<Vec<f64>, ConsequenceError> {
    let expected = table_len(num_leak_sizes, total_occupants)?;
    if values.len() != expected {
        return Err(ConsequenceError::DimensionMismatch {
            context: "per-leak-size reduction",
            expected,
            actual: values.len(),
        });
    }

    if total_occupants == 0 {
        return Ok(vec![0.0; num_leak_sizes]);
    }

    Ok(values
        .chunks_exact(total_occupants)
        .map(|row| row.iter().sum())
        .collect())
}

/// Number of positions in a `num_leak_sizes × total_occupants` table.
fn table_len(num_leak_sizes: usize, total_occupants: usize) -> Result<usize, ConsequenceError> {
    num_leak_sizes
        .checked_mul(total_occupants)
        .ok_or(ConsequenceError::TableOverflow {
            num_leak_sizes,
            total_occupants,
        })
}

fn heat_fluxes(responses: &PhysicalResponses) -> Result<&[HeatFluxDensity], ConsequenceError> {
    responses.heat_fluxes.as_deref().ok_or(ConsequenceError::MissingResponse(
        "heat fluxes",
        ConsequenceType::Thermal,
    ))
}

fn blast_loads(
    responses: &PhysicalResponses,
) -> Result<(&[Pressure], &[PressureImpulse]), ConsequenceError> {
    let missing = |name| ConsequenceError::MissingResponse(name, ConsequenceType::Overpressure);
    let overpressures = responses
        .overpressures
        .as_deref()
        .ok_or_else(|| missing("overpressures"))?;
    let impulses = responses
        .impulses
        .as_deref()
        .ok_or_else(|| missing("impulses"))?;

    if overpressures.len() != impulses.len() {
        return Err(ConsequenceError::DimensionMismatch {
            context: "impulses",
            expected: overpressures.len(),
            actual: impulses.len(),
        });
    }

    Ok((overpressures, impulses))
}

/// Number of positions in the arrays `consequence_type` reads.
fn response_len(
    consequence_type: ConsequenceType,
    responses: &PhysicalResponses,
) -> Result<usize, ConsequenceError> {
    match consequence_type {
        ConsequenceType::Thermal => heat_fluxes(responses).map(<[_]>::len),
        ConsequenceType::Overpressure => blast_loads(responses).map(|(p, _)| p.len()),
    }
}
