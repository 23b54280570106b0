//! Event consequence model.
//!
//! [`EventConsequence`] is a [`twine_core::Model`] that computes, for one
//! event in a risk assessment, the summed fatality probability of each leak
//! size. Dose-response curves are supplied through [`FatalityProbit`].

mod core;

pub use self::core::{
    ConsequenceDecisions, ConsequenceError, ConsequenceType, FatalityProbit, PhysicalResponses,
    Probability, calculate_event_consequence, per_position_probability, reduce_to_per_leak_size,
};

use twine_core::Model;

/// Input to the [`EventConsequence`] model.
#[derive(Debug, Clone, PartialEq)]
pub struct EventConsequenceInput {
    /// Hazard to evaluate, or `None` for an event with no harm model.
    pub consequence_type: Option<ConsequenceType>,

    pub num_leak_sizes: usize,
    pub total_occupants: usize,

    /// Row-major (leak size × position) hazard arrays.
    pub responses: PhysicalResponses,
}

/// Consequence model bound to a probit backend and modeling decisions.
#[derive(Debug, Clone)]
pub struct EventConsequence<'a, P> {
    probit: &'a P,
    decisions: ConsequenceDecisions,
}

impl<'a, P: FatalityProbit> EventConsequence<'a, P> {
    #[must_use]
    pub fn new(probit: &'a P, decisions: ConsequenceDecisions) -> Self {
        Self { probit, decisions }
    }

    #[must_use]
    pub fn decisions(&self) -> &ConsequenceDecisions {
        &self.decisions
    }
}

impl<P: FatalityProbit> Model for EventConsequence<'_, P> {
    type Input = EventConsequenceInput;
    type Output = Vec<f64>;
    type Error = ConsequenceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        calculate_event_consequence(
            input.consequence_type,
            input.num_leak_sizes,
            input.total_occupants,
            &input.responses,
            &self.decisions,
            self.probit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatFluxDensity, Pressure, Time},
        heat_flux_density::kilowatt_per_square_meter,
        time::second,
    };

    use crate::support::{constraint::UnitInterval, units::PressureImpulse};

    /// Every exposed occupant is a fatality once the heat flux passes a threshold.
    struct Threshold;

    impl FatalityProbit for Threshold {
        type Error = Infallible;

        fn thermal(
            &self,
            _probit: &str,
            heat_flux: HeatFluxDensity,
            _exposure_time: Time,
        ) -> Result<Probability, Self::Error> {
            let lethal = heat_flux.get::<kilowatt_per_square_meter>() >= 25.0;
            Ok(if lethal {
                UnitInterval::one()
            } else {
                UnitInterval::zero()
            })
        }

        fn overpressure(
            &self,
            _probit: &str,
            _overpressure: Pressure,
            _impulse: PressureImpulse,
        ) -> Result<Probability, Self::Error> {
            Ok(UnitInterval::zero())
        }
    }

    fn decisions() -> ConsequenceDecisions {
        ConsequenceDecisions {
            thermal_probit: "threshold".to_string(),
            exposure_time: Time::new::<second>(30.0),
            overpressure_probit: "threshold".to_string(),
        }
    }

    #[test]
    fn model_counts_lethal_positions_per_leak_size() {
        let model = EventConsequence::new(&Threshold, decisions());

        let heat_fluxes = [1.0, 30.0, 50.0, 0.0, 0.0, 26.0]
            .map(HeatFluxDensity::new::<kilowatt_per_square_meter>)
            .to_vec();
        let input = EventConsequenceInput {
            consequence_type: Some(ConsequenceType::Thermal),
            num_leak_sizes: 2,
            total_occupants: 3,
            responses: PhysicalResponses::thermal(heat_fluxes),
        };

        let result = model.call(&input).unwrap();

        assert_eq!(result.len(), 2);
        assert_relative_eq!(result[0], 2.0);
        assert_relative_eq!(result[1], 1.0);
    }

    #[test]
    fn model_without_hazard_returns_zeros() {
        let model = EventConsequence::new(&Threshold, decisions());
        let input = EventConsequenceInput {
            consequence_type: None,
            num_leak_sizes: 5,
            total_occupants: 4,
            responses: PhysicalResponses::default(),
        };

        assert_eq!(model.call(&input).unwrap(), vec![0.0; 5]);
        assert_eq!(model.decisions().exposure_time, Time::new::<second>(30.0));
    }
}
