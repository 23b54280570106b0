//! Notional nozzle solution for each published model.

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{orifice::Orifice, solve::secant, units::SpecificEnthalpy};

use super::{
    JetState, Known, NotionalNozzleConfig, NotionalNozzleError, NozzleExit, NozzleModel,
    energy::{EnergyBalanceModel, EnergyBalanceProblem, ExitVelocity},
    traits::NotionalNozzleThermoModel,
};

/// Solves a notional nozzle for the given model.
///
/// # Errors
///
/// Returns [`NotionalNozzleError`] on invalid boundary conditions, solver
/// failures, thermodynamic model failures, or a non-physical exit state.
pub(super) fn solve<Fluid, Thermo>(
    known: &Known<Fluid>,
    model: NozzleModel,
    config: &NotionalNozzleConfig,
    thermo: &Thermo,
) -> Result<NozzleExit<Fluid>, NotionalNozzleError>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    known.validate()?;
    debug!(model = %model, "solving notional nozzle");

    let jet = match model {
        NozzleModel::YuceilOtugen => {
            let velocity = momentum_velocity(known);
            conserve_energy_bracketed(known, velocity, config, thermo)?
        }
        NozzleModel::Birch2 { temperature } => {
            let velocity = momentum_velocity(known);
            at_temperature(known, temperature, ExitVelocity::Fixed(velocity), thermo)?
        }
        NozzleModel::EwanMoodie => {
            at_temperature(known, known.throat.temperature(), ExitVelocity::Sonic, thermo)?
        }
        NozzleModel::Birch { temperature } => {
            at_temperature(known, temperature, ExitVelocity::Sonic, thermo)?
        }
        NozzleModel::Molkov => conserve_energy_open(known, config, thermo)?,
    };

    check_physical(&jet)?;

    let m_dot = known.throat.mass_flow(&known.orifice);
    let orifice = Orifice::conserving_mass_flow(m_dot, jet.density(), jet.velocity).map_err(
        |err| NotionalNozzleError::NonPhysicalExit {
            context: format!("exit orifice: {err}"),
        },
    )?;

    Ok(NozzleExit {
        jet,
        orifice,
        model,
    })
}

/// Exit velocity from a momentum balance between throat and exit planes.
///
/// `v = v_t + (P_t − P_a) / (v_t·ρ_t·Cd)`
fn momentum_velocity<Fluid>(known: &Known<Fluid>) -> Velocity {
    let throat = &known.throat;
    let v_t = throat.velocity.get::<meter_per_second>();
    let rho_t = throat.density().get::<kilogram_per_cubic_meter>();
    let dp = (throat.pressure - known.ambient.pressure).get::<pascal>();
    let cd = known.orifice.discharge_coefficient();

    Velocity::new::<meter_per_second>(v_t + dp / (v_t * rho_t * cd))
}

/// Exit jet at ambient pressure and a known temperature.
fn at_temperature<Fluid, Thermo>(
    known: &Known<Fluid>,
    temperature: ThermodynamicTemperature,
    velocity: ExitVelocity,
    thermo: &Thermo,
) -> Result<JetState<Fluid>, NotionalNozzleError>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    let pressure = known.ambient.pressure;
    let state = thermo
        .state_from((known.throat.state.fluid.clone(), temperature, pressure))
        .map_err(|err| NotionalNozzleError::thermo_failed("exit state from (T, P)", err))?;
    let velocity = velocity.resolve(thermo, &state)?;

    Ok(JetState::new(state, pressure, velocity))
}

/// Density of the fluid at ambient temperature and pressure, in kg/m³.
fn ambient_density<Fluid, Thermo>(
    known: &Known<Fluid>,
    thermo: &Thermo,
) -> Result<f64, NotionalNozzleError>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    let state = thermo
        .state_from((
            known.throat.state.fluid.clone(),
            known.ambient.temperature,
            known.ambient.pressure,
        ))
        .map_err(|err| NotionalNozzleError::thermo_failed("ambient density", err))?;

    Ok(state.density.get::<kilogram_per_cubic_meter>())
}

/// Solves the energy balance at a fixed velocity by bisection on density.
///
/// The exit density lies between the throat density and the density of the
/// fluid at ambient conditions.
fn conserve_energy_bracketed<Fluid, Thermo>(
    known: &Known<Fluid>,
    velocity: Velocity,
    config: &NotionalNozzleConfig,
    thermo: &Thermo,
) -> Result<JetState<Fluid>, NotionalNozzleError>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    let model = EnergyBalanceModel::new(
        thermo,
        &known.throat.state.fluid,
        known.ambient.pressure,
        ExitVelocity::Fixed(velocity),
    );
    let problem = EnergyBalanceProblem::new(thermo, &known.throat);

    let bracket = [
        known.throat.density().get::<kilogram_per_cubic_meter>(),
        ambient_density(known, thermo)?,
    ];

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(NotionalNozzleError::MaxIters {
            residual: SpecificEnthalpy::new::<joule_per_kilogram>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(iters = solution.iters, "energy balance converged by bisection");
    Ok(solution.snapshot.output)
}

/// Solves the energy balance for a sonic exit by secant iteration on density.
///
/// The iteration starts from the density of the fluid at ambient conditions.
fn conserve_energy_open<Fluid, Thermo>(
    known: &Known<Fluid>,
    config: &NotionalNozzleConfig,
    thermo: &Thermo,
) -> Result<JetState<Fluid>, NotionalNozzleError>
where
    Fluid: Clone,
    Thermo: NotionalNozzleThermoModel<Fluid>,
{
    let model = EnergyBalanceModel::new(
        thermo,
        &known.throat.state.fluid,
        known.ambient.pressure,
        ExitVelocity::Sonic,
    );
    let problem = EnergyBalanceProblem::new(thermo, &known.throat);

    let seed = ambient_density(known, thermo)?;
    let solution = secant::solve(&model, &problem, seed, &config.secant)?;

    if solution.status != secant::Status::Converged {
        return Err(NotionalNozzleError::MaxIters {
            residual: SpecificEnthalpy::new::<joule_per_kilogram>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(iters = solution.iters, "energy balance converged by secant");
    Ok(solution.snapshot.output)
}

fn check_physical<Fluid>(jet: &JetState<Fluid>) -> Result<(), NotionalNozzleError> {
    let checks = [
        ("density", jet.density().get::<kilogram_per_cubic_meter>()),
        ("velocity", jet.velocity.get::<meter_per_second>()),
        ("temperature", jet.temperature().get::<kelvin>()),
    ];

    match checks
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value > 0.0))
    {
        Some((name, value)) => Err(NotionalNozzleError::NonPhysicalExit {
            context: format!("exit {name} must be finite and positive, got {value}"),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassDensity, Pressure},
        mass_rate::kilogram_per_second,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    use crate::support::thermo::capability::{HasCp, HasSoundSpeed, StateFrom};
    use crate::support::thermo::fluid::Hydrogen;

    use super::super::{
        TemperatureMode, energy_residual,
        test_support::{choked_hydrogen, hydrogen},
    };

    fn all_models(stagnation: ThermodynamicTemperature) -> [NozzleModel; 5] {
        [
            NozzleModel::YuceilOtugen,
            NozzleModel::Birch2 {
                temperature: stagnation,
            },
            NozzleModel::EwanMoodie,
            NozzleModel::Birch {
                temperature: stagnation,
            },
            NozzleModel::Molkov,
        ]
    }

    #[test]
    fn every_model_exits_at_ambient_and_conserves_mass() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 0.85);
        let throat_flow = known
            .throat
            .mass_flow(&known.orifice)
            .get::<kilogram_per_second>();

        for model in all_models(known.ambient.temperature) {
            let exit = solve(&known, model, &NotionalNozzleConfig::default(), &thermo)
                .unwrap_or_else(|err| panic!("{model} failed: {err}"));

            assert_eq!(exit.model, model);
            assert_eq!(exit.jet.pressure, known.ambient.pressure);
            assert_relative_eq!(exit.orifice.discharge_coefficient(), 1.0);
            assert_relative_eq!(
                exit.jet.mass_flow(&exit.orifice).get::<kilogram_per_second>(),
                throat_flow,
                max_relative = 1e-12
            );
            assert!(exit.diameter() > known.orifice.diameter() * 0.85_f64.sqrt());
        }
    }

    #[test]
    fn momentum_models_accelerate_the_jet() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 0.8);

        let throat = &known.throat;
        let expected = throat.velocity.get::<meter_per_second>()
            + (throat.pressure - known.ambient.pressure).get::<pascal>()
                / (throat.velocity.get::<meter_per_second>()
                    * throat.density().get::<kilogram_per_cubic_meter>()
                    * 0.8);

        for model in [
            NozzleModel::YuceilOtugen,
            NozzleModel::Birch2 {
                temperature: known.ambient.temperature,
            },
        ] {
            let exit = solve(&known, model, &NotionalNozzleConfig::default(), &thermo).unwrap();
            assert_relative_eq!(
                exit.jet.velocity.get::<meter_per_second>(),
                expected,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn yuceil_otugen_conserves_total_enthalpy() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 1.0);

        let exit = solve(
            &known,
            NozzleModel::YuceilOtugen,
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap();

        let residual = energy_residual(&thermo, &known.throat, &exit.jet).unwrap();
        assert!(residual.get::<joule_per_kilogram>().abs() < 1e-3);

        // With constant cp, the temperature drop pays for the acceleration.
        let cp = thermo
            .cp(&known.throat.state)
            .unwrap()
            .get::<joule_per_kilogram_kelvin>();
        let v_t = known.throat.velocity.get::<meter_per_second>();
        let v_e = exit.jet.velocity.get::<meter_per_second>();
        let expected = known.throat.temperature().get::<kelvin>() + (v_t * v_t - v_e * v_e) / (2.0 * cp);

        assert_relative_eq!(exit.temperature().get::<kelvin>(), expected, max_relative = 1e-9);
        assert!(exit.temperature() < known.throat.temperature());
    }

    #[test]
    fn molkov_reaches_sonic_exit_with_conserved_enthalpy() {
        let thermo = hydrogen();
        let mut known = choked_hydrogen(20.0, 1.0);
        // A subsonic throat makes the exit temperature differ from the throat.
        known.throat.velocity = known.throat.velocity * 0.9;

        let exit = solve(
            &known,
            NozzleModel::Molkov,
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap();

        let cp = thermo
            .cp(&known.throat.state)
            .unwrap()
            .get::<joule_per_kilogram_kelvin>();
        let gamma = thermo.gamma();
        let r = cp * (1.0 - 1.0 / gamma);
        let v_t = known.throat.velocity.get::<meter_per_second>();
        let t_t = known.throat.temperature().get::<kelvin>();

        // cp·T_e + γ·R·T_e/2 = cp·T_t + v_t²/2
        let expected = (cp * t_t + 0.5 * v_t * v_t) / (cp + 0.5 * gamma * r);
        assert_relative_eq!(exit.temperature().get::<kelvin>(), expected, max_relative = 1e-6);

        let a = thermo.sound_speed(&exit.jet.state).unwrap();
        assert_relative_eq!(
            exit.jet.velocity.get::<meter_per_second>(),
            a.get::<meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn ewan_moodie_keeps_throat_temperature() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 0.9);

        let exit = solve(
            &known,
            NozzleModel::EwanMoodie,
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap();

        assert_relative_eq!(
            exit.temperature().get::<kelvin>(),
            known.throat.temperature().get::<kelvin>()
        );

        // Sonic throat and exit at the same temperature: d_e = d_t·√(Cd·P_t/P_a).
        let pressure_ratio = (known.throat.pressure / known.ambient.pressure).get::<ratio>();
        assert_relative_eq!(
            (exit.diameter() / known.orifice.diameter()).get::<ratio>(),
            (0.9 * pressure_ratio).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn fixed_temperature_models_use_the_given_temperature() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 1.0);
        let stagnation = known.ambient.temperature;

        let expected_density = thermo
            .state_from((Hydrogen, stagnation, known.ambient.pressure))
            .unwrap()
            .density;

        let birch = solve(
            &known,
            NozzleModel::Birch {
                temperature: stagnation,
            },
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap();
        assert_eq!(birch.temperature(), stagnation);
        assert_eq!(birch.jet.density(), expected_density);
        assert_relative_eq!(
            birch.jet.velocity.get::<meter_per_second>(),
            thermo
                .sound_speed(&birch.jet.state)
                .unwrap()
                .get::<meter_per_second>()
        );

        let birch2 = solve(
            &known,
            NozzleModel::Birch2 {
                temperature: stagnation,
            },
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap();
        assert_eq!(birch2.temperature(), stagnation);
        assert_eq!(birch2.jet.density(), expected_density);
        assert!(birch2.jet.velocity > birch.jet.velocity);
    }

    #[test]
    fn rejects_over_expanded_throat() {
        let thermo = hydrogen();
        let mut known = choked_hydrogen(10.0, 1.0);
        known.throat.pressure = Pressure::new::<pascal>(90_000.0);

        let err = solve(
            &known,
            NozzleModel::Molkov,
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap_err();

        assert!(matches!(err, NotionalNozzleError::InvalidBoundary { .. }));
        assert!(!err.is_configuration());
    }

    #[test]
    fn rejects_stagnant_throat() {
        let thermo = hydrogen();
        let mut known = choked_hydrogen(10.0, 1.0);
        known.throat.velocity = Velocity::new::<meter_per_second>(0.0);

        let err = solve(
            &known,
            NozzleModel::YuceilOtugen,
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap_err();

        assert!(matches!(err, NotionalNozzleError::InvalidBoundary { .. }));
    }

    #[test]
    fn exhausted_iterations_are_convergence_errors() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 1.0);

        let mut config = NotionalNozzleConfig::default();
        config.bisection.max_iters = 2;
        config.secant.max_iters = 1;

        for model in [NozzleModel::YuceilOtugen, NozzleModel::Molkov] {
            let err = solve(&known, model, &config, &thermo).unwrap_err();
            assert!(
                matches!(err, NotionalNozzleError::MaxIters { .. }),
                "{model}: {err:?}"
            );
            assert!(err.is_convergence());
        }
    }

    #[test]
    fn invalid_solver_tolerances_are_configuration_errors() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 1.0);

        let mut config = NotionalNozzleConfig::default();
        config.secant.max_iters = 0;
        let err = solve(&known, NozzleModel::Molkov, &config, &thermo).unwrap_err();
        assert!(
            matches!(
                err,
                NotionalNozzleError::Secant(secant::Error::InvalidConfig(
                    secant::ConfigError::MaxIters
                ))
            ),
            "{err:?}"
        );
        assert!(err.is_configuration());
        assert!(!err.is_convergence());

        let mut config = NotionalNozzleConfig::default();
        config.bisection.density_tol = MassDensity::new::<kilogram_per_cubic_meter>(-1.0);
        let err = solve(&known, NozzleModel::YuceilOtugen, &config, &thermo).unwrap_err();
        assert!(
            matches!(
                err,
                NotionalNozzleError::Bisection(bisection::Error::InvalidConfig(_))
            ),
            "{err:?}"
        );
        assert!(err.is_configuration());
        assert!(!err.is_convergence());
    }

    /// A throat already at ambient temperature and pressure.
    fn throat_at_ambient() -> Known<Hydrogen> {
        let thermo = hydrogen();
        let mut known = choked_hydrogen(10.0, 1.0);
        let state = thermo
            .state_from((Hydrogen, known.ambient.temperature, known.ambient.pressure))
            .unwrap();
        known.throat = JetState::new(
            state,
            known.ambient.pressure,
            Velocity::new::<meter_per_second>(100.0),
        );
        known
    }

    #[test]
    fn throat_at_ambient_pressure_leaves_fixed_temperature_jet_unchanged() {
        let thermo = hydrogen();
        let known = throat_at_ambient();

        let exit = solve(
            &known,
            NozzleModel::Birch2 {
                temperature: known.ambient.temperature,
            },
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap();

        assert_relative_eq!(exit.jet.velocity.get::<meter_per_second>(), 100.0);
        assert_relative_eq!(
            exit.jet.density().get::<kilogram_per_cubic_meter>(),
            known.throat.density().get::<kilogram_per_cubic_meter>()
        );
        assert_relative_eq!(
            (exit.diameter() / known.orifice.diameter()).get::<ratio>(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn throat_at_ambient_state_gives_zero_width_density_bracket() {
        let thermo = hydrogen();
        let known = throat_at_ambient();

        let err = solve(
            &known,
            NozzleModel::YuceilOtugen,
            &NotionalNozzleConfig::default(),
            &thermo,
        )
        .unwrap_err();

        assert!(
            matches!(
                err,
                NotionalNozzleError::Bisection(bisection::Error::InvalidBracket(_))
            ),
            "{err:?}"
        );
        assert!(err.is_convergence());
        assert!(!err.is_configuration());
    }

    #[test]
    fn model_choice_follows_flags() {
        let thermo = hydrogen();
        let known = choked_hydrogen(10.0, 1.0);

        let model = NozzleModel::from_flags(false, TemperatureMode::Throat).unwrap();
        let exit = solve(&known, model, &NotionalNozzleConfig::default(), &thermo).unwrap();

        assert_eq!(exit.model, NozzleModel::EwanMoodie);
    }
}
