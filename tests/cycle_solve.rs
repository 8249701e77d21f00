//! 실제 IF97 조회로 사이클 전체를 푸는 시나리오 테스트.
use approx::assert_relative_eq;
use rankine_cycle_simulator::cycle::{
    review, solve, Advisory, CycleInputs, DegenerateCycle, InputRanges, SolveError, StateLabel,
};
use rankine_cycle_simulator::fluid::{FluidId, If97Lookup, PropertyError};

fn water(p_b_mpa: f64, t_b_c: f64, p_c_kpa: f64) -> CycleInputs {
    CycleInputs::water(p_b_mpa * 1.0e6, t_b_c + 273.15, p_c_kpa * 1.0e3)
}

#[test]
fn default_operating_point_is_about_forty_percent() {
    let result = solve(&water(8.0, 500.0, 10.0), &If97Lookup::new()).expect("solve");

    let eta = result.thermal_efficiency_percent;
    assert!((30.0..=45.0).contains(&eta), "efficiency {eta}");
    assert!((38.0..=42.0).contains(&eta), "efficiency {eta}");

    let s1 = result.state(StateLabel::TurbineInlet);
    let s2 = result.state(StateLabel::TurbineExit);
    let s3 = result.state(StateLabel::PumpInlet);
    let s4 = result.state(StateLabel::PumpExit);
    assert_eq!(s2.entropy, s1.entropy);
    assert_eq!(s4.entropy, s3.entropy);
    assert_eq!(s1.pressure, 8.0e6);
    assert_eq!(s3.pressure, 10.0e3);
    assert!(s2.enthalpy < s1.enthalpy);
    assert!(s4.enthalpy > s3.enthalpy);
    // 10 kPa 포화 온도 부근
    assert_relative_eq!(s3.temperature, 318.96, epsilon = 0.05);
    assert_relative_eq!(s2.temperature, s3.temperature, epsilon = 0.05);

    assert_relative_eq!(result.turbine_work, s1.enthalpy - s2.enthalpy);
    assert_relative_eq!(result.pump_work, s4.enthalpy - s3.enthalpy);
    assert_relative_eq!(result.heat_input, s1.enthalpy - s4.enthalpy);
    assert!(result.pump_work > 0.0);
    assert!(result.carnot_efficiency_percent() > eta);
}

#[test]
fn matches_textbook_low_pressure_cycle() {
    // 3 MPa / 350 °C / 75 kPa: h1 ≈ 3116 kJ/kg, h3 ≈ 384.4 kJ/kg, η ≈ 26 %
    let result = solve(&water(3.0, 350.0, 75.0), &If97Lookup::new()).expect("solve");
    assert_relative_eq!(result.states[0].enthalpy, 3_116.1e3, epsilon = 1.5e3);
    assert_relative_eq!(result.states[2].enthalpy, 384.44e3, epsilon = 0.5e3);
    assert_relative_eq!(result.pump_work, 3.03e3, epsilon = 0.05e3);
    assert_relative_eq!(result.thermal_efficiency_percent, 26.0, epsilon = 0.5);
}

#[test]
fn repeated_solves_are_identical() {
    let inputs = water(12.5, 560.0, 7.0);
    let lookup = If97Lookup::new();
    let first = solve(&inputs, &lookup).expect("first");
    let second = solve(&inputs, &lookup).expect("second");
    assert_eq!(first, second);
}

#[test]
fn efficiency_rises_with_boiler_pressure() {
    let lookup = If97Lookup::new();
    let effs: Vec<f64> = (1..=8)
        .map(|i| {
            solve(&water(2.0 * i as f64, 500.0, 10.0), &lookup)
                .expect("solve")
                .thermal_efficiency_percent
        })
        .collect();
    assert!(
        effs.windows(2).all(|w| w[1] > w[0]),
        "not monotonic: {effs:?}"
    );
}

#[test]
fn efficiency_rises_with_temperature_and_lower_condenser_pressure() {
    let lookup = If97Lookup::new();
    let eta = |p_b, t_b, p_c| {
        solve(&water(p_b, t_b, p_c), &lookup)
            .expect("solve")
            .thermal_efficiency_percent
    };
    assert!(eta(8.0, 600.0, 10.0) > eta(8.0, 500.0, 10.0));
    assert!(eta(8.0, 500.0, 5.0) > eta(8.0, 500.0, 10.0));
    assert!(eta(8.0, 500.0, 50.0) < eta(8.0, 500.0, 10.0));
}

#[test]
fn equal_pressures_are_rejected() {
    let err = solve(&water(0.01, 500.0, 10.0), &If97Lookup::new()).unwrap_err();
    assert!(matches!(
        err,
        SolveError::DegenerateCycle(DegenerateCycle::NoPressureDrop { .. })
    ));

    let err = solve(&water(0.005, 500.0, 10.0), &If97Lookup::new()).unwrap_err();
    assert!(matches!(
        err,
        SolveError::DegenerateCycle(DegenerateCycle::NoPressureDrop { .. })
    ));
}

#[test]
fn subcooled_boiler_state_does_not_crash() {
    let inputs = water(8.0, 200.0, 10.0);
    let lookup = If97Lookup::new();
    match solve(&inputs, &lookup) {
        Ok(result) => assert!(result.thermal_efficiency_percent.is_finite()),
        Err(err) => assert!(matches!(
            err,
            SolveError::PropertyQuery { .. } | SolveError::DegenerateCycle(_)
        )),
    }
    let advisories = review(&inputs, &InputRanges::default(), &lookup);
    assert!(advisories
        .iter()
        .any(|a| matches!(a, Advisory::NotSuperheated { .. })));
}

#[test]
fn condenser_below_triple_point_reports_failed_query() {
    let err = solve(&water(8.0, 500.0, 0.001), &If97Lookup::new()).unwrap_err();
    match &err {
        SolveError::PropertyQuery { state, query, .. } => {
            assert!(matches!(
                state,
                StateLabel::TurbineExit | StateLabel::PumpInlet
            ));
            assert_relative_eq!(query.first.value, 1.0, epsilon = 1e-9);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.failed_query().is_some());
}

#[test]
fn unknown_fluid_fails_on_first_query() {
    let inputs = CycleInputs {
        fluid: FluidId::new("R134a"),
        ..water(8.0, 500.0, 10.0)
    };
    let err = solve(&inputs, &If97Lookup::new()).unwrap_err();
    match err {
        SolveError::PropertyQuery { state, source, .. } => {
            assert_eq!(state, StateLabel::TurbineInlet);
            assert_eq!(source, PropertyError::UnsupportedFluid("R134a".into()));
        }
        other => panic!("unexpected error {other:?}"),
    }
}
