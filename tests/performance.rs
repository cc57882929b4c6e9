use approx::assert_relative_eq;
use hsu_performance::hsu::{
    compute, compute_loads, find_oil, EfficiencyCoefficients, HsuCalculator, HsuError,
    OperatingInputs, Quantity, MAX_CHARGE_PRESSURE_BAR, MAX_DISCHARGE_PRESSURE_BAR,
    MAX_PUMP_SPEED_RPM, MIN_LOADED_DIFFERENTIAL_BAR, MIN_PUMP_SPEED_RPM,
};

fn inputs(oil: &str, temp: f64, speed: f64, charge: f64, discharge: f64) -> OperatingInputs {
    OperatingInputs {
        oil: oil.into(),
        temperature_c: temp,
        pump_speed_rpm: speed,
        charge_pressure_bar: charge,
        discharge_pressure_bar: discharge,
    }
}

#[test]
fn iso_vg46_reference_point() {
    let r = compute(&inputs("ISO VG 46", 40.0, 1500.0, 20.0, 350.0)).expect("reference point");
    let tol = 1e-3;
    assert_relative_eq!(r.oil.dynamic_viscosity_cp, 39.4588, max_relative = tol);
    assert_relative_eq!(r.efficiencies.hsu.volumetric, 0.95649, max_relative = tol);
    assert_relative_eq!(r.efficiencies.pump.mechanical, 0.97579, max_relative = tol);
    assert_relative_eq!(r.efficiencies.motor.mechanical, 0.96207, max_relative = tol);
    assert_relative_eq!(r.motor_speed_rpm(), 1434.73, max_relative = tol);
    assert_relative_eq!(r.motor_torque_nm(), 2223.28, max_relative = tol);
    assert_relative_eq!(r.pump_torque_nm(), 2368.26, max_relative = tol);
    assert_relative_eq!(r.pump_power_kw(), 372.01, max_relative = tol);
    assert_relative_eq!(r.motor_power_kw(), 334.04, max_relative = tol);
    assert_relative_eq!(r.leakage.total, 1.20287e-4, max_relative = tol);
}

#[test]
fn hot_multigrade_at_default_point() {
    let r = compute(&OperatingInputs::default()).expect("default inputs");
    assert_eq!(r.inputs.oil, "SAE 15W40");
    assert_relative_eq!(r.efficiencies.pump.volumetric, 0.93456, max_relative = 1e-3);
    assert_relative_eq!(r.efficiencies.motor.mechanical, 0.93288, max_relative = 1e-3);
    assert_relative_eq!(r.pump_torque_nm(), 3212.03, max_relative = 1e-3);
    assert_relative_eq!(r.motor_torque_nm(), 2920.15, max_relative = 1e-3);
    assert_relative_eq!(r.pump_power_kw(), 681.14, max_relative = 1e-3);
    assert_relative_eq!(r.motor_power_kw(), 558.09, max_relative = 1e-3);
    assert_relative_eq!(r.motor_speed_rpm(), 1825.03, max_relative = 1e-3);
}

#[test]
fn interpolated_temperature_between_table_rows() {
    // 45 °C는 40/50 °C 행 사이를 보간한다.
    let r = compute(&inputs("ISO VG 46", 45.0, 1500.0, 20.0, 350.0)).unwrap();
    assert_relative_eq!(r.pump_torque_nm(), 2367.59, max_relative = 1e-3);
    assert_relative_eq!(r.motor_torque_nm(), 2221.72, max_relative = 1e-3);
    assert_relative_eq!(r.motor_speed_rpm(), 1426.95, max_relative = 1e-3);
}

#[test]
fn other_oils_compute() {
    let r = compute(&inputs("sae 5w30", 20.0, 1200.0, 20.0, 300.0)).unwrap();
    assert_relative_eq!(r.motor_speed_rpm(), 1169.40, max_relative = 1e-3);
    assert_relative_eq!(r.pump_power_kw(), 254.14, max_relative = 1e-3);

    let r = compute(&inputs("SAE 30", 80.0, 2500.0, 30.0, 500.0)).unwrap();
    assert_relative_eq!(r.motor_torque_nm(), 3148.83, max_relative = 1e-3);
    assert_relative_eq!(r.motor_power_kw(), 762.42, max_relative = 1e-3);
}

#[test]
fn zero_differential_pressure_has_no_torque() {
    let r = compute(&inputs("ISO VG 46", 40.0, 1500.0, 30.0, 30.0)).unwrap();
    assert_eq!(r.inputs.differential_pressure_bar(), 0.0);
    assert!(r.pump_torque_nm().abs() < 1e-9);
    assert!(r.motor_torque_nm().abs() < 1e-9);
    assert!(r.pump_power_kw().abs() < 1e-9);
    assert!(r.motor_power_kw().abs() < 1e-9);
    assert!(r.motor_speed_rpm() > 0.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let cases = [
        inputs("ISO VG 46", 40.0, 1500.0, 350.0, 20.0),
        inputs("ISO VG 46", 40.0, -1500.0, 20.0, 350.0),
        inputs("ISO VG 46", 40.0, 0.0, 20.0, 350.0),
        inputs("ISO VG 46", 120.0, 1500.0, 20.0, 350.0),
        inputs("ISO VG 46", -5.0, 1500.0, 20.0, 350.0),
        inputs("ISO VG 46", 40.0, 1500.0, -1.0, 350.0),
        inputs("ISO VG 46", 40.0, f64::INFINITY, 20.0, 350.0),
        inputs("Castor oil", 40.0, 1500.0, 20.0, 350.0),
    ];
    for case in cases {
        let err = compute(&case).expect_err("must be rejected");
        assert!(err.is_invalid_input(), "{case:?} -> {err}");
    }
}

#[test]
fn out_of_range_reports_bounds() {
    match compute(&inputs("ISO VG 46", 120.0, 1500.0, 20.0, 350.0)) {
        Err(HsuError::OutOfRange { value, min, max, .. }) => {
            assert_eq!(value, 120.0);
            assert_eq!((min, max), (0.0, 100.0));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

fn rejected_quantity(case: &OperatingInputs) -> (Quantity, f64, f64) {
    match compute(case) {
        Err(HsuError::OutOfRange { quantity, min, max, .. }) => (quantity, min, max),
        other => panic!("{case:?} -> {other:?}"),
    }
}

#[test]
fn speed_envelope_edges() {
    for speed in [MIN_PUMP_SPEED_RPM, MAX_PUMP_SPEED_RPM] {
        compute(&inputs("ISO VG 46", 40.0, speed, 20.0, 350.0)).expect("edge speed is valid");
    }
    for speed in [100.0, 499.9, 5000.1] {
        let case = inputs("ISO VG 46", 100.0, speed, 10.0, 600.0);
        assert_eq!(
            rejected_quantity(&case),
            (Quantity::Speed, MIN_PUMP_SPEED_RPM, MAX_PUMP_SPEED_RPM)
        );
        assert!(compute(&case).unwrap_err().is_invalid_input());
    }
}

#[test]
fn pressure_envelope_edges() {
    compute(&inputs("ISO VG 46", 40.0, 1500.0, MAX_CHARGE_PRESSURE_BAR, MAX_DISCHARGE_PRESSURE_BAR))
        .expect("edge pressures are valid");
    let (q, _, max) = rejected_quantity(&inputs("ISO VG 46", 40.0, 1500.0, 50.1, 350.0));
    assert_eq!((q, max), (Quantity::Pressure, MAX_CHARGE_PRESSURE_BAR));
    let (q, _, max) = rejected_quantity(&inputs("ISO VG 46", 40.0, 1500.0, 20.0, 1000.1));
    assert_eq!((q, max), (Quantity::Pressure, MAX_DISCHARGE_PRESSURE_BAR));
}

#[test]
fn light_load_below_minimum_differential_is_rejected() {
    for discharge in [20.5, 26.0, 49.99] {
        let case = inputs("ISO VG 46", 40.0, 1500.0, 20.0, discharge);
        let (q, min, _) = rejected_quantity(&case);
        assert_eq!((q, min), (Quantity::Pressure, MIN_LOADED_DIFFERENTIAL_BAR));
        assert!(!compute(&case).unwrap_err().is_model_error());
    }

    let r = compute(&inputs("ISO VG 46", 40.0, 1500.0, 20.0, 50.0)).expect("30 bar is loaded");
    assert_relative_eq!(r.efficiencies.pump.mechanical, 0.758, max_relative = 1e-2);
    assert_relative_eq!(r.efficiencies.motor.mechanical, 0.7163, max_relative = 1e-2);
    assert!(r.motor_torque_nm() > 0.0);
}

#[test]
fn envelope_corners_stay_physical() {
    // 가장 불리한 조합: 찬 SAE 30, 최고 회전수, 최소 부하
    let cold = compute(&inputs("SAE 30", 0.0, MAX_PUMP_SPEED_RPM, 0.0, 30.0)).unwrap();
    assert_relative_eq!(cold.efficiencies.motor.mechanical, 0.1469, max_relative = 1e-2);
    assert_relative_eq!(cold.efficiencies.pump.mechanical, 0.6441, max_relative = 1e-2);

    // 묽은 오일, 최저 회전수, 최고 압력
    let thin = compute(&inputs("ISO VG 46", 100.0, MIN_PUMP_SPEED_RPM, 50.0, 1000.0)).unwrap();
    assert_relative_eq!(thin.efficiencies.pump.volumetric, 0.28, max_relative = 1e-2);
    assert_relative_eq!(thin.efficiencies.motor.volumetric, 0.3434, max_relative = 1e-2);
    assert_relative_eq!(thin.pump_torque_nm(), 7845.42, max_relative = 1e-2);

    for r in [&cold, &thin] {
        for f in [r.efficiencies.pump, r.efficiencies.motor, r.efficiencies.hsu] {
            assert!(f.volumetric > 0.0 && f.volumetric <= 1.0);
            assert!(f.mechanical > 0.0 && f.mechanical <= 1.0);
        }
    }
}

#[test]
fn worn_clearances_are_a_model_error() {
    let worn = HsuCalculator::new(EfficiencyCoefficients {
        block_clearance_m: 200e-6,
        ..EfficiencyCoefficients::default()
    });
    let err = worn
        .compute(&inputs("ISO VG 46", 100.0, MIN_PUMP_SPEED_RPM, 50.0, 1000.0))
        .unwrap_err();
    assert!(err.is_model_error());
    assert!(!err.is_invalid_input());
}

#[test]
fn sealed_clearances_leave_only_compressibility() {
    let coeffs = EfficiencyCoefficients {
        block_clearance_m: 0.0,
        shoe_clearance_m: 0.0,
        piston_clearance_m: 0.0,
        ..EfficiencyCoefficients::default()
    };
    let calc = HsuCalculator::new(coeffs);
    let r = calc.compute(&inputs("ISO VG 46", 40.0, 1500.0, 20.0, 350.0)).unwrap();
    assert_eq!(r.leakage.total, 0.0);
    assert_eq!(r.efficiencies.motor.volumetric, 1.0);
    assert_relative_eq!(r.efficiencies.pump.volumetric, 1.0 - 330.0 / 15_000.0, epsilon = 1e-12);
}

#[test]
fn charge_pump_covers_both_machines() {
    let r = compute(&inputs("ISO VG 46", 40.0, 1500.0, 20.0, 350.0)).unwrap();
    assert_relative_eq!(r.charge_pump.continuous, 2.0 * r.leakage.total, epsilon = 1e-15);
    assert_relative_eq!(r.charge_pump.control_lpm(), 22.07, epsilon = 0.01);
    assert!(r.charge_pump.transient > r.charge_pump.control);
}

#[test]
fn loads_follow_pump_torque() {
    let r = compute(&OperatingInputs::default()).unwrap();
    let loads = compute_loads(25.0, 472.0, r.pump_torque_nm()).unwrap();
    assert_relative_eq!(loads.swash_hp_x_kn, 252.083, max_relative = 1e-4);
    assert_relative_eq!(loads.swash_lp_x_kn, 10.681, max_relative = 1e-3);
    assert_eq!(loads.shaft_torque_nm, r.pump_torque_nm());
}

#[test]
fn oil_lookup_ignores_case_and_padding() {
    assert_eq!(find_oil("  iso vg 46 ").unwrap().name, "ISO VG 46");
    assert!(matches!(find_oil("ISO VG 68"), Err(HsuError::UnknownOil(_))));
}
