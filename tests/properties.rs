use hsu_performance::hsu::{
    compute, oils, OperatingInputs, MAX_CHARGE_PRESSURE_BAR, MAX_DISCHARGE_PRESSURE_BAR,
    MAX_PUMP_SPEED_RPM, MIN_LOADED_DIFFERENTIAL_BAR, MIN_PUMP_SPEED_RPM,
};
use proptest::prelude::*;

// 토출 압력에 더할 여유. 단조성 검사가 최대 토출 압력을 넘지 않게 한다.
const HEADROOM_BAR: f64 = 50.0;

fn oil_name() -> impl Strategy<Value = String> {
    proptest::sample::select(oils().iter().map(|o| o.name.to_string()).collect::<Vec<_>>())
}

fn temperature() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(100.0), 0.0f64..=100.0]
}

fn speed() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(MIN_PUMP_SPEED_RPM),
        Just(MAX_PUMP_SPEED_RPM),
        MIN_PUMP_SPEED_RPM..=MAX_PUMP_SPEED_RPM
    ]
}

fn loaded_differential() -> impl Strategy<Value = f64> {
    let max = MAX_DISCHARGE_PRESSURE_BAR - MAX_CHARGE_PRESSURE_BAR - HEADROOM_BAR;
    prop_oneof![Just(MIN_LOADED_DIFFERENTIAL_BAR), MIN_LOADED_DIFFERENTIAL_BAR..=max]
}

prop_compose! {
    fn operating_inputs()(
        oil in oil_name(),
        temperature_c in temperature(),
        pump_speed_rpm in speed(),
        charge_pressure_bar in 0.0f64..=MAX_CHARGE_PRESSURE_BAR,
        differential in loaded_differential()
    ) -> OperatingInputs {
        OperatingInputs {
            oil,
            temperature_c,
            pump_speed_rpm,
            charge_pressure_bar,
            discharge_pressure_bar: charge_pressure_bar + differential,
        }
    }
}

proptest! {
    #[test]
    fn results_are_finite_and_non_negative(inputs in operating_inputs()) {
        let r = compute(&inputs).unwrap();
        for v in [
            r.pump.speed_rpm, r.pump.torque_nm, r.pump.power_kw,
            r.motor.speed_rpm, r.motor.torque_nm, r.motor.power_kw,
            r.leakage.total, r.charge_pump.transient,
        ] {
            prop_assert!(v.is_finite() && v >= 0.0, "{v}");
        }
        for f in [r.efficiencies.pump, r.efficiencies.motor, r.efficiencies.hsu] {
            prop_assert!(f.volumetric > 0.0 && f.volumetric <= 1.0);
            prop_assert!(f.mechanical > 0.0 && f.mechanical <= 1.0);
        }
        prop_assert!(r.motor.power_kw <= r.pump.power_kw);
    }

    #[test]
    fn compute_is_idempotent(inputs in operating_inputs()) {
        let a = compute(&inputs).unwrap();
        let b = compute(&inputs).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn torque_rises_with_discharge_pressure(
        inputs in operating_inputs(),
        step in 1.0f64..HEADROOM_BAR,
    ) {
        let lower = compute(&inputs).unwrap();
        let higher = compute(&OperatingInputs {
            discharge_pressure_bar: inputs.discharge_pressure_bar + step,
            ..inputs.clone()
        })
        .unwrap();
        prop_assert!(higher.pump_torque_nm() > lower.pump_torque_nm());
        prop_assert!(higher.motor_torque_nm() > lower.motor_torque_nm());
    }

    #[test]
    fn motor_speed_scales_with_pump_speed(inputs in operating_inputs()) {
        let r = compute(&inputs).unwrap();
        let ratio = r.motor_speed_rpm() / r.inputs.pump_speed_rpm;
        prop_assert!((ratio - r.efficiencies.hsu.volumetric).abs() < 1e-12);
    }

    #[test]
    fn unloaded_point_has_no_torque(inputs in operating_inputs()) {
        let r = compute(&OperatingInputs {
            discharge_pressure_bar: inputs.charge_pressure_bar,
            ..inputs
        })
        .unwrap();
        prop_assert_eq!(r.pump_torque_nm(), 0.0);
        prop_assert_eq!(r.motor_torque_nm(), 0.0);
        prop_assert!(r.motor_speed_rpm() > 0.0);
    }

    #[test]
    fn inverted_pressures_never_produce_a_result(
        inputs in operating_inputs(),
        gap in 0.1f64..100.0,
    ) {
        let inverted = OperatingInputs {
            charge_pressure_bar: inputs.discharge_pressure_bar + gap,
            ..inputs
        };
        prop_assert!(compute(&inverted).unwrap_err().is_invalid_input());
    }

    #[test]
    fn speeds_outside_the_envelope_are_invalid_input(
        inputs in operating_inputs(),
        speed in prop_oneof![
            0.001f64..MIN_PUMP_SPEED_RPM,
            (MAX_PUMP_SPEED_RPM + 0.001)..20_000.0
        ],
    ) {
        let err = compute(&OperatingInputs { pump_speed_rpm: speed, ..inputs }).unwrap_err();
        prop_assert!(err.is_invalid_input(), "{err}");
        prop_assert!(!err.is_model_error());
    }

    #[test]
    fn light_loads_are_invalid_input(
        inputs in operating_inputs(),
        differential in 0.001f64..(MIN_LOADED_DIFFERENTIAL_BAR - 0.01),
    ) {
        let light = OperatingInputs {
            discharge_pressure_bar: inputs.charge_pressure_bar + differential,
            ..inputs
        };
        let err = compute(&light).unwrap_err();
        prop_assert!(err.is_invalid_input(), "{err}");
    }

    #[test]
    fn pressures_above_the_envelope_are_invalid_input(
        inputs in operating_inputs(),
        excess in 0.001f64..500.0,
    ) {
        let over = OperatingInputs {
            discharge_pressure_bar: MAX_DISCHARGE_PRESSURE_BAR + excess,
            ..inputs
        };
        prop_assert!(compute(&over).unwrap_err().is_invalid_input());
    }
}
