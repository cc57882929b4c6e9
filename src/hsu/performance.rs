//! HSU 성능 계산기. 입력 검증 → 오일 물성 → 효율 → 속도/토크/동력 순으로 계산한다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::charge::{charge_pump_flows, ChargePumpFlows};
use super::constants::{EfficiencyCoefficients, PA_PER_BAR};
use super::efficiency::{EfficiencyModel, HsuEfficiencies, OperatingPoint};
use super::error::{HsuError, HsuResult};
use super::leakage::Leakage;
use super::oil::{find_oil, OilState};

/// 계산 요청 1회분의 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingInputs {
    /// 오일 이름(예: "ISO VG 46")
    pub oil: String,
    /// 오일 온도(°C)
    pub temperature_c: f64,
    /// 펌프 회전수(rpm)
    pub pump_speed_rpm: f64,
    /// 차지 압력(bar)
    pub charge_pressure_bar: f64,
    /// 토출 압력(bar)
    pub discharge_pressure_bar: f64,
}

impl Default for OperatingInputs {
    fn default() -> Self {
        Self {
            oil: "SAE 15W40".into(),
            temperature_c: 100.0,
            pump_speed_rpm: 2025.0,
            charge_pressure_bar: 25.0,
            discharge_pressure_bar: 472.0,
        }
    }
}

impl OperatingInputs {
    pub fn operating_point(&self) -> OperatingPoint {
        OperatingPoint::new(
            self.pump_speed_rpm,
            self.charge_pressure_bar,
            self.discharge_pressure_bar,
        )
    }

    pub fn differential_pressure_bar(&self) -> f64 {
        self.discharge_pressure_bar - self.charge_pressure_bar
    }
}

/// 축 하나의 회전수(rpm), 토크(N·m), 동력(kW).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MachinePerformance {
    pub speed_rpm: f64,
    pub torque_nm: f64,
    pub power_kw: f64,
}

/// 계산 결과 묶음. 성공 시에만 만들어지며 이후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceResult {
    pub inputs: OperatingInputs,
    pub oil: OilState,
    pub pump: MachinePerformance,
    pub motor: MachinePerformance,
    pub efficiencies: HsuEfficiencies,
    /// 기계 한 대 기준
    pub leakage: Leakage,
    pub charge_pump: ChargePumpFlows,
}

impl PerformanceResult {
    pub fn motor_speed_rpm(&self) -> f64 {
        self.motor.speed_rpm
    }

    pub fn motor_torque_nm(&self) -> f64 {
        self.motor.torque_nm
    }

    pub fn motor_power_kw(&self) -> f64 {
        self.motor.power_kw
    }

    pub fn pump_torque_nm(&self) -> f64 {
        self.pump.torque_nm
    }

    pub fn pump_power_kw(&self) -> f64 {
        self.pump.power_kw
    }

    /// 펌프와 모터의 차이(펌프 - 모터). HSU 안에서 잃는 속도/토크/동력이다.
    pub fn delta(&self) -> MachinePerformance {
        MachinePerformance {
            speed_rpm: self.pump.speed_rpm - self.motor.speed_rpm,
            torque_nm: self.pump.torque_nm - self.motor.torque_nm,
            power_kw: self.pump.power_kw - self.motor.power_kw,
        }
    }
}

/// 토크(N·m)와 회전수(rpm)로 동력(kW)을 구한다.
fn power_kw(torque_nm: f64, speed_rpm: f64) -> f64 {
    torque_nm * speed_rpm * PI / 30.0 / 1e3
}

/// 효율 모델을 소유한 계산기. 상태가 없어 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone, Default)]
pub struct HsuCalculator {
    model: EfficiencyModel,
}

impl HsuCalculator {
    pub fn new(coeffs: EfficiencyCoefficients) -> Self {
        Self {
            model: EfficiencyModel::new(coeffs),
        }
    }

    pub fn model(&self) -> &EfficiencyModel {
        &self.model
    }

    pub fn compute(&self, inputs: &OperatingInputs) -> HsuResult<PerformanceResult> {
        if !inputs.temperature_c.is_finite() {
            return Err(HsuError::InvalidInput {
                what: "oil temperature must be finite",
            });
        }
        let point = inputs.operating_point();
        point.validate()?;
        let oil = find_oil(&inputs.oil)?.at(inputs.temperature_c)?;

        let eval = self.model.evaluate(&oil, &point)?;
        let eff = eval.efficiencies;

        let displacement = self.model.design().displacement_m3();
        let dp_pa = point.differential_pressure_bar() * PA_PER_BAR;

        let theoretical_flow = displacement * point.speed_rpm / 60.0;
        let actual_flow = theoretical_flow * eff.hsu.volumetric;
        let motor_speed = actual_flow / displacement * 60.0;

        let ideal_torque = displacement * dp_pa / (2.0 * PI);
        let pump_torque = ideal_torque / eff.pump.mechanical;
        let motor_torque = ideal_torque * eff.motor.mechanical;

        let pump = MachinePerformance {
            speed_rpm: point.speed_rpm,
            torque_nm: pump_torque,
            power_kw: power_kw(pump_torque, point.speed_rpm),
        };
        let motor = MachinePerformance {
            speed_rpm: motor_speed,
            torque_nm: motor_torque,
            power_kw: power_kw(motor_torque, motor_speed),
        };
        debug!(
            oil = %inputs.oil,
            temperature_c = inputs.temperature_c,
            speed_rpm = point.speed_rpm,
            dp_bar = point.differential_pressure_bar(),
            motor_speed_rpm = motor.speed_rpm,
            pump_power_kw = pump.power_kw,
            "hsu operating point computed"
        );

        Ok(PerformanceResult {
            inputs: inputs.clone(),
            oil,
            pump,
            motor,
            efficiencies: eff,
            leakage: eval.leakage,
            charge_pump: charge_pump_flows(&eval.leakage),
        })
    }
}

/// 기본 계수로 HSU 성능을 계산한다.
pub fn compute(inputs: &OperatingInputs) -> HsuResult<PerformanceResult> {
    HsuCalculator::default().compute(inputs)
}
