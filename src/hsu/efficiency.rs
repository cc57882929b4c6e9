//! 체적효율/기계효율 모델.
//!
//! 체적효율은 간극 누설과 오일 압축성으로, 기계효율은 점성 마찰과 일정 마찰 토크의
//! 경험식으로 구한다. 두 식 모두 운전점과 오일 점도만의 순수 함수다.

use serde::Serialize;
use tracing::warn;

use super::constants::{
    DesignConstants, EfficiencyCoefficients, MAX_CHARGE_PRESSURE_BAR, MAX_DISCHARGE_PRESSURE_BAR,
    MAX_PUMP_SPEED_RPM, MIN_LOADED_DIFFERENTIAL_BAR, MIN_PUMP_SPEED_RPM,
};
use super::error::{HsuError, HsuResult, Quantity};
use super::leakage::{compute_leakage, Leakage};
use super::oil::{Oil, OilState};
use super::sizes::PumpingGroup;

/// 펌프 측 운전점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    /// 펌프 회전수(rpm)
    pub speed_rpm: f64,
    /// 차지 압력(bar)
    pub charge_bar: f64,
    /// 토출 압력(bar)
    pub discharge_bar: f64,
}

impl OperatingPoint {
    pub fn new(speed_rpm: f64, charge_bar: f64, discharge_bar: f64) -> Self {
        Self {
            speed_rpm,
            charge_bar,
            discharge_bar,
        }
    }

    /// 차압(bar) = 토출 - 차지
    pub fn differential_pressure_bar(&self) -> f64 {
        self.discharge_bar - self.charge_bar
    }

    /// 압력만 확인한다. 유한하고 음수가 아니며 토출 >= 차지여야 한다.
    pub fn validate_pressures(&self) -> HsuResult<()> {
        if !self.charge_bar.is_finite() || !self.discharge_bar.is_finite() {
            return Err(HsuError::InvalidInput {
                what: "pressures must be finite",
            });
        }
        if self.charge_bar < 0.0 || self.discharge_bar < 0.0 {
            return Err(HsuError::InvalidInput {
                what: "pressures must not be negative",
            });
        }
        if self.differential_pressure_bar() < 0.0 {
            return Err(HsuError::InvalidInput {
                what: "discharge pressure must not be below charge pressure",
            });
        }
        Ok(())
    }

    /// 물리적 유효성과 효율 모델의 운전 범위를 함께 확인한다.
    /// 범위 밖은 `OutOfRange`로 돌려주므로 범위 안에서의 `Model` 오류는 버그다.
    pub fn validate(&self) -> HsuResult<()> {
        if !self.speed_rpm.is_finite() || self.speed_rpm <= 0.0 {
            return Err(HsuError::InvalidInput {
                what: "pump speed must be positive",
            });
        }
        self.validate_pressures()?;

        within(
            "pump speed",
            Quantity::Speed,
            self.speed_rpm,
            MIN_PUMP_SPEED_RPM,
            MAX_PUMP_SPEED_RPM,
        )?;
        within(
            "charge pressure",
            Quantity::Pressure,
            self.charge_bar,
            0.0,
            MAX_CHARGE_PRESSURE_BAR,
        )?;
        within(
            "discharge pressure",
            Quantity::Pressure,
            self.discharge_bar,
            0.0,
            MAX_DISCHARGE_PRESSURE_BAR,
        )?;
        let dp = self.differential_pressure_bar();
        if dp > 0.0 && dp < MIN_LOADED_DIFFERENTIAL_BAR {
            return Err(HsuError::OutOfRange {
                what: "differential pressure",
                quantity: Quantity::Pressure,
                value: dp,
                min: MIN_LOADED_DIFFERENTIAL_BAR,
                max: MAX_DISCHARGE_PRESSURE_BAR,
            });
        }
        Ok(())
    }
}

fn within(what: &'static str, quantity: Quantity, value: f64, min: f64, max: f64) -> HsuResult<()> {
    if value < min || value > max {
        return Err(HsuError::OutOfRange {
            what,
            quantity,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// 체적효율과 기계효율. 둘 다 (0, 1] 구간이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyFactors {
    pub volumetric: f64,
    pub mechanical: f64,
}

impl EfficiencyFactors {
    pub fn total(&self) -> f64 {
        self.volumetric * self.mechanical
    }
}

/// 펌프, 모터, HSU 전체의 효율.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HsuEfficiencies {
    pub pump: EfficiencyFactors,
    pub motor: EfficiencyFactors,
    /// 펌프와 모터 효율의 곱
    pub hsu: EfficiencyFactors,
}

/// 효율 평가 결과와 그 근거가 된 누설량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyEvaluation {
    pub efficiencies: HsuEfficiencies,
    pub leakage: Leakage,
}

/// 고정 설계값에 묶인 효율 모델.
#[derive(Debug, Clone)]
pub struct EfficiencyModel {
    design: DesignConstants,
    group: PumpingGroup,
    coeffs: EfficiencyCoefficients,
}

impl Default for EfficiencyModel {
    fn default() -> Self {
        Self::new(EfficiencyCoefficients::default())
    }
}

impl EfficiencyModel {
    /// 설계값은 항상 [`DesignConstants::HSU`]이며 계수만 바꿀 수 있다.
    pub fn new(coeffs: EfficiencyCoefficients) -> Self {
        Self {
            design: DesignConstants::HSU,
            group: PumpingGroup::hsu(),
            coeffs,
        }
    }

    pub fn design(&self) -> &DesignConstants {
        &self.design
    }

    pub fn group(&self) -> &PumpingGroup {
        &self.group
    }

    /// 주어진 오일 상태와 운전점에서 효율과 누설을 계산한다.
    pub fn evaluate(&self, oil: &OilState, point: &OperatingPoint) -> HsuResult<EfficiencyEvaluation> {
        point.validate()?;
        let mu_pa_s = oil.dynamic_viscosity_pa_s();
        if !(mu_pa_s.is_finite() && mu_pa_s > 0.0) {
            return Err(HsuError::Model {
                what: "oil dynamic viscosity",
                value: mu_pa_s,
            });
        }

        let leakage = compute_leakage(
            &self.group,
            &self.design,
            &self.coeffs,
            mu_pa_s,
            point.charge_bar,
            point.discharge_bar,
        );

        let dp = point.differential_pressure_bar();
        let theoretical_flow = point.speed_rpm * self.design.displacement_m3() / 60.0;
        let leak_ratio = leakage.total / theoretical_flow;

        let vol_pump = check(
            "pump volumetric efficiency",
            1.0 - dp / self.design.bulk_modulus_bar - leak_ratio,
        )?;
        let vol_motor = check("motor volumetric efficiency", 1.0 - leak_ratio)?;
        let vol_hsu = vol_pump * vol_motor;

        let (mech_pump, mech_motor) = if dp == 0.0 {
            // 무부하: 전달 토크가 없으므로 토크 손실도 정의상 0으로 본다.
            (1.0, 1.0)
        } else {
            let c = &self.coeffs;
            let load = self.design.swash_angle_deg * dp;
            let x_pump = oil.dynamic_viscosity_cp * point.speed_rpm / load;
            let x_motor = x_pump * vol_hsu;
            let pump = 1.0 - c.a * (-c.b_pump * x_pump).exp() - c.c_pump * x_pump.sqrt() - c.d / load;
            let motor =
                1.0 - c.a * (-c.b_motor * x_motor).exp() - c.c_motor * x_motor.sqrt() - c.d / load;
            (
                check("pump mechanical efficiency", pump)?,
                check("motor mechanical efficiency", motor)?,
            )
        };

        let pump = EfficiencyFactors {
            volumetric: vol_pump,
            mechanical: mech_pump,
        };
        let motor = EfficiencyFactors {
            volumetric: vol_motor,
            mechanical: mech_motor,
        };
        let hsu = EfficiencyFactors {
            volumetric: vol_hsu,
            mechanical: mech_pump * mech_motor,
        };
        Ok(EfficiencyEvaluation {
            efficiencies: HsuEfficiencies { pump, motor, hsu },
            leakage,
        })
    }
}

fn check(what: &'static str, value: f64) -> HsuResult<f64> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        warn!(what, value, "efficiency outside (0, 1]");
        Err(HsuError::Model { what, value })
    }
}

/// 오일, 온도, 운전점으로 HSU 효율을 구한다. 기본 계수를 사용한다.
pub fn efficiencies(
    oil: &Oil,
    temperature_c: f64,
    point: &OperatingPoint,
) -> HsuResult<HsuEfficiencies> {
    let state = oil.at(temperature_c)?;
    EfficiencyModel::default()
        .evaluate(&state, point)
        .map(|e| e.efficiencies)
}
