use std::f64::consts::PI;

use serde::Serialize;

use super::leakage::Leakage;
use crate::units::{convert_flow, FlowUnit};

/// 제어 피스톤 직경(m)
pub const CONTROL_PISTON_DIAMETER_M: f64 = 72.08e-3;
/// 제어 피스톤 행정(m)
pub const CONTROL_PISTON_STROKE_M: f64 = 144.26e-3;
/// 최대 사판각에서 중립까지 되돌리는 시간(s)
pub const DESTROKE_TIME_S: f64 = 0.8;

/// 차지 펌프가 공급해야 하는 유량(m³/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargePumpFlows {
    /// 펌프와 모터 누설 보충
    pub continuous: f64,
    /// 사판 제어 피스톤 구동
    pub control: f64,
    /// 과도 상태 최대 요구량 = continuous + control
    pub transient: f64,
}

impl ChargePumpFlows {
    pub fn continuous_lpm(&self) -> f64 {
        to_lpm(self.continuous)
    }

    pub fn control_lpm(&self) -> f64 {
        to_lpm(self.control)
    }

    pub fn transient_lpm(&self) -> f64 {
        to_lpm(self.transient)
    }
}

fn to_lpm(m3_per_s: f64) -> f64 {
    convert_flow(m3_per_s, FlowUnit::CubicMeterPerSecond, FlowUnit::LitrePerMinute)
}

/// 사판을 destroke 시간 안에 절반 행정만큼 움직이는 데 필요한 제어 유량(m³/s).
pub fn control_flow() -> f64 {
    PI * CONTROL_PISTON_DIAMETER_M.powi(2) / 4.0 * CONTROL_PISTON_STROKE_M / 2.0 / DESTROKE_TIME_S
}

/// 기계 한 대의 누설로부터 차지 펌프 요구 유량을 구한다. 펌프와 모터의 누설은 같다고 본다.
pub fn charge_pump_flows(machine_leakage: &Leakage) -> ChargePumpFlows {
    let continuous = 2.0 * machine_leakage.total;
    let control = control_flow();
    ChargePumpFlows {
        continuous,
        control,
        transient: continuous + control,
    }
}
