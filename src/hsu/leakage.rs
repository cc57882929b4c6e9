use std::f64::consts::PI;

use serde::Serialize;

use super::constants::{DesignConstants, EfficiencyCoefficients};
use super::sizes::PumpingGroup;
use crate::units::{convert_flow, FlowUnit};

/// 기계 한 대의 층류 누설 유량(m³/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leakage {
    /// 실린더 블록/밸브 플레이트 간극
    pub block: f64,
    /// 슬리퍼 간극
    pub shoes: f64,
    /// 피스톤/보어 간극(전 피스톤 합)
    pub pistons: f64,
    pub total: f64,
}

impl Leakage {
    /// 총 누설을 L/min으로 반환한다.
    pub fn total_lpm(&self) -> f64 {
        convert_flow(self.total, FlowUnit::CubicMeterPerSecond, FlowUnit::LitrePerMinute)
    }
}

/// 평균 챔버 압력과 점도로 세 간극의 누설을 계산한다.
///
/// `viscosity_pa_s`는 0보다 커야 하며 호출 측(효율 모델)에서 보장한다.
pub fn compute_leakage(
    group: &PumpingGroup,
    design: &DesignConstants,
    coeffs: &EfficiencyCoefficients,
    viscosity_pa_s: f64,
    charge_bar: f64,
    discharge_bar: f64,
) -> Leakage {
    let z = design.pistons;
    let p_mean = design.mean_chamber_pressure_pa(charge_bar, discharge_bar);

    let h1 = coeffs.block_clearance_m;
    let block = PI * h1.powi(3) * p_mean
        * (1.0 / (group.outer_land_outer_radius_m / group.outer_land_inner_radius_m).ln()
            + 1.0 / (group.inner_land_outer_radius_m / group.inner_land_inner_radius_m).ln())
        / (6.0 * viscosity_pa_s);

    let h2 = coeffs.shoe_clearance_m;
    let shoes = f64::from(z) * PI * h2.powi(3) * p_mean
        / (6.0
            * viscosity_pa_s
            * (group.shoe_outer_radius_m / group.shoe_inner_radius_m).ln());

    // 피스톤 위치에 따라 보어 내 물림 길이가 달라진다.
    let h3 = coeffs.piston_clearance_m;
    let eccentric = 1.0 + 1.5 * coeffs.eccentricity.powi(3);
    let pistons: f64 = (0..z)
        .map(|i| {
            let gap_length = group.min_engagement_m
                + group.stroke_m * (PI * f64::from(i) / f64::from(z)).sin();
            PI * group.piston_diameter_m * h3.powi(3) * p_mean * eccentric
                / (12.0 * viscosity_pa_s * gap_length)
        })
        .sum();

    Leakage {
        block,
        shoes,
        pistons,
        total: block + shoes + pistons,
    }
}
