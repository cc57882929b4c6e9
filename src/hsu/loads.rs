use serde::Serialize;

use super::constants::{DesignConstants, PA_PER_BAR};
use super::efficiency::OperatingPoint;
use super::error::HsuResult;
use super::sizes::PumpingGroup;

/// 압력에 의한 정상상태 구조 하중. 힘은 kN, 토크는 N·m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StructuralLoads {
    /// 축 반경 방향 하중
    pub shaft_radial_kn: f64,
    /// 사판 고압측 축방향 하중
    pub swash_hp_x_kn: f64,
    pub swash_lp_x_kn: f64,
    /// 사판 고압측 수직 하중
    pub swash_hp_z_kn: f64,
    pub swash_lp_z_kn: f64,
    /// 모터 고압측 피스톤 하중
    pub motor_hp_kn: f64,
    pub motor_lp_kn: f64,
    pub shaft_torque_nm: f64,
}

/// 차지/토출 압력과 펌프 토크로 구조 하중을 계산한다.
pub fn compute_loads(
    charge_bar: f64,
    discharge_bar: f64,
    pump_torque_nm: f64,
) -> HsuResult<StructuralLoads> {
    // 하중은 속도와 무관하다.
    OperatingPoint::new(0.0, charge_bar, discharge_bar).validate_pressures()?;

    let design = DesignConstants::HSU;
    let group = PumpingGroup::hsu();
    let ap = group.piston_area_m2;
    let tan = design.swash_angle_rad().tan();
    let cos = design.swash_angle_rad().cos();

    let hp_force = design.high_pressure_pistons() * discharge_bar * PA_PER_BAR * ap / 1e3;
    let lp_force = design.low_pressure_pistons() * charge_bar * PA_PER_BAR * ap / 1e3;

    Ok(StructuralLoads {
        shaft_radial_kn: (hp_force + lp_force) * tan,
        swash_hp_x_kn: hp_force,
        swash_lp_x_kn: lp_force,
        swash_hp_z_kn: hp_force * tan,
        swash_lp_z_kn: lp_force * tan,
        motor_hp_kn: hp_force / cos,
        motor_lp_kn: lp_force / cos,
        shaft_torque_nm: pump_torque_nm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_loads() {
        let loads = compute_loads(25.0, 472.0, 3212.0).unwrap();
        // 5 · 472e5 Pa · 1.06815e-3 m² = 252.08 kN
        assert!((loads.swash_hp_x_kn - 252.083).abs() < 0.01);
        assert!((loads.swash_lp_x_kn - 10.681).abs() < 0.01);
        assert!((loads.shaft_radial_kn - (loads.swash_hp_z_kn + loads.swash_lp_z_kn)).abs() < 1e-9);
        assert!(loads.motor_hp_kn > loads.swash_hp_x_kn);
        assert_eq!(loads.shaft_torque_nm, 3212.0);
    }

    #[test]
    fn rejects_inverted_pressures() {
        assert!(compute_loads(100.0, 50.0, 0.0).unwrap_err().is_invalid_input());
    }
}
