//! HSU 설계 상수와 효율 모델 계수.
//!
//! 배제용적과 사판각은 항상 최대값으로 고정되며 사용자 입력이나 설정 파일로
//! 바꿀 수 없다.

/// 최대 배제용적(cc/rev)
pub const MAX_DISPLACEMENT_CC: f64 = 440.0;
/// 최대 사판각(°)
pub const MAX_SWASH_ANGLE_DEG: f64 = 18.0;
/// 피스톤 수
pub const PISTON_COUNT: u32 = 9;
/// 오일 체적탄성계수(bar)
pub const OIL_BULK_MODULUS_BAR: f64 = 15_000.0;

/// 효율 모델이 (0, 1] 효율을 보장하는 운전 범위. 모든 내장 오일, 0~100 °C 기준.
/// 차압은 0(무부하)이거나 `MIN_LOADED_DIFFERENTIAL_BAR` 이상이어야 한다.
pub const MIN_PUMP_SPEED_RPM: f64 = 500.0;
pub const MAX_PUMP_SPEED_RPM: f64 = 5_000.0;
pub const MAX_CHARGE_PRESSURE_BAR: f64 = 50.0;
pub const MAX_DISCHARGE_PRESSURE_BAR: f64 = 1_000.0;
pub const MIN_LOADED_DIFFERENTIAL_BAR: f64 = 30.0;

pub(crate) const PA_PER_BAR: f64 = 100_000.0;
pub(crate) const M3_PER_CC: f64 = 1e-6;

/// HSU를 구성하는 펌프/모터의 고정 설계값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConstants {
    /// 배제용적(cc/rev)
    pub displacement_cc: f64,
    /// 사판각(°)
    pub swash_angle_deg: f64,
    pub pistons: u32,
    /// 오일 체적탄성계수(bar)
    pub bulk_modulus_bar: f64,
}

impl DesignConstants {
    /// 유일하게 허용되는 설계값 조합.
    pub const HSU: DesignConstants = DesignConstants {
        displacement_cc: MAX_DISPLACEMENT_CC,
        swash_angle_deg: MAX_SWASH_ANGLE_DEG,
        pistons: PISTON_COUNT,
        bulk_modulus_bar: OIL_BULK_MODULUS_BAR,
    };

    /// 배제용적(m³/rev)
    pub fn displacement_m3(&self) -> f64 {
        self.displacement_cc * M3_PER_CC
    }

    pub fn swash_angle_rad(&self) -> f64 {
        self.swash_angle_deg.to_radians()
    }

    /// 고압(토출) 측에 연결된 피스톤 수. 홀수일 때 한 개 더 많다.
    pub fn high_pressure_pistons(&self) -> f64 {
        f64::from(self.pistons.div_ceil(2))
    }

    /// 저압(차지) 측에 연결된 피스톤 수.
    pub fn low_pressure_pistons(&self) -> f64 {
        f64::from(self.pistons / 2)
    }

    /// 피스톤 챔버의 평균 압력(Pa).
    pub fn mean_chamber_pressure_pa(&self, charge_bar: f64, discharge_bar: f64) -> f64 {
        (discharge_bar * self.high_pressure_pistons() + charge_bar * self.low_pressure_pistons())
            * PA_PER_BAR
            / f64::from(self.pistons)
    }
}

/// 기계효율/누설 모델 계수. 기본값은 동일 배제용적 축방향 피스톤 기계의 경험값이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyCoefficients {
    pub a: f64,
    /// 펌프 점성 마찰 지수 계수
    pub b_pump: f64,
    /// 모터 점성 마찰 지수 계수
    pub b_motor: f64,
    pub c_pump: f64,
    pub c_motor: f64,
    /// 일정 마찰 토크 계수
    pub d: f64,
    /// 실린더 블록/밸브 플레이트 간극(m)
    pub block_clearance_m: f64,
    /// 슬리퍼 간극(m)
    pub shoe_clearance_m: f64,
    /// 피스톤/보어 간극(m)
    pub piston_clearance_m: f64,
    /// 보어 내 피스톤 편심비
    pub eccentricity: f64,
}

impl Default for EfficiencyCoefficients {
    fn default() -> Self {
        Self {
            a: 0.17,
            b_pump: 1.0,
            b_motor: 0.5,
            c_pump: 0.001,
            c_motor: 0.005,
            d: 125.0,
            block_clearance_m: 20e-6,
            shoe_clearance_m: 20e-6,
            piston_clearance_m: 20e-6,
            eccentricity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_pistons_split_five_high_four_low() {
        let hsu = DesignConstants::HSU;
        assert_eq!(hsu.high_pressure_pistons(), 5.0);
        assert_eq!(hsu.low_pressure_pistons(), 4.0);
    }

    #[test]
    fn mean_chamber_pressure_weights_high_side() {
        let p = DesignConstants::HSU.mean_chamber_pressure_pa(20.0, 350.0);
        let expected = (5.0 * 350.0 + 4.0 * 20.0) / 9.0 * 1e5;
        assert!((p - expected).abs() < 1e-6);
    }
}
