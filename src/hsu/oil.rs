//! 작동유의 온도-동점도/밀도 테이블과 보간을 제공한다.
//! 각 등급의 40°C/100°C 동점도에서 Walther(ASTM D341) 식으로 0~100°C 값을 만들었고,
//! 밀도는 15°C 기준값에 열팽창계수 6.5e-4 /K를 적용했다. 값은 참고용이다.
use serde::Serialize;

use super::curve::{Curve, CurvePoint, Interpolation};
use super::error::{HsuError, HsuResult, Quantity};
use crate::units::{convert_viscosity, ViscosityUnit};

#[derive(Debug)]
pub struct Oil {
    pub name: &'static str,
    pub notes: &'static str,
    /// 동점도(cSt) vs 온도(°C)
    pub kinematic_viscosity: &'static [CurvePoint],
    /// 밀도(kg/m³) vs 온도(°C)
    pub density: &'static [CurvePoint],
}

/// 특정 온도에서의 오일 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OilState {
    pub temperature_c: f64,
    /// 동점도(cSt)
    pub kinematic_viscosity_cst: f64,
    /// 밀도(kg/m³)
    pub density_kg_m3: f64,
    /// 점도(cP = mPa·s)
    pub dynamic_viscosity_cp: f64,
}

impl OilState {
    /// 점도(Pa·s)
    pub fn dynamic_viscosity_pa_s(&self) -> f64 {
        convert_viscosity(
            self.dynamic_viscosity_cp,
            ViscosityUnit::Centipoise,
            ViscosityUnit::PascalSecond,
        )
    }
}

impl Oil {
    fn viscosity_curve(&self) -> HsuResult<Curve> {
        Curve::new(self.kinematic_viscosity, Interpolation::LogLinear)
    }

    fn density_curve(&self) -> HsuResult<Curve> {
        Curve::new(self.density, Interpolation::Linear)
    }

    /// 테이블이 정의된 온도 구간(°C). 점도와 밀도 테이블의 교집합이다.
    pub fn temperature_range(&self) -> (f64, f64) {
        let lo = self.kinematic_viscosity[0].x.max(self.density[0].x);
        let hi = last(self.kinematic_viscosity).x.min(last(self.density).x);
        (lo, hi)
    }

    /// 주어진 온도에서 물성을 보간한다. 범위를 벗어나면 외삽하지 않고 오류를 낸다.
    pub fn at(&self, temperature_c: f64) -> HsuResult<OilState> {
        let (min, max) = self.temperature_range();
        let out_of_range = HsuError::OutOfRange {
            what: "oil temperature",
            quantity: Quantity::Temperature,
            value: temperature_c,
            min,
            max,
        };
        let nu = self
            .viscosity_curve()?
            .at(temperature_c)
            .ok_or_else(|| out_of_range.clone())?;
        let rho = self
            .density_curve()?
            .at(temperature_c)
            .ok_or(out_of_range)?;
        Ok(OilState {
            temperature_c,
            kinematic_viscosity_cst: nu,
            density_kg_m3: rho,
            dynamic_viscosity_cp: nu * rho / 1000.0,
        })
    }
}

fn last(points: &[CurvePoint]) -> CurvePoint {
    points[points.len() - 1]
}

/// 등록된 모든 오일.
pub fn oils() -> &'static [Oil] {
    OILS
}

/// 이름으로 오일을 찾는다. 대소문자와 앞뒤 공백은 무시한다.
pub fn find_oil(name: &str) -> HsuResult<&'static Oil> {
    let key = name.trim();
    OILS.iter()
        .find(|o| o.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| HsuError::UnknownOil(key.to_string()))
}

const OILS: &[Oil] = &[
    Oil {
        name: "ISO VG 46",
        notes: "Mineral hydraulic oil; ν40 = 46 cSt, ν100 = 6.8 cSt",
        kinematic_viscosity: &[
            tp(0.0, 577.32),
            tp(10.0, 261.87),
            tp(20.0, 133.84),
            tp(30.0, 75.39),
            tp(40.0, 46.0),
            tp(50.0, 29.97),
            tp(60.0, 20.62),
            tp(70.0, 14.85),
            tp(80.0, 11.1),
            tp(90.0, 8.57),
            tp(100.0, 6.8),
        ],
        density: &[
            tp(0.0, 880.5),
            tp(10.0, 874.8),
            tp(20.0, 869.2),
            tp(30.0, 863.5),
            tp(40.0, 857.8),
            tp(50.0, 852.2),
            tp(60.0, 846.5),
            tp(70.0, 840.8),
            tp(80.0, 835.2),
            tp(90.0, 829.5),
            tp(100.0, 823.8),
        ],
    },
    Oil {
        name: "SAE 15W40",
        notes: "Multigrade engine oil; ν40 = 108 cSt, ν100 = 14.5 cSt",
        kinematic_viscosity: &[
            tp(0.0, 1293.05),
            tp(10.0, 606.43),
            tp(20.0, 314.85),
            tp(30.0, 177.95),
            tp(40.0, 108.0),
            tp(50.0, 69.6),
            tp(60.0, 47.19),
            tp(70.0, 33.41),
            tp(80.0, 24.55),
            tp(90.0, 18.61),
            tp(100.0, 14.5),
        ],
        density: &[
            tp(0.0, 888.6),
            tp(10.0, 882.9),
            tp(20.0, 877.1),
            tp(30.0, 871.4),
            tp(40.0, 865.7),
            tp(50.0, 860.0),
            tp(60.0, 854.3),
            tp(70.0, 848.5),
            tp(80.0, 842.8),
            tp(90.0, 837.1),
            tp(100.0, 831.4),
        ],
    },
    Oil {
        name: "SAE 5W30",
        notes: "Multigrade engine oil; ν40 = 62 cSt, ν100 = 10.5 cSt",
        kinematic_viscosity: &[
            tp(0.0, 541.63),
            tp(10.0, 280.15),
            tp(20.0, 158.15),
            tp(30.0, 96.04),
            tp(40.0, 62.0),
            tp(50.0, 42.15),
            tp(60.0, 29.93),
            tp(70.0, 22.06),
            tp(80.0, 16.78),
            tp(90.0, 13.12),
            tp(100.0, 10.5),
        ],
        density: &[
            tp(0.0, 863.3),
            tp(10.0, 857.8),
            tp(20.0, 852.2),
            tp(30.0, 846.7),
            tp(40.0, 841.1),
            tp(50.0, 835.5),
            tp(60.0, 830.0),
            tp(70.0, 824.4),
            tp(80.0, 818.9),
            tp(90.0, 813.3),
            tp(100.0, 807.8),
        ],
    },
    Oil {
        name: "SAE 30",
        notes: "Monograde engine oil; ν40 = 100 cSt, ν100 = 11 cSt",
        kinematic_viscosity: &[
            tp(0.0, 1861.39),
            tp(10.0, 748.12),
            tp(20.0, 344.41),
            tp(30.0, 177.25),
            tp(40.0, 100.0),
            tp(50.0, 60.89),
            tp(60.0, 39.5),
            tp(70.0, 27.02),
            tp(80.0, 19.32),
            tp(90.0, 14.35),
            tp(100.0, 11.0),
        ],
        density: &[
            tp(0.0, 898.7),
            tp(10.0, 892.9),
            tp(20.0, 887.1),
            tp(30.0, 881.3),
            tp(40.0, 875.5),
            tp(50.0, 869.8),
            tp(60.0, 864.0),
            tp(70.0, 858.2),
            tp(80.0, 852.4),
            tp(90.0, 846.6),
            tp(100.0, 840.8),
        ],
    },
];

const fn tp(temp_c: f64, value: f64) -> CurvePoint {
    CurvePoint::new(temp_c, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tables_are_valid_curves() {
        for oil in oils() {
            assert!(oil.viscosity_curve().is_ok(), "{}", oil.name);
            assert!(oil.density_curve().is_ok(), "{}", oil.name);
            assert_eq!(oil.temperature_range(), (0.0, 100.0));
        }
    }

    #[test]
    fn viscosity_falls_with_temperature() {
        for oil in oils() {
            let cold = oil.at(20.0).unwrap();
            let hot = oil.at(80.0).unwrap();
            assert!(cold.dynamic_viscosity_cp > hot.dynamic_viscosity_cp, "{}", oil.name);
            assert!(cold.density_kg_m3 > hot.density_kg_m3, "{}", oil.name);
        }
    }

    #[test]
    fn iso_vg_46_at_40c_matches_grade() {
        let state = find_oil("iso vg 46").unwrap().at(40.0).unwrap();
        assert_eq!(state.kinematic_viscosity_cst, 46.0);
        assert!((state.dynamic_viscosity_cp - 39.4588).abs() < 1e-9);
        assert!((state.dynamic_viscosity_pa_s() - 0.0394588).abs() < 1e-12);
    }
}
