use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 bar이며 HSU 압력은 모두 케이스 압력 기준 게이지 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
    KiloPascal,
    MegaPascal,
    Psi,
}

const PA_PER_BAR: f64 = 100_000.0;
const BAR_PER_PSI: f64 = 0.0689476;

/// 주어진 압력을 bar 로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::Psi => value * BAR_PER_PSI,
    }
}

/// bar 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::Psi => value_bar / BAR_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let bar = to_bar(value, from);
    from_bar(bar, to)
}

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Psi => "psi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megapascal_and_psi() {
        assert_eq!(to_bar(35.0, PressureUnit::MegaPascal), 350.0);
        assert!((from_bar(1.0, PressureUnit::Psi) - 14.5038).abs() < 1e-3);
    }
}
