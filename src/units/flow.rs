use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    LitrePerMinute,
    /// 미국 갤런/분
    GallonPerMinute,
}

const LPM_PER_M3S: f64 = 60_000.0;
const LITRES_PER_US_GALLON: f64 = 3.785_411_784;

fn to_m3s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LitrePerMinute => value / LPM_PER_M3S,
        FlowUnit::GallonPerMinute => value * LITRES_PER_US_GALLON / LPM_PER_M3S,
    }
}

fn from_m3s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LitrePerMinute => value * LPM_PER_M3S,
        FlowUnit::GallonPerMinute => value * LPM_PER_M3S / LITRES_PER_US_GALLON,
    }
}

/// 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_m3s(to_m3s(value, from), to)
}

impl FlowUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerSecond => "m³/s",
            FlowUnit::LitrePerMinute => "L/min",
            FlowUnit::GallonPerMinute => "gpm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn litres_per_minute() {
        assert!((convert_flow(1e-3, FlowUnit::CubicMeterPerSecond, FlowUnit::LitrePerMinute) - 60.0).abs() < 1e-12);
        assert!((convert_flow(1.0, FlowUnit::GallonPerMinute, FlowUnit::LitrePerMinute) - 3.785_411_784).abs() < 1e-9);
    }
}
