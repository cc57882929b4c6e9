//! 사용자가 입력한 단위 문자열을 해석하고 HSU 내부 기준 단위(bar, °C)로 환산한다.

use thiserror::Error;

use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "bar" => Ok(PressureUnit::Bar),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" => Ok(FlowUnit::CubicMeterPerSecond),
        "lpm" | "l/min" => Ok(FlowUnit::LitrePerMinute),
        "gpm" => Ok(FlowUnit::GallonPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 입력 단위의 압력을 bar로 환산한다.
pub fn pressure_to_bar(value: f64, unit: PressureUnit) -> f64 {
    convert_pressure(value, unit, PressureUnit::Bar)
}

/// 입력 단위의 온도를 °C로 환산한다.
pub fn temperature_to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    convert_temperature(value, unit, TemperatureUnit::Celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse_pressure_unit("MPa"), Ok(PressureUnit::MegaPascal));
        assert_eq!(parse_pressure_unit(" psi "), Ok(PressureUnit::Psi));
        assert_eq!(parse_temperature_unit("°F"), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!(parse_flow_unit("L/min"), Ok(FlowUnit::LitrePerMinute));
    }

    #[test]
    fn unknown_unit_is_reported() {
        assert_eq!(
            parse_pressure_unit("mmHg"),
            Err(ConversionError::UnknownUnit("mmHg".into()))
        );
    }

    #[test]
    fn input_round_trip() {
        let psi = convert_pressure(350.0, PressureUnit::Bar, PressureUnit::Psi);
        assert!((pressure_to_bar(psi, PressureUnit::Psi) - 350.0).abs() < 1e-9);
        assert!((temperature_to_celsius(313.15, TemperatureUnit::Kelvin) - 40.0).abs() < 1e-9);
    }
}
