use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::hsu::OperatingInputs;
use crate::units::*;

const CONFIG_PATH: &str = "config.toml";

/// 입력/표시에 사용할 기본 단위 설정을 담는다. 내부 계산은 항상 bar, °C, m³/s 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub flow: FlowUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Bar,
            temperature: TemperatureUnit::Celsius,
            flow: FlowUnit::LitrePerMinute,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 설계 상수(배제용적, 사판각)는 설정 대상이 아니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "ko", "en"
    pub language: String,
    /// 입력 생략 시 사용할 운전 조건
    pub inputs: OperatingInputs,
    pub units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            inputs: OperatingInputs::default(),
            units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = Config::from_toml_str("language = \"en\"\n").unwrap();
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.inputs, OperatingInputs::default());
        assert_eq!(cfg.units, DefaultUnits::default());
    }

    #[test]
    fn partial_inputs_table() {
        let cfg = Config::from_toml_str(
            "[inputs]\noil = \"ISO VG 46\"\ntemperature_c = 40.0\n\n[units]\npressure = \"Psi\"\n",
        )
        .unwrap();
        assert_eq!(cfg.inputs.oil, "ISO VG 46");
        assert_eq!(cfg.inputs.temperature_c, 40.0);
        assert_eq!(cfg.inputs.pump_speed_rpm, 2025.0);
        assert_eq!(cfg.units.pressure, PressureUnit::Psi);
        assert_eq!(cfg.units.temperature, TemperatureUnit::Celsius);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config::default();
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(matches!(
            Config::from_toml_str("inputs = 3"),
            Err(ConfigError::Serde(_))
        ));
    }
}
