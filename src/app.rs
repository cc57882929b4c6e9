use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::hsu::{compute_loads, HsuCalculator, HsuError, Quantity};
use crate::i18n::Translator;
use crate::ui_cli::{self, Cli, Commands, DisplayUnits, OutputFormat};
use crate::units::{convert_pressure, convert_temperature, PressureUnit, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력 검증/모델 오류
    #[error("HSU 계산 오류: {0}")]
    Hsu(#[from] HsuError),
    /// 사용자 단위로 환산한 범위 오류
    #[error("범위를 벗어남: {what} = {value:.2} {unit} (허용 {min:.2} ~ {max:.2} {unit})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },
    /// JSON 출력 오류
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 명령을 실행하고 결과를 표준 출력에 쓴다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&mut out, cli, config, tr)
}

/// `run`과 같지만 출력 대상을 지정한다.
pub fn run_to<W: Write>(
    out: &mut W,
    cli: &Cli,
    config: &Config,
    tr: &Translator,
) -> Result<(), AppError> {
    let calculator = HsuCalculator::default();
    match &cli.command {
        Commands::Compute { inputs, format } => {
            let units = inputs.units(config)?;
            let resolved = inputs.resolve(config)?;
            info!(?resolved, "computing operating point");
            let result = calculator
                .compute(&resolved)
                .map_err(|e| in_user_units(e, &units))?;
            match format {
                OutputFormat::Text => ui_cli::print_report(out, tr, &result, &units)?,
                OutputFormat::Json => ui_cli::print_json(out, &result)?,
            }
        }
        Commands::Oils => {
            ui_cli::print_oils(out, tr, &default_units(config))?;
        }
        Commands::Sizes => {
            ui_cli::print_sizes(out, tr, calculator.model().group())?;
        }
        Commands::Loads { inputs } => {
            let units = inputs.units(config)?;
            let resolved = inputs.resolve(config)?;
            let result = calculator
                .compute(&resolved)
                .map_err(|e| in_user_units(e, &units))?;
            let loads = compute_loads(
                resolved.charge_pressure_bar,
                resolved.discharge_pressure_bar,
                result.pump_torque_nm(),
            )?;
            ui_cli::print_loads(out, tr, &loads)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// 범위 오류의 값과 경계를 사용자가 입력한 단위로 바꾼다. 그 밖의 오류는 그대로 둔다.
pub fn in_user_units(err: HsuError, units: &DisplayUnits) -> AppError {
    let HsuError::OutOfRange {
        what,
        quantity,
        value,
        min,
        max,
    } = err
    else {
        return AppError::Hsu(err);
    };
    let convert = |v: f64| match quantity {
        Quantity::Temperature => {
            convert_temperature(v, TemperatureUnit::Celsius, units.temperature)
        }
        Quantity::Pressure => convert_pressure(v, PressureUnit::Bar, units.pressure),
        Quantity::Speed => v,
    };
    let unit = match quantity {
        Quantity::Temperature => units.temperature.symbol(),
        Quantity::Pressure => units.pressure.symbol(),
        Quantity::Speed => quantity.base_unit(),
    };
    AppError::OutOfRange {
        what,
        value: convert(value),
        min: convert(min),
        max: convert(max),
        unit,
    }
}

impl AppError {
    /// 사용자가 입력을 고쳐야 하는 오류인지 여부.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            AppError::Hsu(e) => e.is_invalid_input(),
            AppError::OutOfRange { .. } | AppError::Conversion(_) => true,
            _ => false,
        }
    }
}

/// 설정의 기본 단위로 표시 단위를 만든다.
pub fn default_units(config: &Config) -> DisplayUnits {
    DisplayUnits {
        pressure: config.units.pressure,
        temperature: config.units.temperature,
        flow: config.units.flow,
    }
}
