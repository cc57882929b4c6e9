use std::io::Write;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::hsu::{
    oils, OperatingInputs, PerformanceResult, PumpingGroup, StructuralLoads, MAX_DISPLACEMENT_CC,
    PISTON_COUNT,
};
use crate::i18n::{keys, Translator};
use crate::units::{
    convert_flow, convert_pressure, convert_temperature, FlowUnit, PressureUnit, TemperatureUnit,
};

#[derive(Debug, Parser)]
#[command(name = "hsu_performance_cli")]
#[command(version, about = "HSU(유압 정변위 펌프-모터) 성능 계산기", long_about = None)]
pub struct Cli {
    /// 출력 언어(ko, en, auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// 로그 상세도(-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 운전 조건에서 펌프/모터 성능을 계산한다
    Compute {
        #[command(flatten)]
        inputs: InputArgs,
        /// 출력 형식
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// 내장 오일 목록과 유효 온도 범위
    Oils,
    /// 펌핑 그룹 치수
    Sizes,
    /// 압력에 의한 구조 하중
    Loads {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

/// 운전 조건 인자. 생략한 값은 설정 파일의 `[inputs]`를 따른다.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// 오일 이름(예: "ISO VG 46")
    #[arg(long)]
    pub oil: Option<String>,
    /// 오일 온도(--temp-unit 단위)
    #[arg(long, allow_negative_numbers = true)]
    pub temp: Option<f64>,
    /// 펌프 회전수(rpm)
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<f64>,
    /// 차지 압력(--pressure-unit 단위)
    #[arg(long, allow_negative_numbers = true)]
    pub charge: Option<f64>,
    /// 토출 압력(--pressure-unit 단위)
    #[arg(long, allow_negative_numbers = true)]
    pub discharge: Option<f64>,
    /// 압력 단위(bar, kPa, MPa, psi)
    #[arg(long)]
    pub pressure_unit: Option<String>,
    /// 온도 단위(C, K, F)
    #[arg(long)]
    pub temp_unit: Option<String>,
    /// 유량 표시 단위(L/min, gpm, m3/s)
    #[arg(long)]
    pub flow_unit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 입력/표시에 실제로 쓸 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub flow: FlowUnit,
}

impl InputArgs {
    /// 인자의 단위 문자열을 해석한다. 없으면 설정의 기본 단위를 쓴다.
    pub fn units(&self, cfg: &Config) -> Result<DisplayUnits, AppError> {
        let pressure = match &self.pressure_unit {
            Some(u) => conversion::parse_pressure_unit(u)?,
            None => cfg.units.pressure,
        };
        let temperature = match &self.temp_unit {
            Some(u) => conversion::parse_temperature_unit(u)?,
            None => cfg.units.temperature,
        };
        let flow = match &self.flow_unit {
            Some(u) => conversion::parse_flow_unit(u)?,
            None => cfg.units.flow,
        };
        Ok(DisplayUnits {
            pressure,
            temperature,
            flow,
        })
    }

    /// bar, °C 기준의 계산 입력으로 바꾼다.
    pub fn resolve(&self, cfg: &Config) -> Result<OperatingInputs, AppError> {
        let units = self.units(cfg)?;
        let base = &cfg.inputs;
        Ok(OperatingInputs {
            oil: self.oil.clone().unwrap_or_else(|| base.oil.clone()),
            temperature_c: self
                .temp
                .map(|t| conversion::temperature_to_celsius(t, units.temperature))
                .unwrap_or(base.temperature_c),
            pump_speed_rpm: self.speed.unwrap_or(base.pump_speed_rpm),
            charge_pressure_bar: self
                .charge
                .map(|p| conversion::pressure_to_bar(p, units.pressure))
                .unwrap_or(base.charge_pressure_bar),
            discharge_pressure_bar: self
                .discharge
                .map(|p| conversion::pressure_to_bar(p, units.pressure))
                .unwrap_or(base.discharge_pressure_bar),
        })
    }
}

fn pressure(bar: f64, units: &DisplayUnits) -> String {
    let v = convert_pressure(bar, PressureUnit::Bar, units.pressure);
    format!("{v:.2} {}", units.pressure.symbol())
}

fn temperature(c: f64, units: &DisplayUnits) -> String {
    let v = convert_temperature(c, TemperatureUnit::Celsius, units.temperature);
    format!("{v:.1} {}", units.temperature.symbol())
}

fn flow(m3_per_s: f64, units: &DisplayUnits) -> String {
    let v = convert_flow(m3_per_s, FlowUnit::CubicMeterPerSecond, units.flow);
    match units.flow {
        FlowUnit::CubicMeterPerSecond => format!("{v:.4e} {}", units.flow.symbol()),
        _ => format!("{v:.3} {}", units.flow.symbol()),
    }
}

fn pct(x: f64) -> String {
    format!("{:.2} %", x * 100.0)
}

fn heading<W: Write>(out: &mut W, tr: &Translator, key: &str) -> Result<(), AppError> {
    writeln!(out, "\n-- {} --", tr.t(key))?;
    Ok(())
}

fn row<W: Write>(out: &mut W, label: String, value: String) -> Result<(), AppError> {
    writeln!(out, "  {label:<28} {value}")?;
    Ok(())
}

/// 계산 결과를 사람이 읽는 형식으로 출력한다.
pub fn print_report<W: Write>(
    out: &mut W,
    tr: &Translator,
    r: &PerformanceResult,
    units: &DisplayUnits,
) -> Result<(), AppError> {
    writeln!(out, "=== {} ===", tr.t(keys::APP_TITLE))?;

    heading(out, tr, keys::SECTION_INPUTS)?;
    row(out, tr.t(keys::INPUT_OIL), r.inputs.oil.clone())?;
    row(out, tr.t(keys::INPUT_TEMPERATURE), temperature(r.inputs.temperature_c, units))?;
    row(out, tr.t(keys::INPUT_SPEED), format!("{:.1} rpm", r.inputs.pump_speed_rpm))?;
    row(out, tr.t(keys::INPUT_CHARGE), pressure(r.inputs.charge_pressure_bar, units))?;
    row(out, tr.t(keys::INPUT_DISCHARGE), pressure(r.inputs.discharge_pressure_bar, units))?;
    row(
        out,
        tr.t(keys::INPUT_DIFFERENTIAL),
        pressure(r.inputs.differential_pressure_bar(), units),
    )?;

    for (key, m) in [
        (keys::SECTION_PUMP, r.pump),
        (keys::SECTION_MOTOR, r.motor),
        (keys::SECTION_DELTA, r.delta()),
    ] {
        heading(out, tr, key)?;
        row(out, tr.t(keys::RESULT_SPEED), format!("{:.1} rpm", m.speed_rpm))?;
        row(out, tr.t(keys::RESULT_TORQUE), format!("{:.1} N·m", m.torque_nm))?;
        row(out, tr.t(keys::RESULT_POWER), format!("{:.2} kW", m.power_kw))?;
    }

    heading(out, tr, keys::SECTION_CHARGE_PUMP)?;
    row(out, tr.t(keys::RESULT_CONTINUOUS), flow(r.charge_pump.continuous, units))?;
    row(out, tr.t(keys::RESULT_CONTROL), flow(r.charge_pump.control, units))?;
    row(out, tr.t(keys::RESULT_TRANSIENT), flow(r.charge_pump.transient, units))?;

    heading(out, tr, keys::SECTION_EFFICIENCY)?;
    writeln!(
        out,
        "  {:<28} {:>10} {:>10} {:>10}",
        "",
        tr.t(keys::COLUMN_PUMP),
        tr.t(keys::COLUMN_MOTOR),
        tr.t(keys::COLUMN_HSU)
    )?;
    let e = &r.efficiencies;
    let rows: [(&str, [f64; 3]); 3] = [
        (
            keys::RESULT_VOLUMETRIC,
            [e.pump.volumetric, e.motor.volumetric, e.hsu.volumetric],
        ),
        (
            keys::RESULT_MECHANICAL,
            [e.pump.mechanical, e.motor.mechanical, e.hsu.mechanical],
        ),
        (
            keys::RESULT_TOTAL,
            [e.pump.total(), e.motor.total(), e.hsu.total()],
        ),
    ];
    for (key, [pump, motor, hsu]) in rows {
        writeln!(
            out,
            "  {:<28} {:>10} {:>10} {:>10}",
            tr.t(key),
            pct(pump),
            pct(motor),
            pct(hsu)
        )?;
    }

    heading(out, tr, keys::SECTION_LEAKAGE)?;
    row(out, tr.t(keys::RESULT_BLOCK), flow(r.leakage.block, units))?;
    row(out, tr.t(keys::RESULT_SHOES), flow(r.leakage.shoes, units))?;
    row(out, tr.t(keys::RESULT_PISTONS), flow(r.leakage.pistons, units))?;

    heading(out, tr, keys::SECTION_OIL)?;
    row(
        out,
        tr.t(keys::RESULT_VISCOSITY),
        format!(
            "{:.2} cSt / {:.2} cP",
            r.oil.kinematic_viscosity_cst, r.oil.dynamic_viscosity_cp
        ),
    )?;
    row(out, tr.t(keys::RESULT_DENSITY), format!("{:.1} kg/m³", r.oil.density_kg_m3))?;
    Ok(())
}

pub fn print_json<W: Write>(out: &mut W, r: &PerformanceResult) -> Result<(), AppError> {
    writeln!(out, "{}", serde_json::to_string_pretty(r)?)?;
    Ok(())
}

pub fn print_oils<W: Write>(
    out: &mut W,
    tr: &Translator,
    units: &DisplayUnits,
) -> Result<(), AppError> {
    heading(out, tr, keys::SECTION_OILS)?;
    for oil in oils() {
        let (lo, hi) = oil.temperature_range();
        writeln!(
            out,
            "  {:<12} {} {} ~ {}  ({})",
            oil.name,
            tr.t(keys::RESULT_RANGE),
            temperature(lo, units),
            temperature(hi, units),
            oil.notes
        )?;
    }
    Ok(())
}

pub fn print_sizes<W: Write>(
    out: &mut W,
    tr: &Translator,
    g: &PumpingGroup,
) -> Result<(), AppError> {
    heading(out, tr, keys::SECTION_SIZES)?;
    let mm = |m: f64| format!("{:.2} mm", m * 1e3);
    let rows = [
        (keys::SIZE_PISTON_DIAMETER, mm(g.piston_diameter_m)),
        (keys::SIZE_PISTON_AREA, format!("{:.2} cm²", g.piston_area_m2 * 1e4)),
        (keys::SIZE_PITCH_DIAMETER, mm(g.pitch_circle_diameter_m)),
        (keys::SIZE_STROKE, mm(g.stroke_m)),
        (keys::SIZE_MIN_ENGAGEMENT, mm(g.min_engagement_m)),
        (keys::SIZE_KIDNEY_WIDTH, mm(g.kidney_width_m)),
        (keys::SIZE_LAND_WIDTH, mm(g.land_width_m)),
        (keys::SIZE_OUTER_LAND_OUTER, mm(g.outer_land_outer_radius_m)),
        (keys::SIZE_OUTER_LAND_INNER, mm(g.outer_land_inner_radius_m)),
        (keys::SIZE_INNER_LAND_OUTER, mm(g.inner_land_outer_radius_m)),
        (keys::SIZE_INNER_LAND_INNER, mm(g.inner_land_inner_radius_m)),
        (keys::SIZE_SHOE_OUTER, mm(g.shoe_outer_radius_m)),
        (keys::SIZE_SHOE_INNER, mm(g.shoe_inner_radius_m)),
        (
            keys::SIZE_SWEPT_VOLUME,
            format!(
                "{:.1} cc ({} {MAX_DISPLACEMENT_CC} cc)",
                g.swept_volume_cc(PISTON_COUNT),
                tr.t(keys::SIZE_DESIGN)
            ),
        ),
    ];
    for (key, value) in rows {
        row(out, tr.t(key), value)?;
    }
    Ok(())
}

pub fn print_loads<W: Write>(
    out: &mut W,
    tr: &Translator,
    l: &StructuralLoads,
) -> Result<(), AppError> {
    heading(out, tr, keys::SECTION_LOADS)?;
    let kn = |v: f64| format!("{v:.2} kN");
    let rows = [
        (keys::LOAD_SHAFT_RADIAL, kn(l.shaft_radial_kn)),
        (keys::LOAD_SWASH_HP_AXIAL, kn(l.swash_hp_x_kn)),
        (keys::LOAD_SWASH_LP_AXIAL, kn(l.swash_lp_x_kn)),
        (keys::LOAD_SWASH_HP_NORMAL, kn(l.swash_hp_z_kn)),
        (keys::LOAD_SWASH_LP_NORMAL, kn(l.swash_lp_z_kn)),
        (keys::LOAD_MOTOR_HP, kn(l.motor_hp_kn)),
        (keys::LOAD_MOTOR_LP, kn(l.motor_lp_kn)),
        (keys::LOAD_SHAFT_TORQUE, format!("{:.1} N·m", l.shaft_torque_nm)),
    ];
    for (key, value) in rows {
        row(out, tr.t(key), value)?;
    }
    Ok(())
}
