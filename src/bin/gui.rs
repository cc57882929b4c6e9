#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use hsu_performance::{
    app, config,
    hsu::{
        compute_loads, oils, HsuCalculator, HsuError, OperatingInputs, PerformanceResult,
        MAX_CHARGE_PRESSURE_BAR, MAX_DISCHARGE_PRESSURE_BAR, MAX_PUMP_SPEED_RPM,
        MIN_LOADED_DIFFERENTIAL_BAR, MIN_PUMP_SPEED_RPM,
    },
    i18n::{self, keys, Translator},
    ui_cli::DisplayUnits,
    units::{convert_flow, FlowUnit},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 680.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(%e, "config unavailable, using defaults");
        config::Config::default()
    });
    let lang = i18n::resolve_language(cli_lang.as_deref(), &app_cfg.language);

    eframe::run_native(
        "HSU Performance",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("font: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["hsu.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다. 프로젝트 assets, 그다음 OS 폰트 폴더 순.
/// 못 찾으면 egui 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    let mut candidates = Vec::new();
    if let Some(windir) = env::var_os("WINDIR") {
        let dir = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].map(|f| dir.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(std::path::PathBuf::from),
    );
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; using default font.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn metric_row(ui: &mut egui::Ui, label: String, value: String) {
    ui.label(label);
    ui.monospace(value);
    ui.end_row();
}

struct GuiApp {
    tr: Translator,
    units: DisplayUnits,
    calculator: HsuCalculator,
    inputs: OperatingInputs,
    result: Result<PerformanceResult, HsuError>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, lang: &str) -> Self {
        let calculator = HsuCalculator::default();
        let inputs = config.inputs.clone();
        let result = calculator.compute(&inputs);
        Self {
            tr: Translator::new_with_pack(lang, Path::new("locales")),
            units: app::default_units(&config),
            calculator,
            inputs,
            result,
            status: None,
        }
    }

    fn recompute(&mut self) {
        self.result = self.calculator.compute(&self.inputs);
        if let Err(e) = &self.result {
            info!(%e, "operating point rejected");
        }
    }

    fn flow(&self, m3_per_s: f64) -> String {
        let v = convert_flow(m3_per_s, FlowUnit::CubicMeterPerSecond, self.units.flow);
        format!("{v:.3} {}", self.units.flow.symbol())
    }

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::SECTION_INPUTS));
        ui.separator();
        let mut changed = false;

        egui::Grid::new("inputs_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::INPUT_OIL));
                egui::ComboBox::from_id_source("oil_combo")
                    .selected_text(self.inputs.oil.clone())
                    .show_ui(ui, |ui| {
                        for oil in oils() {
                            changed |= ui
                                .selectable_value(&mut self.inputs.oil, oil.name.to_string(), oil.name)
                                .on_hover_text(oil.notes)
                                .changed();
                        }
                    });
                ui.end_row();

                label_with_tip(ui, &tr.t(keys::INPUT_TEMPERATURE), &tr.t(keys::HELP_TEMPERATURE));
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut self.inputs.temperature_c)
                            .speed(0.5)
                            .clamp_range(0.0..=100.0)
                            .suffix(" °C"),
                    )
                    .changed();
                ui.end_row();

                ui.label(tr.t(keys::INPUT_SPEED));
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut self.inputs.pump_speed_rpm)
                            .speed(10.0)
                            .clamp_range(MIN_PUMP_SPEED_RPM..=MAX_PUMP_SPEED_RPM)
                            .suffix(" rpm"),
                    )
                    .changed();
                ui.end_row();

                label_with_tip(ui, &tr.t(keys::INPUT_CHARGE), &tr.t(keys::HELP_CHARGE));
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut self.inputs.charge_pressure_bar)
                            .speed(0.5)
                            .clamp_range(0.0..=MAX_CHARGE_PRESSURE_BAR)
                            .suffix(" bar"),
                    )
                    .changed();
                ui.end_row();

                // 저부하 구간(0 < Δp < 30 bar)은 모델 유효 범위 밖이다.
                let min_discharge = self.inputs.charge_pressure_bar + MIN_LOADED_DIFFERENTIAL_BAR;
                ui.label(tr.t(keys::INPUT_DISCHARGE));
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut self.inputs.discharge_pressure_bar)
                            .speed(5.0)
                            .clamp_range(min_discharge..=MAX_DISCHARGE_PRESSURE_BAR)
                            .suffix(" bar"),
                    )
                    .changed();
                ui.end_row();

                ui.label(tr.t(keys::INPUT_DIFFERENTIAL));
                ui.monospace(format!("{:.1} bar", self.inputs.differential_pressure_bar()));
                ui.end_row();
            });

        if changed {
            let min_discharge = self.inputs.charge_pressure_bar + MIN_LOADED_DIFFERENTIAL_BAR;
            if self.inputs.discharge_pressure_bar < min_discharge {
                self.inputs.discharge_pressure_bar = min_discharge;
            }
            self.status = None;
            self.recompute();
        }

        ui.add_space(12.0);
        if ui.button(tr.t(keys::ACTION_EXPORT)).clicked() {
            self.export();
        }
        if let Some(status) = &self.status {
            ui.add(egui::Label::new(status.as_str()).wrap(true));
        }
    }

    fn export(&mut self) {
        let Ok(result) = &self.result else {
            self.status = Some(self.tr.t(keys::STATUS_NO_RESULT));
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("hsu_result.toml")
            .save_file()
        else {
            return;
        };
        let written = toml::to_string_pretty(result)
            .map_err(|e| e.to_string())
            .and_then(|text| fs::write(&path, text).map_err(|e| e.to_string()));
        self.status = Some(match written {
            Ok(()) => {
                info!(path = %path.display(), "result exported");
                format!("{} {}", self.tr.t(keys::STATUS_EXPORTED), path.display())
            }
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn results_panel(&self, ui: &mut egui::Ui, r: &PerformanceResult) {
        let tr = &self.tr;
        ui.columns(3, |cols| {
            for (col, (key, m)) in cols.iter_mut().zip([
                (keys::SECTION_PUMP, r.pump),
                (keys::SECTION_MOTOR, r.motor),
                (keys::SECTION_DELTA, r.delta()),
            ]) {
                col.heading(tr.t(key));
                egui::Grid::new(key).num_columns(2).striped(true).show(col, |ui| {
                    metric_row(ui, tr.t(keys::RESULT_SPEED), format!("{:.1} rpm", m.speed_rpm));
                    metric_row(ui, tr.t(keys::RESULT_TORQUE), format!("{:.1} N·m", m.torque_nm));
                    metric_row(ui, tr.t(keys::RESULT_POWER), format!("{:.2} kW", m.power_kw));
                });
            }
        });

        ui.separator();
        ui.heading(tr.t(keys::SECTION_CHARGE_PUMP));
        egui::Grid::new("charge_grid").num_columns(2).show(ui, |ui| {
            metric_row(ui, tr.t(keys::RESULT_CONTINUOUS), self.flow(r.charge_pump.continuous));
            metric_row(ui, tr.t(keys::RESULT_CONTROL), self.flow(r.charge_pump.control));
            metric_row(ui, tr.t(keys::RESULT_TRANSIENT), self.flow(r.charge_pump.transient));
        });

        ui.separator();
        ui.collapsing(tr.t(keys::SECTION_EFFICIENCY), |ui| {
            heading_with_tip(ui, "η", &tr.t(keys::HELP_EFFICIENCY));
            egui::Grid::new("eff_grid").num_columns(4).striped(true).show(ui, |ui| {
                ui.label("");
                ui.label(tr.t(keys::COLUMN_PUMP));
                ui.label(tr.t(keys::COLUMN_MOTOR));
                ui.label(tr.t(keys::COLUMN_HSU));
                ui.end_row();
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
                    (keys::RESULT_TOTAL, [e.pump.total(), e.motor.total(), e.hsu.total()]),
                ];
                for (key, vals) in rows {
                    ui.label(tr.t(key));
                    for v in vals {
                        ui.monospace(format!("{:.2} %", v * 100.0));
                    }
                    ui.end_row();
                }
            });
        });

        ui.collapsing(tr.t(keys::SECTION_LEAKAGE), |ui| {
            egui::Grid::new("leak_grid").num_columns(2).show(ui, |ui| {
                metric_row(ui, tr.t(keys::RESULT_BLOCK), self.flow(r.leakage.block));
                metric_row(ui, tr.t(keys::RESULT_SHOES), self.flow(r.leakage.shoes));
                metric_row(ui, tr.t(keys::RESULT_PISTONS), self.flow(r.leakage.pistons));
            });
        });

        ui.collapsing(tr.t(keys::SECTION_OIL), |ui| {
            egui::Grid::new("oil_grid").num_columns(2).show(ui, |ui| {
                metric_row(
                    ui,
                    tr.t(keys::RESULT_VISCOSITY),
                    format!(
                        "{:.2} cSt / {:.2} cP",
                        r.oil.kinematic_viscosity_cst, r.oil.dynamic_viscosity_cp
                    ),
                );
                metric_row(ui, tr.t(keys::RESULT_DENSITY), format!("{:.1} kg/m³", r.oil.density_kg_m3));
            });
        });

        if let Ok(loads) = compute_loads(
            r.inputs.charge_pressure_bar,
            r.inputs.discharge_pressure_bar,
            r.pump_torque_nm(),
        ) {
            ui.collapsing(tr.t(keys::SECTION_LOADS), |ui| {
                egui::Grid::new("loads_grid").num_columns(2).show(ui, |ui| {
                    for (key, v) in [
                        (keys::LOAD_SHAFT_RADIAL, loads.shaft_radial_kn),
                        (keys::LOAD_SWASH_HP_AXIAL, loads.swash_hp_x_kn),
                        (keys::LOAD_SWASH_LP_AXIAL, loads.swash_lp_x_kn),
                        (keys::LOAD_SWASH_HP_NORMAL, loads.swash_hp_z_kn),
                        (keys::LOAD_SWASH_LP_NORMAL, loads.swash_lp_z_kn),
                        (keys::LOAD_MOTOR_HP, loads.motor_hp_kn),
                        (keys::LOAD_MOTOR_LP, loads.motor_lp_kn),
                    ] {
                        metric_row(ui, tr.t(key), format!("{v:.2} kN"));
                    }
                });
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                ui.label(self.tr.language_code());
            });
        });

        egui::SidePanel::left("inputs_panel")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| self.inputs_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &self.result {
                Ok(r) => self.results_panel(ui, r),
                Err(e) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(200, 60, 60),
                        format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                    );
                }
            });
        });
    }
}
