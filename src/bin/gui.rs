#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use image::GenericImageView;
use rankine_cycle_simulator::{
    app::{self, Simulation},
    config,
    cycle::{DisplayInputs, RangeSpec},
    i18n,
    report::{self, CycleReport, Diagram, StateTable},
};
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing::{info, warn};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    app::init_logging(0, &app_cfg.log_level);
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Rankine Cycle Thermodynamic Simulator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
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

/// 한글 표시용 폰트를 찾아 적용한다.
/// 1) assets/fonts/ 2) Windows 시스템 폰트 3) 리눅스/맥 CJK 폰트 순으로 찾고,
/// 모두 실패하면 기본 폰트를 유지한 채 Err 를 돌려준다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.extend([
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".into(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".into(),
    ]);

    let p = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found; using the default font.".to_string())?;
    let bytes =
        fs::read(p).map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    info!(path = %p.display(), "폰트 적용");
    Ok(())
}

fn fill_slider(ui: &mut egui::Ui, label: String, value: &mut f64, range: &RangeSpec) {
    ui.label(label);
    ui.add(
        egui::Slider::new(value, range.min..=range.max)
            .step_by(range.step)
            .clamp_to_range(true),
    );
    ui.add_space(6.0);
}

/// 마지막 실행 상태.
enum Outcome {
    /// 아직 실행 전
    Ready,
    Solved(Box<Simulation>),
    /// 실패 시 결과는 비우고 메시지만 남긴다.
    Failed(String),
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    inputs: DisplayInputs,
    outcome: Outcome,
    export_status: Option<String>,
    show_settings_modal: bool,
    lang_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
        Self {
            inputs: config.defaults,
            lang_input: config.language.clone(),
            config,
            tr,
            outcome: Outcome::Ready,
            export_status: None,
            show_settings_modal: false,
            settings_status: None,
        }
    }

    fn run_simulation(&mut self) {
        self.export_status = None;
        self.outcome = match app::simulate(&self.config, &self.inputs) {
            Ok(sim) => Outcome::Solved(Box::new(sim)),
            Err(e) => {
                warn!(error = %e, "시뮬레이션 실패");
                Outcome::Failed(e.localized(&self.tr))
            }
        };
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let ranges = self.config.ranges;

        ui.heading(txt("gui.inputs.heading", "Cycle Parameters"));
        ui.separator();
        fill_slider(
            ui,
            txt("gui.inputs.boiler_pressure", "Boiler Pressure (MPa)"),
            &mut self.inputs.boiler_pressure_mpa,
            &ranges.boiler_pressure_mpa,
        );
        fill_slider(
            ui,
            txt("gui.inputs.condenser_pressure", "Condenser Pressure (kPa)"),
            &mut self.inputs.condenser_pressure_kpa,
            &ranges.condenser_pressure_kpa,
        );
        fill_slider(
            ui,
            txt("gui.inputs.boiler_temperature", "Boiler Temperature (°C)"),
            &mut self.inputs.boiler_temperature_c,
            &ranges.boiler_temperature_c,
        );
        ui.separator();
        if ui
            .add_sized(
                [ui.available_width(), 32.0],
                egui::Button::new(txt("gui.run.button", "Run Simulation")),
            )
            .clicked()
        {
            self.run_simulation();
        }
        if ui.small_button(txt("gui.inputs.reset", "Reset to defaults")).clicked() {
            self.inputs = self.config.defaults;
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let units = self.config.display_units;
        let precision = self.config.precision;

        let sim = match &self.outcome {
            Outcome::Ready => {
                ui.label(txt("gui.run.ready", "Set values and run the simulation."));
                return;
            }
            Outcome::Failed(msg) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {msg}", txt("gui.run.error", "Error during simulation")),
                );
                return;
            }
            Outcome::Solved(sim) => sim,
        };

        ui.heading(txt("gui.result.heading", "Cycle State Data"));
        let table = StateTable::new(&sim.result, &units);
        egui::Grid::new("state_table")
            .striped(true)
            .num_columns(5)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for h in table.headers() {
                    ui.strong(h);
                }
                ui.end_row();
                for row in &table.rows {
                    ui.label(row.label.to_string());
                    for v in [row.pressure, row.temperature, row.enthalpy, row.entropy] {
                        ui.monospace(format!("{v:.precision$}"));
                    }
                    ui.end_row();
                }
            });
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(report::efficiency_line(
                &txt("gui.result.efficiency", "Thermal Efficiency"),
                &sim.result,
            ))
            .strong()
            .size(16.0),
        );

        let cycle_report = CycleReport::new(&sim.inputs, &sim.result, &units);
        egui::CollapsingHeader::new(txt("gui.result.summary", "Work and heat"))
            .default_open(false)
            .show(ui, |ui| {
                for line in cycle_report.summary_lines() {
                    ui.monospace(line);
                }
            });

        if !sim.advisories.is_empty() {
            ui.label(egui::RichText::new(txt("gui.result.advisories", "Warnings")).strong());
            for advisory in &sim.advisories {
                ui.colored_label(egui::Color32::from_rgb(200, 140, 0), advisory.to_string());
            }
        }

        ui.horizontal(|ui| {
            if ui.button(txt("gui.result.export_csv", "Export table (CSV)")).clicked() {
                let csv = table.to_csv(precision);
                let status = save_with_dialog("rankine_states.csv", "CSV", "csv", &csv);
                self.export_status = status.map(|r| export_message(&txt, r));
            }
            if ui.button(txt("gui.result.export_json", "Export report (JSON)")).clicked() {
                let status = match cycle_report.to_json() {
                    Ok(json) => save_with_dialog("rankine_report.json", "JSON", "json", &json),
                    Err(e) => Some(Err(e.to_string())),
                };
                self.export_status = status.map(|r| export_message(&txt, r));
            }
        });
        if let Some(msg) = &self.export_status {
            ui.small(msg);
        }

        ui.separator();
        let ts = Diagram::temperature_entropy(&sim.result, &units);
        let hs = Diagram::enthalpy_entropy(&sim.result, &units);
        ui.columns(2, |cols| {
            diagram_plot(&mut cols[0], "ts_plot", &txt("gui.plot.ts", &ts.title), &ts);
            diagram_plot(&mut cols[1], "hs_plot", &txt("gui.plot.hs", &hs.title), &hs);
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);
        let mut open = self.show_settings_modal;
        let mut new_unit_system = self.config.unit_system;
        let mut save_clicked = false;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                ui.horizontal(|ui| {
                    for (label, us) in [
                        ("SI(MPa)", config::UnitSystem::SI),
                        ("SI(bar)", config::UnitSystem::SIBar),
                        ("Imperial", config::UnitSystem::Imperial),
                    ] {
                        ui.selectable_value(&mut new_unit_system, us, label);
                    }
                });
                ui.separator();
                ui.label(txt("gui.settings.precision", "Table precision"));
                ui.add(egui::Slider::new(&mut self.config.precision, 0..=6));
                ui.separator();
                ui.label(txt("gui.settings.lang", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            txt("gui.settings.lang.auto", "System"),
                        );
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;

        if new_unit_system != self.config.unit_system {
            self.config.apply_unit_preset(new_unit_system);
        }
        if save_clicked {
            self.config.language = self.lang_input.clone();
            let resolved = i18n::resolve_language(&self.config.language, None);
            let pack_dir = self.config.language_pack_dir.as_deref();
            self.tr = i18n::Translator::new_with_pack(&resolved, pack_dir);
            self.settings_status = Some(match self.config.save() {
                Ok(()) => self.tr.text("gui.settings.saved", "Saved."),
                Err(e) => format!("Save error: {e}"),
            });
        }
    }
}

/// 선도 하나를 선 + 상태점 + 라벨로 그린다.
fn diagram_plot(ui: &mut egui::Ui, id: &str, title: &str, diagram: &Diagram) {
    ui.strong(title);
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(diagram.x_label.clone())
        .y_axis_label(diagram.y_label.clone())
        .height(300.0)
        .show(ui, |plot_ui| {
            let line_points: PlotPoints = diagram.points.clone().into();
            plot_ui.line(Line::new(line_points).name("Rankine cycle").width(2.0));
            let markers: PlotPoints = diagram
                .annotations
                .iter()
                .map(|a| a.position)
                .collect::<Vec<_>>()
                .into();
            plot_ui.points(Points::new(markers).radius(4.0).color(egui::Color32::RED));
            for a in &diagram.annotations {
                plot_ui.text(
                    Text::new(PlotPoint::new(a.position[0], a.position[1]), a.text.clone())
                        .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        });
}

/// 저장 대화상자를 띄워 내용을 쓴다. 취소하면 None.
fn save_with_dialog(
    default_name: &str,
    filter_name: &str,
    ext: &str,
    contents: &str,
) -> Option<Result<String, String>> {
    let path = FileDialog::new()
        .add_filter(filter_name, &[ext])
        .set_file_name(default_name)
        .save_file()?;
    Some(
        fs::write(&path, contents)
            .map(|_| {
                info!(path = %path.display(), "내보내기 완료");
                path.display().to_string()
            })
            .map_err(|e| e.to_string()),
    )
}

fn export_message(txt: &impl Fn(&str, &str) -> String, result: Result<String, String>) -> String {
    match result {
        Ok(path) => i18n::fill_template(
            &txt("gui.result.export_done", "Saved to {path}"),
            &[("path", path)],
        ),
        Err(error) => i18n::fill_template(
            &txt("gui.result.export_failed", "Export failed: {error}"),
            &[("error", error)],
        ),
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.text(key, default);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Rankine Cycle Thermodynamic Simulator"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(220.0)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.ui_inputs(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_results(ui));
        });
    }
}
