use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, level_filters::LevelFilter};

use crate::config::{Config, UnitSystem};
use crate::cycle::{
    self, Advisory, CycleInputs, CycleResult, DisplayInputs, SolveError, SweepError, SweepPoint,
};
use crate::fluid::If97Lookup;
use crate::i18n::{self, Translator};
use crate::report::{self, CycleReport, Diagram, DisplayUnits, StateTable};
use crate::ui_cli::{self, MenuChoice};
use crate::units::{PressureUnit, UnitParseError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 사이클 계산 오류
    #[error("사이클 계산 오류: {0}")]
    Solve(#[from] SolveError),
    /// 스윕 범위 오류
    #[error("스윕 오류: {0}")]
    Sweep(#[from] SweepError),
    /// 단위 문자열 오류
    #[error("단위 오류: {0}")]
    UnitParse(#[from] UnitParseError),
    /// JSON 직렬화 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 번역된 접두어를 붙인 오류 문구. 화면 출력용.
    pub fn localized(&self, tr: &Translator) -> String {
        use crate::i18n::keys;
        let (key, detail) = match self {
            AppError::Io(e) => (keys::ERROR_IO, e.to_string()),
            AppError::Config(e) => (keys::ERROR_CONFIG, e.to_string()),
            AppError::Solve(e) => (keys::ERROR_SOLVE, e.to_string()),
            AppError::Sweep(e) => (keys::ERROR_SWEEP, e.to_string()),
            AppError::UnitParse(e) => (keys::ERROR_UNIT, e.to_string()),
            AppError::Json(e) => (keys::ERROR_JSON, e.to_string()),
        };
        format!("{}: {detail}", tr.t(key))
    }
}

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// 정렬된 텍스트 표
    #[default]
    Table,
    Csv,
    Json,
}

/// 한 번의 계산 결과와 입력 검토 경고.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub inputs: CycleInputs,
    pub result: CycleResult,
    pub advisories: Vec<Advisory>,
}

/// tracing 구독자를 설치한다. `-v` 횟수가 있으면 설정값보다 우선한다.
pub fn init_logging(verbosity: u8, configured: &str) {
    let level = match verbosity {
        0 => parse_level(configured),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // 이미 설치된 경우(테스트 등)는 무시한다.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_level(s: &str) -> LevelFilter {
    match s.trim().to_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

/// 화면 단위 입력으로 사이클을 계산하고 입력 검토 경고를 함께 돌려준다.
pub fn simulate(config: &Config, values: &DisplayInputs) -> Result<Simulation, AppError> {
    let lookup = If97Lookup::new();
    let inputs = CycleInputs::from_display(values, config.fluid.clone());
    let advisories = cycle::review(&inputs, &config.ranges, &lookup);
    let result = cycle::solve(&inputs, &lookup)?;
    info!(
        efficiency = result.thermal_efficiency_percent,
        "시뮬레이션 완료"
    );
    Ok(Simulation {
        inputs,
        result,
        advisories,
    })
}

/// 계산 결과를 요청한 형식의 문자열로 만든다.
pub fn render(
    sim: &Simulation,
    units: &DisplayUnits,
    precision: usize,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    let out = match format {
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", tr.t(i18n::keys::RESULT_HEADING).trim_start());
            out.push_str(&StateTable::new(&sim.result, units).render_text(precision));
            let _ = writeln!(
                out,
                "\n{}",
                report::efficiency_line(tr.t(i18n::keys::RESULT_EFFICIENCY), &sim.result)
            );
            for line in CycleReport::new(&sim.inputs, &sim.result, units).summary_lines() {
                let _ = writeln!(out, "{line}");
            }
            for advisory in &sim.advisories {
                let _ = writeln!(out, "{}: {advisory}", tr.t(i18n::keys::WARNING_PREFIX));
            }
            out
        }
        OutputFormat::Csv => StateTable::new(&sim.result, units).to_csv(precision),
        OutputFormat::Json => {
            let mut json = CycleReport::new(&sim.inputs, &sim.result, units).to_json()?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

/// T-s, h-s 선도 점 열을 `dir` 아래 CSV 파일로 쓴다.
pub fn write_diagrams(
    result: &CycleResult,
    units: &DisplayUnits,
    dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(2);
    for (name, diagram) in [
        ("ts_diagram.csv", Diagram::temperature_entropy(result, units)),
        ("hs_diagram.csv", Diagram::enthalpy_entropy(result, units)),
    ] {
        let path = dir.join(name);
        fs::write(&path, diagram.to_csv())?;
        info!(path = %path.display(), "선도 저장");
        written.push(path);
    }
    Ok(written)
}

/// 보일러 압력(MPa) 스윕을 계산한다. 나머지 입력은 `base` 를 따른다.
pub fn sweep(
    config: &Config,
    base: &DisplayInputs,
    from_mpa: f64,
    to_mpa: f64,
    steps: usize,
) -> Result<Vec<SweepPoint>, AppError> {
    let inputs = CycleInputs::from_display(base, config.fluid.clone());
    let points = cycle::boiler_pressure_sweep(
        &inputs,
        PressureUnit::MegaPascal.to_si(from_mpa),
        PressureUnit::MegaPascal.to_si(to_mpa),
        steps,
        &If97Lookup::new(),
    )?;
    Ok(points)
}

/// 스윕 결과를 문자열로 만든다. 실패한 점은 오류 문구를 남긴다.
pub fn render_sweep(
    points: &[SweepPoint],
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    let mut out = String::new();
    match format {
        OutputFormat::Table => {
            let _ = writeln!(out, "{}", tr.t(i18n::keys::SWEEP_TABLE_HEADER));
            for p in points {
                let mpa = PressureUnit::MegaPascal.from_si(p.boiler_pressure);
                match &p.outcome {
                    Ok(r) => {
                        let eff = r.thermal_efficiency_percent;
                        let _ = writeln!(out, "{mpa:>21.3}    {eff:>14.2}");
                    }
                    Err(e) => {
                        let _ = writeln!(
                            out,
                            "{mpa:>21.3}    {} ({e})",
                            tr.t(i18n::keys::SWEEP_POINT_FAILED)
                        );
                    }
                }
            }
        }
        OutputFormat::Csv => {
            let _ = writeln!(out, "boiler_pressure_mpa,thermal_efficiency_percent");
            for p in points {
                let mpa = PressureUnit::MegaPascal.from_si(p.boiler_pressure);
                let eff = p
                    .efficiency_percent()
                    .map(|e| format!("{e:.4}"))
                    .unwrap_or_default();
                let _ = writeln!(out, "{mpa},{eff}");
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(points)?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// 설정 메뉴에서 고른 프리셋을 반영하고 `path` 에 저장한다.
pub fn apply_settings(
    config: &mut Config,
    preset: Option<UnitSystem>,
    path: &Path,
) -> Result<(), AppError> {
    if let Some(system) = preset {
        config.apply_unit_preset(system);
        info!(?system, path = %path.display(), "단위 프리셋 변경");
    }
    config.save_to(path)?;
    Ok(())
}

/// CLI 애플리케이션의 대화형 메인 루프를 실행한다. 설정은 `config_path` 에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::RunSimulation => {
                let values = ui_cli::read_cycle_inputs(tr, config)?;
                match simulate(config, &values) {
                    Ok(sim) => {
                        let text = render(
                            &sim,
                            &config.display_units,
                            config.precision,
                            OutputFormat::Table,
                            tr,
                        )?;
                        print!("{text}");
                    }
                    // 계산 실패는 메뉴로 돌아가 다시 입력받는다.
                    Err(AppError::Solve(err)) => {
                        println!("{}: {err}", tr.t(i18n::keys::SIM_FAILED));
                    }
                    Err(other) => return Err(other),
                }
            }
            MenuChoice::Sweep => {
                let request = ui_cli::read_sweep_request(tr, config)?;
                match sweep(
                    config,
                    &config.defaults,
                    request.from_mpa,
                    request.to_mpa,
                    request.steps,
                ) {
                    Ok(points) => print!("{}", render_sweep(&points, OutputFormat::Table, tr)?),
                    Err(AppError::Sweep(err)) => {
                        println!("{}", AppError::Sweep(err).localized(tr));
                    }
                    Err(other) => return Err(other),
                }
            }
            MenuChoice::Settings => {
                let preset = ui_cli::handle_settings(tr, config)?;
                apply_settings(config, preset, config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_strings_map_to_filters() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level("nonsense"), LevelFilter::WARN);
    }

    #[test]
    fn table_output_contains_states_and_efficiency() {
        let config = Config::default();
        let sim = simulate(&config, &config.defaults).unwrap();
        let tr = Translator::new("en");
        let text = render(&sim, &DisplayUnits::default(), 3, OutputFormat::Table, &tr).unwrap();
        assert!(text.contains("1-Turbine Inlet"));
        assert!(text.contains("4-Pump Exit"));
        assert!(text.contains("Thermal Efficiency: "));
        assert!(sim.advisories.is_empty());
    }

    #[test]
    fn equal_pressures_surface_as_solve_error() {
        let config = Config::default();
        let values = DisplayInputs {
            boiler_pressure_mpa: 0.01,
            boiler_temperature_c: 500.0,
            condenser_pressure_kpa: 10.0,
        };
        assert!(matches!(
            simulate(&config, &values),
            Err(AppError::Solve(SolveError::DegenerateCycle(_)))
        ));
    }

    #[test]
    fn localized_errors_use_the_translated_prefix() {
        let err = AppError::Sweep(SweepError::TooFewSteps(1));
        let en = err.localized(&Translator::new("en"));
        assert!(en.starts_with("Sweep error: "), "{en}");
        assert!(!en.contains("스윕 오류"));
        let ko = err.localized(&Translator::new("ko"));
        assert!(ko.starts_with("스윕 오류: "), "{ko}");
    }

    #[test]
    fn settings_are_saved_to_the_given_path() {
        let path = std::env::temp_dir().join(format!(
            "rankine_app_settings_{}.toml",
            std::process::id()
        ));
        let mut config = Config::default();
        apply_settings(&mut config, Some(UnitSystem::Imperial), &path).unwrap();
        let saved = crate::config::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(saved.unit_system, UnitSystem::Imperial);
        assert_eq!(saved, config);
    }

    #[test]
    fn sweep_table_lists_every_step() {
        let config = Config::default();
        let points = sweep(&config, &config.defaults, 2.0, 10.0, 5).unwrap();
        let text = render_sweep(&points, OutputFormat::Csv, &Translator::new("en")).unwrap();
        assert_eq!(text.lines().count(), 6);
    }
}
