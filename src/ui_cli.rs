use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::cycle::{DisplayInputs, RangeSpec};
use crate::i18n::{fill_template, keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunSimulation,
    Sweep,
    Settings,
    Exit,
}

/// 대화형 스윕 요청(MPa).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRequest {
    pub from_mpa: f64,
    pub to_mpa: f64,
    pub steps: usize,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RUN));
    println!("{}", tr.t(keys::MAIN_MENU_SWEEP));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::RunSimulation),
        "2" => Some(MenuChoice::Sweep),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 세 입력값을 묻는다. 빈 입력은 설정의 기본값을 쓴다.
pub fn read_cycle_inputs(tr: &Translator, cfg: &Config) -> Result<DisplayInputs, AppError> {
    println!("{}", tr.t(keys::SIM_HEADING));
    println!("{}", tr.t(keys::SIM_HINT_DEFAULTS));
    let d = cfg.defaults;
    let r = cfg.ranges;
    let boiler_pressure_mpa = read_f64_or(
        &range_prompt(
            tr.t(keys::PROMPT_BOILER_PRESSURE),
            &r.boiler_pressure_mpa,
            d.boiler_pressure_mpa,
        ),
        d.boiler_pressure_mpa,
        tr,
    )?;
    let condenser_pressure_kpa = read_f64_or(
        &range_prompt(
            tr.t(keys::PROMPT_CONDENSER_PRESSURE),
            &r.condenser_pressure_kpa,
            d.condenser_pressure_kpa,
        ),
        d.condenser_pressure_kpa,
        tr,
    )?;
    let boiler_temperature_c = read_f64_or(
        &range_prompt(
            tr.t(keys::PROMPT_BOILER_TEMPERATURE),
            &r.boiler_temperature_c,
            d.boiler_temperature_c,
        ),
        d.boiler_temperature_c,
        tr,
    )?;
    Ok(DisplayInputs {
        boiler_pressure_mpa,
        boiler_temperature_c,
        condenser_pressure_kpa,
    })
}

fn range_prompt(template: &str, range: &RangeSpec, default: f64) -> String {
    fill_template(
        template,
        &[
            ("min", range.min.to_string()),
            ("max", range.max.to_string()),
            ("default", default.to_string()),
        ],
    )
}

/// 스윕 범위를 묻는다.
pub fn read_sweep_request(tr: &Translator, cfg: &Config) -> Result<SweepRequest, AppError> {
    println!("{}", tr.t(keys::SWEEP_HEADING));
    let range = cfg.ranges.boiler_pressure_mpa;
    let from_mpa = read_f64_or(tr.t(keys::PROMPT_SWEEP_FROM), range.min, tr)?;
    let to_mpa = read_f64_or(tr.t(keys::PROMPT_SWEEP_TO), range.max, tr)?;
    let steps = loop {
        let s = read_line(tr.t(keys::PROMPT_SWEEP_STEPS))?;
        let s = s.trim();
        if s.is_empty() {
            break 10;
        }
        match s.parse::<usize>() {
            Ok(n) => break n,
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    };
    Ok(SweepRequest {
        from_mpa,
        to_mpa,
        steps,
    })
}

/// 설정 메뉴: 새 단위 프리셋을 묻는다. 변경이 없으면 `None`.
pub fn handle_settings(tr: &Translator, cfg: &Config) -> Result<Option<UnitSystem>, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(None);
    }
    match parse_unit_system(&sel) {
        Some(system) => {
            println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), system);
            Ok(Some(system))
        }
        None => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(None)
        }
    }
}

fn parse_unit_system(sel: &str) -> Option<UnitSystem> {
    match sel.trim() {
        "1" => Some(UnitSystem::SI),
        "2" => Some(UnitSystem::SIBar),
        "3" => Some(UnitSystem::Imperial),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64_or(prompt: &str, default: f64, tr: &Translator) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_number_or(&s, default) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn parse_number_or(s: &str, default: f64) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(default);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
