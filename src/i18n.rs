use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RUN: &str = "main_menu.run";
    pub const MAIN_MENU_SWEEP: &str = "main_menu.sweep";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_IO: &str = "error.io";
    pub const ERROR_CONFIG: &str = "error.config";
    pub const ERROR_SOLVE: &str = "error.solve";
    pub const ERROR_SWEEP: &str = "error.sweep";
    pub const ERROR_UNIT: &str = "error.unit";
    pub const ERROR_JSON: &str = "error.json";

    pub const SIM_HEADING: &str = "simulation.heading";
    pub const SIM_HINT_DEFAULTS: &str = "simulation.hint_defaults";
    pub const PROMPT_BOILER_PRESSURE: &str = "prompt.boiler_pressure";
    pub const PROMPT_CONDENSER_PRESSURE: &str = "prompt.condenser_pressure";
    pub const PROMPT_BOILER_TEMPERATURE: &str = "prompt.boiler_temperature";
    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const SIM_FAILED: &str = "simulation.failed";

    pub const SWEEP_HEADING: &str = "sweep.heading";
    pub const PROMPT_SWEEP_FROM: &str = "prompt.sweep_from";
    pub const PROMPT_SWEEP_TO: &str = "prompt.sweep_to";
    pub const PROMPT_SWEEP_STEPS: &str = "prompt.sweep_steps";
    pub const SWEEP_TABLE_HEADER: &str = "sweep.table_header";
    pub const SWEEP_POINT_FAILED: &str = "sweep.point_failed";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다.
    /// 알 수 없는 코드는 en 으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        debug!(
            lang = lang_code,
            entries = overrides.as_ref().map_or(0, HashMap::len),
            "언어팩 로드"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 키를 조회하고 없으면 `default` 를 돌려준다.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고,
    /// 한국어 번역이 없으면 영어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// `{name}` 자리표시자를 값으로 채운다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다.
/// 형식: key = "value" 또는 [섹션] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "주의",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 랭킨 사이클 열역학 시뮬레이터 ===",
        MAIN_MENU_RUN => "1) 시뮬레이션 실행",
        MAIN_MENU_SWEEP => "2) 보일러 압력 스윕",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_IO => "입출력 오류",
        ERROR_CONFIG => "설정 오류",
        ERROR_SOLVE => "사이클 계산 오류",
        ERROR_SWEEP => "스윕 오류",
        ERROR_UNIT => "단위 오류",
        ERROR_JSON => "JSON 오류",
        SIM_HEADING => "\n-- 사이클 조건 입력 --",
        SIM_HINT_DEFAULTS => "엔터만 누르면 괄호 안의 기본값을 사용합니다.",
        PROMPT_BOILER_PRESSURE => {
            "보일러 압력 [MPa] (권장 {min}~{max}, 기본 {default}): "
        }
        PROMPT_CONDENSER_PRESSURE => {
            "복수기 압력 [kPa] (권장 {min}~{max}, 기본 {default}): "
        }
        PROMPT_BOILER_TEMPERATURE => "보일러 온도 [°C] (권장 {min}~{max}, 기본 {default}): ",
        RESULT_HEADING => "\n사이클 상태 데이터",
        RESULT_EFFICIENCY => "열효율",
        SIM_FAILED => "시뮬레이션 중 오류",
        SWEEP_HEADING => "\n-- 보일러 압력 스윕 --",
        PROMPT_SWEEP_FROM => "시작 보일러 압력 [MPa]: ",
        PROMPT_SWEEP_TO => "끝 보일러 압력 [MPa]: ",
        PROMPT_SWEEP_STEPS => "단계 수: ",
        SWEEP_TABLE_HEADER => "보일러 압력 [MPa]    열효율 [%]",
        SWEEP_POINT_FAILED => "실패",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) SI(MPa)  2) SI(bar)  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Rankine Cycle Thermodynamic Simulator ===",
        MAIN_MENU_RUN => "1) Run simulation",
        MAIN_MENU_SWEEP => "2) Boiler pressure sweep",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_IO => "I/O error",
        ERROR_CONFIG => "Configuration error",
        ERROR_SOLVE => "Cycle calculation error",
        ERROR_SWEEP => "Sweep error",
        ERROR_UNIT => "Unit error",
        ERROR_JSON => "JSON error",
        SIM_HEADING => "\n-- Enter Cycle Parameters --",
        SIM_HINT_DEFAULTS => "Press enter to keep the default shown in brackets.",
        PROMPT_BOILER_PRESSURE => {
            "Boiler pressure [MPa] (recommended {min}-{max}, default {default}): "
        }
        PROMPT_CONDENSER_PRESSURE => {
            "Condenser pressure [kPa] (recommended {min}-{max}, default {default}): "
        }
        PROMPT_BOILER_TEMPERATURE => {
            "Boiler temperature [°C] (recommended {min}-{max}, default {default}): "
        }
        RESULT_HEADING => "\nCycle State Data",
        RESULT_EFFICIENCY => "Thermal Efficiency",
        SIM_FAILED => "Error during simulation",
        SWEEP_HEADING => "\n-- Boiler Pressure Sweep --",
        PROMPT_SWEEP_FROM => "Start boiler pressure [MPa]: ",
        PROMPT_SWEEP_TO => "End boiler pressure [MPa]: ",
        PROMPT_SWEEP_STEPS => "Number of steps: ",
        SWEEP_TABLE_HEADER => "Boiler pressure [MPa]    Efficiency [%]",
        SWEEP_POINT_FAILED => "failed",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) SI(MPa)  2) SI(bar)  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        _ => "[missing translation]",
    }
}
