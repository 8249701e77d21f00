use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::cycle::{DisplayInputs, InputRanges};
use crate::fluid::FluidId;
use crate::report::DisplayUnits;
use crate::units::*;

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 표시 단위 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// MPa, °C, kJ/kg, kJ/(kg·K). 기본값.
    SI,
    /// bar, °C, kJ/kg, kJ/(kg·K)
    SIBar,
    /// psi, °F, Btu/lb, Btu/(lb·°R)
    Imperial,
}

impl UnitSystem {
    pub fn display_units(self) -> DisplayUnits {
        match self {
            UnitSystem::SI => DisplayUnits::default(),
            UnitSystem::SIBar => DisplayUnits {
                pressure: PressureUnit::Bar,
                ..DisplayUnits::default()
            },
            UnitSystem::Imperial => DisplayUnits {
                pressure: PressureUnit::Psi,
                temperature: TemperatureUnit::Fahrenheit,
                enthalpy: SpecificEnthalpyUnit::BtuPerPound,
                entropy: SpecificEntropyUnit::BtuPerPoundR,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en-us/ko-kr)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub unit_system: UnitSystem,
    /// 표 소수점 자릿수
    pub precision: usize,
    /// 로그 레벨(error/warn/info/debug/trace)
    pub log_level: String,
    pub fluid: FluidId,
    pub display_units: DisplayUnits,
    /// 시작 시 입력값(MPa, °C, kPa)
    pub defaults: DisplayInputs,
    /// 권장 입력 범위
    pub ranges: InputRanges,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            unit_system: UnitSystem::SI,
            precision: 3,
            log_level: "warn".into(),
            fluid: FluidId::water(),
            display_units: DisplayUnits::default(),
            defaults: DisplayInputs::default(),
            ranges: InputRanges::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let cfg = load_from(path)?;
        debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

/// 파일이 반드시 있어야 하는 로드.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 프리셋을 바꾸고 표시 단위를 함께 갱신한다.
    pub fn apply_unit_preset(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.display_units = system.display_units();
    }
}
