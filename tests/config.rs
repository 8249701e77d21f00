//! 설정 파일 저장/로드 테스트.
use std::fs;
use std::path::PathBuf;

use rankine_cycle_simulator::config::{self, Config, ConfigError, UnitSystem};
use rankine_cycle_simulator::units::{PressureUnit, SpecificEnthalpyUnit, TemperatureUnit};

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rankine_cfg_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join("config.toml")
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);
    let cfg = config::load_or_default_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(config::load_from(&path).unwrap(), cfg);
}

#[test]
fn saved_settings_roundtrip() {
    let path = temp_path("roundtrip");
    let mut cfg = Config::default();
    cfg.apply_unit_preset(UnitSystem::Imperial);
    cfg.precision = 5;
    cfg.language = "ko-kr".into();
    cfg.defaults.boiler_pressure_mpa = 12.0;
    cfg.save_to(&path).unwrap();

    let loaded = config::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.display_units.pressure, PressureUnit::Psi);
    assert_eq!(loaded.display_units.temperature, TemperatureUnit::Fahrenheit);
}

#[test]
fn partial_file_fills_in_defaults() {
    let path = temp_path("partial");
    fs::write(&path, "precision = 1\nunit_system = \"SIBar\"\n").unwrap();
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.precision, 1);
    assert_eq!(cfg.unit_system, UnitSystem::SIBar);
    assert_eq!(cfg.display_units.enthalpy, SpecificEnthalpyUnit::KjPerKg);
    assert_eq!(cfg.ranges, Config::default().ranges);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = temp_path("malformed");
    fs::write(&path, "precision = \"three\"\n").unwrap();
    assert!(matches!(config::load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn unit_preset_rewrites_display_units() {
    let mut cfg = Config::default();
    cfg.apply_unit_preset(UnitSystem::SIBar);
    assert_eq!(cfg.display_units.pressure, PressureUnit::Bar);
    assert_eq!(cfg.display_units.temperature, TemperatureUnit::Celsius);
    cfg.apply_unit_preset(UnitSystem::SI);
    assert_eq!(cfg.display_units, UnitSystem::SI.display_units());
}
