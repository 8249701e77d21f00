use serde::{Deserialize, Serialize};

use super::UnitParseError;

/// 온도 단위를 정의한다. 내부 기준은 K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 주어진 값을 켈빈으로 변환한다.
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
            TemperatureUnit::Rankine => value * 5.0 / 9.0,
        }
    }

    /// 켈빈 값을 이 단위로 변환한다.
    pub fn from_si(self, value_k: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value_k,
            TemperatureUnit::Celsius => value_k - 273.15,
            TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
            TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnitParseError> {
        match s.trim().trim_start_matches('°').to_lowercase().as_str() {
            "k" => Ok(TemperatureUnit::Kelvin),
            "c" => Ok(TemperatureUnit::Celsius),
            "f" => Ok(TemperatureUnit::Fahrenheit),
            "r" => Ok(TemperatureUnit::Rankine),
            _ => Err(UnitParseError::Temperature(s.to_string())),
        }
    }
}
