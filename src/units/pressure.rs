use serde::{Deserialize, Serialize};

use super::UnitParseError;

/// 압력 단위. 내부 기준은 항상 Pa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
}

const PA_PER_KPA: f64 = 1.0e3;
const PA_PER_MPA: f64 = 1.0e6;
const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;

impl PressureUnit {
    /// 이 단위의 값을 Pa 로 변환한다.
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            PressureUnit::Pascal => value,
            PressureUnit::KiloPascal => value * PA_PER_KPA,
            PressureUnit::MegaPascal => value * PA_PER_MPA,
            PressureUnit::Bar => value * PA_PER_BAR,
            PressureUnit::Psi => value * PA_PER_PSI,
        }
    }

    /// Pa 값을 이 단위로 변환한다.
    pub fn from_si(self, value_pa: f64) -> f64 {
        match self {
            PressureUnit::Pascal => value_pa,
            PressureUnit::KiloPascal => value_pa / PA_PER_KPA,
            PressureUnit::MegaPascal => value_pa / PA_PER_MPA,
            PressureUnit::Bar => value_pa / PA_PER_BAR,
            PressureUnit::Psi => value_pa / PA_PER_PSI,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
        }
    }

    /// 단위 문자열(`kPa`, `MPa`, `bar` 등)을 해석한다. 대소문자는 구분하지 않는다.
    pub fn parse(s: &str) -> Result<Self, UnitParseError> {
        match s.trim().to_lowercase().as_str() {
            "pa" => Ok(PressureUnit::Pascal),
            "kpa" => Ok(PressureUnit::KiloPascal),
            "mpa" => Ok(PressureUnit::MegaPascal),
            "bar" | "bara" => Ok(PressureUnit::Bar),
            "psi" | "psia" => Ok(PressureUnit::Psi),
            _ => Err(UnitParseError::Pressure(s.to_string())),
        }
    }
}
