//! 계산 결과 표시(표, 선도, 내보내기). 단위 변환은 이 모듈 안에서만 한다.

pub mod diagram;
pub mod export;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::cycle::CycleResult;
use crate::units::{PressureUnit, SpecificEnthalpyUnit, SpecificEntropyUnit, TemperatureUnit};

pub use diagram::{Annotation, Diagram, DiagramKind};
pub use export::CycleReport;
pub use table::{StateRow, StateTable};

/// 결과 표시 단위 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub enthalpy: SpecificEnthalpyUnit,
    pub entropy: SpecificEntropyUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::MegaPascal,
            temperature: TemperatureUnit::Celsius,
            enthalpy: SpecificEnthalpyUnit::KjPerKg,
            entropy: SpecificEntropyUnit::KjPerKgK,
        }
    }
}

/// "Thermal Efficiency: 40.12 %" 형식의 한 줄 요약.
pub fn efficiency_line(label: &str, result: &CycleResult) -> String {
    format!("{label}: {:.2} %", result.thermal_efficiency_percent)
}
