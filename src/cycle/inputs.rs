use serde::{Deserialize, Serialize};

use crate::fluid::FluidId;
use crate::units::{PressureUnit, TemperatureUnit};

/// 한 번의 계산 요청에 쓰이는 입력값(SI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleInputs {
    /// 보일러 압력(Pa)
    pub boiler_pressure: f64,
    /// 보일러 출구(터빈 입구) 온도(K)
    pub boiler_temperature: f64,
    /// 복수기 압력(Pa)
    pub condenser_pressure: f64,
    /// 작동 유체
    pub fluid: FluidId,
}

impl CycleInputs {
    /// 작동 유체를 물로 고정한 입력을 만든다.
    pub fn water(boiler_pressure: f64, boiler_temperature: f64, condenser_pressure: f64) -> Self {
        Self {
            boiler_pressure,
            boiler_temperature,
            condenser_pressure,
            fluid: FluidId::water(),
        }
    }

    /// 화면 입력 단위(MPa, °C, kPa)를 SI 로 환산해 입력을 만든다.
    pub fn from_display(values: &DisplayInputs, fluid: FluidId) -> Self {
        Self {
            boiler_pressure: PressureUnit::MegaPascal.to_si(values.boiler_pressure_mpa),
            boiler_temperature: TemperatureUnit::Celsius.to_si(values.boiler_temperature_c),
            condenser_pressure: PressureUnit::KiloPascal.to_si(values.condenser_pressure_kpa),
            fluid,
        }
    }

    /// 같은 입력에서 보일러 압력만 바꾼 사본.
    pub fn with_boiler_pressure(&self, boiler_pressure: f64) -> Self {
        Self {
            boiler_pressure,
            ..self.clone()
        }
    }

    pub fn to_display(&self) -> DisplayInputs {
        DisplayInputs {
            boiler_pressure_mpa: PressureUnit::MegaPascal.from_si(self.boiler_pressure),
            boiler_temperature_c: TemperatureUnit::Celsius.from_si(self.boiler_temperature),
            condenser_pressure_kpa: PressureUnit::KiloPascal.from_si(self.condenser_pressure),
        }
    }
}

/// 사용자 입력 화면 단위의 값 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayInputs {
    pub boiler_pressure_mpa: f64,
    pub boiler_temperature_c: f64,
    pub condenser_pressure_kpa: f64,
}

impl Default for DisplayInputs {
    fn default() -> Self {
        Self {
            boiler_pressure_mpa: 8.0,
            boiler_temperature_c: 500.0,
            condenser_pressure_kpa: 10.0,
        }
    }
}

/// 슬라이더 한 개의 권장 범위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RangeSpec {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// 입력 권장 범위. 계산기 자체의 검증이 아니라 화면용 안내 범위이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRanges {
    /// 보일러 압력 [MPa]
    pub boiler_pressure_mpa: RangeSpec,
    /// 복수기 압력 [kPa]
    pub condenser_pressure_kpa: RangeSpec,
    /// 보일러 온도 [°C]
    pub boiler_temperature_c: RangeSpec,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            boiler_pressure_mpa: RangeSpec {
                min: 1.0,
                max: 25.0,
                step: 0.5,
            },
            condenser_pressure_kpa: RangeSpec {
                min: 5.0,
                max: 50.0,
                step: 1.0,
            },
            boiler_temperature_c: RangeSpec {
                min: 300.0,
                max: 600.0,
                step: 10.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_inputs_convert_to_si() {
        let inputs = CycleInputs::from_display(&DisplayInputs::default(), FluidId::water());
        assert!((inputs.boiler_pressure - 8.0e6).abs() < 1e-6);
        assert!((inputs.boiler_temperature - 773.15).abs() < 1e-9);
        assert!((inputs.condenser_pressure - 10.0e3).abs() < 1e-9);
        let back = inputs.to_display();
        assert!((back.boiler_temperature_c - 500.0).abs() < 1e-9);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ranges = InputRanges::default();
        assert!(ranges.boiler_pressure_mpa.contains(25.0));
        assert!(ranges.condenser_pressure_kpa.contains(5.0));
        assert!(!ranges.boiler_temperature_c.contains(610.0));
    }
}
