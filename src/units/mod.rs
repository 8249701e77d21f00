//! 표시 단위 정의 및 변환 모듈 모음. 계산기는 SI 만 사용하고, 변환은 화면 출력에서만 한다.

pub mod pressure;
pub mod specific_enthalpy;
pub mod specific_entropy;
pub mod temperature;

use thiserror::Error;

pub use pressure::PressureUnit;
pub use specific_enthalpy::SpecificEnthalpyUnit;
pub use specific_entropy::SpecificEntropyUnit;
pub use temperature::TemperatureUnit;

/// 알 수 없는 단위 문자열.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("알 수 없는 압력 단위: {0}")]
    Pressure(String),
    #[error("알 수 없는 온도 단위: {0}")]
    Temperature(String),
    #[error("알 수 없는 비엔탈피 단위: {0}")]
    SpecificEnthalpy(String),
    #[error("알 수 없는 비엔트로피 단위: {0}")]
    SpecificEntropy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_units_share_pascal_base() {
        assert!((PressureUnit::MegaPascal.to_si(8.0) - 8.0e6).abs() < 1e-6);
        assert!((PressureUnit::KiloPascal.from_si(10.0e3) - 10.0).abs() < 1e-12);
        assert!((PressureUnit::Bar.from_si(PressureUnit::Psi.to_si(14.5038)) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn temperature_offsets_and_scales() {
        assert!((TemperatureUnit::Celsius.to_si(500.0) - 773.15).abs() < 1e-9);
        assert!((TemperatureUnit::Fahrenheit.from_si(373.15) - 212.0).abs() < 1e-9);
        assert!((TemperatureUnit::Rankine.from_si(300.0) - 540.0).abs() < 1e-9);
    }

    #[test]
    fn enthalpy_and_entropy_scale_to_kilo() {
        assert!((SpecificEnthalpyUnit::KjPerKg.from_si(3_398_300.0) - 3398.3).abs() < 1e-9);
        assert!((SpecificEntropyUnit::KjPerKgK.from_si(6_724.0) - 6.724).abs() < 1e-12);
        assert!((SpecificEntropyUnit::BtuPerPoundR.to_si(1.0) - 4186.8).abs() < 1e-9);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(PressureUnit::parse("MPa").unwrap(), PressureUnit::MegaPascal);
        assert_eq!(TemperatureUnit::parse("°C").unwrap(), TemperatureUnit::Celsius);
        assert_eq!(
            SpecificEnthalpyUnit::parse("kJ/kg").unwrap(),
            SpecificEnthalpyUnit::KjPerKg
        );
        assert_eq!(
            SpecificEntropyUnit::parse("kJ/(kg·K)").unwrap(),
            SpecificEntropyUnit::KjPerKgK
        );
        assert_eq!(
            PressureUnit::parse("atm").unwrap_err(),
            UnitParseError::Pressure("atm".into())
        );
    }
}
