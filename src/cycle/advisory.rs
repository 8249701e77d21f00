//! 계산을 막지 않는 입력 경고.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::inputs::{CycleInputs, InputRanges, RangeSpec};
use crate::fluid::PropertyLookup;
use crate::units::TemperatureUnit;

/// 입력 검토 결과 경고.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Advisory {
    /// 권장 범위 밖의 입력 (화면 단위 값)
    OutsideRecommendedRange {
        input: InputField,
        value: f64,
        min: f64,
        max: f64,
    },
    /// 보일러 온도가 포화 온도 이하라 터빈 입구가 과열 증기가 아님 (°C)
    NotSuperheated {
        boiler_temperature_c: f64,
        saturation_temperature_c: f64,
    },
    /// 보일러 압력이 임계압 이상 (MPa)
    Supercritical { boiler_pressure_mpa: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputField {
    BoilerPressure,
    CondenserPressure,
    BoilerTemperature,
}

impl InputField {
    fn unit(self) -> &'static str {
        match self {
            InputField::BoilerPressure => "MPa",
            InputField::CondenserPressure => "kPa",
            InputField::BoilerTemperature => "°C",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutsideRecommendedRange {
                input,
                value,
                min,
                max,
            } => {
                let unit = input.unit();
                write!(
                    f,
                    "{input:?} = {value} {unit} 은(는) 권장 범위 {min}~{max} {unit} 밖입니다"
                )
            }
            Advisory::NotSuperheated {
                boiler_temperature_c,
                saturation_temperature_c,
            } => write!(
                f,
                "보일러 온도 {boiler_temperature_c:.1} °C 가 포화 온도 \
                 {saturation_temperature_c:.1} °C 이하입니다 (과열 증기 아님)"
            ),
            Advisory::Supercritical { boiler_pressure_mpa } => write!(
                f,
                "보일러 압력 {boiler_pressure_mpa:.2} MPa 는 임계압 이상입니다 (초임계 조건)"
            ),
        }
    }
}

/// 입력을 권장 범위와 과열 조건에 비추어 검토한다.
///
/// 임계압은 조회기가 알려주는 값을 쓴다. 포화 온도 조회가 실패하면 해당 항목만 건너뛴다.
pub fn review<L>(inputs: &CycleInputs, ranges: &InputRanges, lookup: &L) -> Vec<Advisory>
where
    L: PropertyLookup + ?Sized,
{
    let shown = inputs.to_display();
    let mut advisories = Vec::new();
    let mut check = |input, value, range: &RangeSpec| {
        if !range.contains(value) {
            advisories.push(Advisory::OutsideRecommendedRange {
                input,
                value,
                min: range.min,
                max: range.max,
            });
        }
    };
    check(
        InputField::BoilerPressure,
        shown.boiler_pressure_mpa,
        &ranges.boiler_pressure_mpa,
    );
    check(
        InputField::CondenserPressure,
        shown.condenser_pressure_kpa,
        &ranges.condenser_pressure_kpa,
    );
    check(
        InputField::BoilerTemperature,
        shown.boiler_temperature_c,
        &ranges.boiler_temperature_c,
    );

    let supercritical = lookup
        .critical_pressure(&inputs.fluid)
        .is_some_and(|p_crit| inputs.boiler_pressure >= p_crit);
    if supercritical {
        advisories.push(Advisory::Supercritical {
            boiler_pressure_mpa: shown.boiler_pressure_mpa,
        });
    } else if let Ok(t_sat) = lookup.saturation_temperature(inputs.boiler_pressure, &inputs.fluid)
    {
        if inputs.boiler_temperature <= t_sat {
            advisories.push(Advisory::NotSuperheated {
                boiler_temperature_c: shown.boiler_temperature_c,
                saturation_temperature_c: TemperatureUnit::Celsius.from_si(t_sat),
            });
        }
    }

    for advisory in &advisories {
        warn!(%advisory, "입력 경고");
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::{FluidId, If97Lookup, KnownProperty, PropertyError, PropertyKind};

    /// 포화 온도는 항상 500 K, 임계압은 5 MPa 라고 답하는 조회기.
    struct FixedSaturation;

    impl PropertyLookup for FixedSaturation {
        fn query(
            &self,
            output: PropertyKind,
            _first: KnownProperty,
            second: KnownProperty,
            _fluid: &FluidId,
        ) -> Result<f64, PropertyError> {
            match (output, second.kind) {
                (PropertyKind::Temperature, PropertyKind::VaporQuality) => Ok(500.0),
                _ => Err(PropertyError::UnsupportedPair {
                    first: output,
                    second: second.kind,
                }),
            }
        }

        fn critical_pressure(&self, _fluid: &FluidId) -> Option<f64> {
            Some(5.0e6)
        }
    }

    #[test]
    fn recommended_inputs_produce_no_advisories() {
        let inputs = CycleInputs::water(8.0e6, 773.15, 10.0e3);
        assert!(review(&inputs, &InputRanges::default(), &If97Lookup).is_empty());
    }

    #[test]
    fn saturated_boiler_temperature_is_flagged() {
        // 8 MPa 포화 온도는 약 295 °C
        let inputs = CycleInputs::water(8.0e6, 273.15 + 250.0, 10.0e3);
        let advisories = review(&inputs, &InputRanges::default(), &If97Lookup);
        assert!(advisories
            .iter()
            .any(|a| matches!(a, Advisory::NotSuperheated { .. })));
        assert!(advisories.iter().any(|a| matches!(
            a,
            Advisory::OutsideRecommendedRange {
                input: InputField::BoilerTemperature,
                ..
            }
        )));
    }

    #[test]
    fn supercritical_pressure_skips_saturation_check() {
        let inputs = CycleInputs::water(24.0e6, 873.15, 10.0e3);
        let advisories = review(&inputs, &InputRanges::default(), &If97Lookup);
        assert_eq!(
            advisories,
            vec![Advisory::Supercritical {
                boiler_pressure_mpa: 24.0
            }]
        );
    }

    #[test]
    fn critical_pressure_and_saturation_come_from_the_lookup() {
        let ranges = InputRanges::default();
        let above = CycleInputs::water(8.0e6, 773.15, 10.0e3);
        assert_eq!(
            review(&above, &ranges, &FixedSaturation),
            vec![Advisory::Supercritical {
                boiler_pressure_mpa: 8.0
            }]
        );

        let below = CycleInputs::water(2.0e6, 490.0, 10.0e3);
        let advisories = review(&below, &ranges, &FixedSaturation);
        assert!(advisories.iter().any(|a| matches!(
            a,
            Advisory::NotSuperheated { saturation_temperature_c, .. }
                if (*saturation_temperature_c - (500.0 - 273.15)).abs() < 1e-9
        )));
    }

    #[test]
    fn unknown_critical_pressure_falls_back_to_saturation_check() {
        struct NoCritical;
        impl PropertyLookup for NoCritical {
            fn query(
                &self,
                _output: PropertyKind,
                _first: KnownProperty,
                _second: KnownProperty,
                _fluid: &FluidId,
            ) -> Result<f64, PropertyError> {
                Ok(900.0)
            }
        }
        let inputs = CycleInputs::water(24.0e6, 873.15, 10.0e3);
        let advisories = review(&inputs, &InputRanges::default(), &NoCritical);
        assert!(advisories
            .iter()
            .any(|a| matches!(a, Advisory::NotSuperheated { .. })));
        assert!(!advisories
            .iter()
            .any(|a| matches!(a, Advisory::Supercritical { .. })));
    }
}
