//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 물성 조회기.
//! 입력/출력: SI(Pa, K, J/kg, J/kg·K). seuif97 은 MPa, °C, kJ 단위를 쓰므로 여기서만 환산한다.

use seuif97::{ph, ps, pt, px, OH, OP, OS, OT, OX};
use tracing::trace;

use super::property::{
    FluidId, KnownProperty, PropertyError, PropertyKind, PropertyLookup, PropertyQuery,
};

const PA_PER_MPA: f64 = 1.0e6;
const J_PER_KJ: f64 = 1000.0;
const KELVIN_OFFSET: f64 = 273.15;

// ---------------- IF97 유효 범위 ----------------
/// 임계 압력(Pa)
pub const CRITICAL_PRESSURE_PA: f64 = 22.064e6;
/// 임계 온도(K)
pub const CRITICAL_TEMPERATURE_K: f64 = 647.096;
/// 273.15 K 에서의 포화 압력(Pa). Region 4 하한.
const SATURATION_PRESSURE_MIN_PA: f64 = 611.213;
const PRESSURE_MAX_PA: f64 = 100.0e6;
const REGION5_PRESSURE_MAX_PA: f64 = 50.0e6;
const TEMPERATURE_MIN_K: f64 = 273.15;
const TEMPERATURE_MAX_K: f64 = 1073.15;
const REGION5_TEMPERATURE_MAX_K: f64 = 2273.15;

// seuif97 이 계산 실패 시 돌려주는 표식 값
const BACKEND_INVALID: f64 = -1000.0;

/// 물/수증기 전용 IF97 물성 조회기.
///
/// 지원 조합: (P,T), (P,h), (P,s), (P,Q). 순서는 상관없다.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Lookup;

impl If97Lookup {
    pub fn new() -> Self {
        Self
    }

    /// 이 조회기가 해석할 수 있는 유체 이름인지 확인한다.
    pub fn supports(fluid: &FluidId) -> bool {
        matches!(
            fluid.as_str().to_ascii_lowercase().as_str(),
            "water" | "h2o"
        )
    }
}

impl PropertyLookup for If97Lookup {
    fn query(
        &self,
        output: PropertyKind,
        first: KnownProperty,
        second: KnownProperty,
        fluid: &FluidId,
    ) -> Result<f64, PropertyError> {
        if !Self::supports(fluid) {
            return Err(PropertyError::UnsupportedFluid(fluid.to_string()));
        }
        let query = PropertyQuery {
            output,
            first,
            second,
            fluid: fluid.clone(),
        };
        let (pressure, other) = split_pressure(first, second)?;
        check_pressure(pressure.value, &query)?;
        if output == PropertyKind::Pressure {
            return Ok(pressure.value);
        }

        let o_id = output_id(output);
        let p_mpa = pressure.value / PA_PER_MPA;
        let raw = match other.kind {
            PropertyKind::Temperature => {
                check_temperature(pressure.value, other.value, &query)?;
                pt(p_mpa, other.value - KELVIN_OFFSET, o_id)
            }
            PropertyKind::Enthalpy => ph(p_mpa, other.value / J_PER_KJ, o_id),
            PropertyKind::Entropy => ps(p_mpa, other.value / J_PER_KJ, o_id),
            PropertyKind::VaporQuality => {
                check_saturation(pressure.value, other.value, &query)?;
                px(p_mpa, other.value, o_id)
            }
            PropertyKind::Pressure => {
                return Err(PropertyError::UnsupportedPair {
                    first: first.kind,
                    second: second.kind,
                })
            }
        };
        trace!(%query, raw, "seuif97 결과");
        if !raw.is_finite() || raw == BACKEND_INVALID {
            return Err(out_of_range(
                &query,
                "IF97 계산 실패(유효 범위 밖이거나 수렴 실패)",
            ));
        }
        Ok(to_si(output, raw))
    }

    fn critical_pressure(&self, fluid: &FluidId) -> Option<f64> {
        Self::supports(fluid).then_some(CRITICAL_PRESSURE_PA)
    }
}

fn split_pressure(
    first: KnownProperty,
    second: KnownProperty,
) -> Result<(KnownProperty, KnownProperty), PropertyError> {
    match (first.kind, second.kind) {
        (PropertyKind::Pressure, other) if other != PropertyKind::Pressure => Ok((first, second)),
        (other, PropertyKind::Pressure) if other != PropertyKind::Pressure => Ok((second, first)),
        _ => Err(PropertyError::UnsupportedPair {
            first: first.kind,
            second: second.kind,
        }),
    }
}

fn output_id(output: PropertyKind) -> i32 {
    match output {
        PropertyKind::Pressure => OP,
        PropertyKind::Temperature => OT,
        PropertyKind::Enthalpy => OH,
        PropertyKind::Entropy => OS,
        PropertyKind::VaporQuality => OX,
    }
}

fn to_si(output: PropertyKind, raw: f64) -> f64 {
    match output {
        PropertyKind::Pressure => raw * PA_PER_MPA,
        PropertyKind::Temperature => raw + KELVIN_OFFSET,
        PropertyKind::Enthalpy | PropertyKind::Entropy => raw * J_PER_KJ,
        PropertyKind::VaporQuality => raw,
    }
}

fn out_of_range(query: &PropertyQuery, detail: &str) -> PropertyError {
    PropertyError::OutOfRange {
        query: query.clone(),
        detail: detail.to_string(),
    }
}

fn check_pressure(p_pa: f64, query: &PropertyQuery) -> Result<(), PropertyError> {
    if !p_pa.is_finite() || p_pa <= 0.0 || p_pa > PRESSURE_MAX_PA {
        return Err(out_of_range(query, "압력은 0 초과 100 MPa 이하여야 합니다"));
    }
    Ok(())
}

fn check_temperature(p_pa: f64, t_k: f64, query: &PropertyQuery) -> Result<(), PropertyError> {
    if !t_k.is_finite() || t_k < TEMPERATURE_MIN_K || t_k > REGION5_TEMPERATURE_MAX_K {
        return Err(out_of_range(query, "온도는 273.15~2273.15 K 범위여야 합니다"));
    }
    if t_k > TEMPERATURE_MAX_K && p_pa > REGION5_PRESSURE_MAX_PA {
        return Err(out_of_range(query, "1073.15 K 초과 영역은 50 MPa 이하에서만 유효"));
    }
    Ok(())
}

fn check_saturation(p_pa: f64, x: f64, query: &PropertyQuery) -> Result<(), PropertyError> {
    if !(0.0..=1.0).contains(&x) {
        return Err(out_of_range(query, "건도는 0~1 범위여야 합니다"));
    }
    if !(SATURATION_PRESSURE_MIN_PA..=CRITICAL_PRESSURE_PA).contains(&p_pa) {
        return Err(out_of_range(
            query,
            "포화 상태는 611.213 Pa ~ 22.064 MPa 에서만 정의됩니다",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_other_fluids() {
        let err = If97Lookup
            .query(
                PropertyKind::Enthalpy,
                KnownProperty::pressure(1.0e6),
                KnownProperty::temperature(500.0),
                &FluidId::new("R134a"),
            )
            .unwrap_err();
        assert_eq!(err, PropertyError::UnsupportedFluid("R134a".into()));
    }

    #[test]
    fn fluid_name_is_case_insensitive() {
        assert!(If97Lookup::supports(&FluidId::new("WATER")));
        assert!(If97Lookup::supports(&FluidId::new("h2o")));
        assert!(!If97Lookup::supports(&FluidId::new("Air")));
    }

    #[test]
    fn pair_without_pressure_is_unsupported() {
        let err = If97Lookup
            .query(
                PropertyKind::Temperature,
                KnownProperty::enthalpy(3.0e6),
                KnownProperty::entropy(7.0e3),
                &FluidId::water(),
            )
            .unwrap_err();
        assert!(matches!(err, PropertyError::UnsupportedPair { .. }));
    }

    #[test]
    fn quality_above_critical_pressure_is_out_of_range() {
        let err = If97Lookup
            .saturation_temperature(25.0e6, &FluidId::water())
            .unwrap_err();
        assert!(matches!(err, PropertyError::OutOfRange { .. }));
    }

    #[test]
    fn critical_pressure_is_known_only_for_water() {
        assert_eq!(
            If97Lookup.critical_pressure(&FluidId::water()),
            Some(CRITICAL_PRESSURE_PA)
        );
        assert_eq!(If97Lookup.critical_pressure(&FluidId::new("Air")), None);
    }

    #[test]
    fn pressure_output_echoes_known_pressure() {
        let p = If97Lookup
            .query(
                PropertyKind::Pressure,
                KnownProperty::temperature(400.0),
                KnownProperty::pressure(2.0e6),
                &FluidId::water(),
            )
            .unwrap();
        assert_eq!(p, 2.0e6);
    }
}
