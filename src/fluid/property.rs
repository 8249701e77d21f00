use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 물성 조회에서 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    Pressure,
    Temperature,
    Enthalpy,
    Entropy,
    VaporQuality,
}

impl PropertyKind {
    /// 조회 파라미터 표시용 약어(P, T, h, s, Q).
    pub fn symbol(self) -> &'static str {
        match self {
            PropertyKind::Pressure => "P",
            PropertyKind::Temperature => "T",
            PropertyKind::Enthalpy => "h",
            PropertyKind::Entropy => "s",
            PropertyKind::VaporQuality => "Q",
        }
    }

    /// 내부 기준 SI 단위 기호.
    pub fn si_unit(self) -> &'static str {
        match self {
            PropertyKind::Pressure => "Pa",
            PropertyKind::Temperature => "K",
            PropertyKind::Enthalpy => "J/kg",
            PropertyKind::Entropy => "J/(kg·K)",
            PropertyKind::VaporQuality => "-",
        }
    }
}

/// 이미 알고 있는 물성 한 쌍(종류, SI 값).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnownProperty {
    pub kind: PropertyKind,
    pub value: f64,
}

impl KnownProperty {
    pub fn new(kind: PropertyKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn pressure(pa: f64) -> Self {
        Self::new(PropertyKind::Pressure, pa)
    }

    pub fn temperature(k: f64) -> Self {
        Self::new(PropertyKind::Temperature, k)
    }

    pub fn enthalpy(j_per_kg: f64) -> Self {
        Self::new(PropertyKind::Enthalpy, j_per_kg)
    }

    pub fn entropy(j_per_kg_k: f64) -> Self {
        Self::new(PropertyKind::Entropy, j_per_kg_k)
    }

    pub fn quality(x: f64) -> Self {
        Self::new(PropertyKind::VaporQuality, x)
    }
}

impl fmt::Display for KnownProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PropertyKind::VaporQuality => write!(f, "{}={}", self.kind.symbol(), self.value),
            kind => write!(f, "{}={} {}", kind.symbol(), self.value, kind.si_unit()),
        }
    }
}

/// 작동 유체 식별자. 조회 서비스가 해석하는 이름을 그대로 담는다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FluidId(String);

impl FluidId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 랭킨 사이클 계산에 쓰는 고정 유체(물).
    pub fn water() -> Self {
        Self::new("Water")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FluidId {
    fn default() -> Self {
        Self::water()
    }
}

impl fmt::Display for FluidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 물성 조회 한 건의 전체 파라미터. 실패 시 오류에 그대로 첨부된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyQuery {
    pub output: PropertyKind,
    pub first: KnownProperty,
    pub second: KnownProperty,
    pub fluid: FluidId,
}

impl fmt::Display for PropertyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}; {})",
            self.output.symbol(),
            self.first,
            self.second,
            self.fluid
        )
    }
}

/// 물성 조회 실패 유형.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// 유체의 유효 상태 범위를 벗어남
    #[error("유효 범위 밖의 상태입니다: {query} ({detail})")]
    OutOfRange { query: PropertyQuery, detail: String },
    /// 지원하지 않는 유체 이름
    #[error("지원하지 않는 유체: {0}")]
    UnsupportedFluid(String),
    /// 지원하지 않는 입력 물성 조합
    #[error("지원하지 않는 물성 조합: {}-{}", .first.symbol(), .second.symbol())]
    UnsupportedPair {
        first: PropertyKind,
        second: PropertyKind,
    },
}

/// "두 물성을 알 때 세 번째 물성"을 돌려주는 외부 물성 평가기.
///
/// 모든 값은 SI 기준(Pa, K, J/kg, J/(kg·K), 건도 0~1)으로 주고받는다.
pub trait PropertyLookup {
    fn query(
        &self,
        output: PropertyKind,
        first: KnownProperty,
        second: KnownProperty,
        fluid: &FluidId,
    ) -> Result<f64, PropertyError>;

    /// 압력(Pa)에서의 포화 온도(K). (P, Q=0) 조회와 같다.
    fn saturation_temperature(&self, pressure: f64, fluid: &FluidId) -> Result<f64, PropertyError> {
        self.query(
            PropertyKind::Temperature,
            KnownProperty::pressure(pressure),
            KnownProperty::quality(0.0),
            fluid,
        )
    }

    /// 유체의 임계 압력(Pa). 모르면 `None`.
    fn critical_pressure(&self, _fluid: &FluidId) -> Option<f64> {
        None
    }
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for &T {
    fn query(
        &self,
        output: PropertyKind,
        first: KnownProperty,
        second: KnownProperty,
        fluid: &FluidId,
    ) -> Result<f64, PropertyError> {
        (**self).query(output, first, second, fluid)
    }

    fn saturation_temperature(&self, pressure: f64, fluid: &FluidId) -> Result<f64, PropertyError> {
        (**self).saturation_temperature(pressure, fluid)
    }

    fn critical_pressure(&self, fluid: &FluidId) -> Option<f64> {
        (**self).critical_pressure(fluid)
    }
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for Box<T> {
    fn query(
        &self,
        output: PropertyKind,
        first: KnownProperty,
        second: KnownProperty,
        fluid: &FluidId,
    ) -> Result<f64, PropertyError> {
        (**self).query(output, first, second, fluid)
    }

    fn saturation_temperature(&self, pressure: f64, fluid: &FluidId) -> Result<f64, PropertyError> {
        (**self).saturation_temperature(pressure, fluid)
    }

    fn critical_pressure(&self, fluid: &FluidId) -> Option<f64> {
        (**self).critical_pressure(fluid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_display_lists_both_known_properties() {
        let q = PropertyQuery {
            output: PropertyKind::Enthalpy,
            first: KnownProperty::pressure(8.0e6),
            second: KnownProperty::temperature(773.15),
            fluid: FluidId::water(),
        };
        assert_eq!(q.to_string(), "h(P=8000000 Pa, T=773.15 K; Water)");
    }

    #[test]
    fn quality_is_shown_without_unit() {
        let known = KnownProperty::quality(0.0);
        assert_eq!(known.to_string(), "Q=0");
    }

    #[test]
    fn unsupported_pair_message_uses_symbols() {
        let err = PropertyError::UnsupportedPair {
            first: PropertyKind::Enthalpy,
            second: PropertyKind::Entropy,
        };
        assert!(err.to_string().contains("h-s"));
    }
}
