use thiserror::Error;

use super::state::StateLabel;
use crate::fluid::{PropertyError, PropertyQuery};

/// 사이클 계산 실패.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// 물성 조회 실패. 실패한 조회의 파라미터를 함께 담는다.
    #[error("상태 {state} 물성 조회 실패 [{query}]: {source}")]
    PropertyQuery {
        state: StateLabel,
        query: PropertyQuery,
        #[source]
        source: PropertyError,
    },
    /// 물리적으로 성립하지 않는 사이클
    #[error("비정상 사이클: {0}")]
    DegenerateCycle(DegenerateCycle),
}

impl SolveError {
    /// 실패한 물성 조회(있을 경우).
    pub fn failed_query(&self) -> Option<&PropertyQuery> {
        match self {
            SolveError::PropertyQuery { query, .. } => Some(query),
            SolveError::DegenerateCycle(_) => None,
        }
    }
}

/// 사이클이 성립하지 않는 이유.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DegenerateCycle {
    #[error("입력값이 유한한 수가 아닙니다")]
    NonFiniteInput,
    #[error("압력은 양수여야 합니다")]
    NonPositivePressure,
    #[error("온도는 양수(K)여야 합니다")]
    NonPositiveTemperature,
    /// 복수기 압력이 보일러 압력 이상이라 터빈 압력강하가 없음 (Pa)
    #[error("복수기 압력({condenser} Pa)이 보일러 압력({boiler} Pa)보다 낮아야 합니다")]
    NoPressureDrop { boiler: f64, condenser: f64 },
    /// 가열량이 0 이하라 효율을 정의할 수 없음 (J/kg)
    #[error("가열량이 0 이하입니다 ({0} J/kg)")]
    NonPositiveHeatInput(f64),
}
