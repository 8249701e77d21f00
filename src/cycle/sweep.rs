//! 보일러 압력 변화에 따른 효율 추이 계산.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::error::SolveError;
use super::inputs::CycleInputs;
use super::solver::solve;
use super::state::CycleResult;
use crate::fluid::PropertyLookup;

/// 한 번의 스윕에서 계산할 수 있는 최대 점 수.
pub const MAX_SWEEP_STEPS: usize = 1000;

/// 스윕 범위 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("스윕 단계 수는 2 이상이어야 합니다 (입력: {0})")]
    TooFewSteps(usize),
    #[error("스윕 단계 수는 {max} 이하여야 합니다 (입력: {steps})")]
    TooManySteps { steps: usize, max: usize },
    #[error("스윕 시작 압력({from} Pa)이 끝 압력({to} Pa)보다 작아야 합니다")]
    EmptyRange { from: f64, to: f64 },
}

/// 스윕의 한 점. 실패한 점도 결과에 남는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// 보일러 압력(Pa)
    pub boiler_pressure: f64,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<CycleResult, SolveError>,
}

impl SweepPoint {
    pub fn efficiency_percent(&self) -> Option<f64> {
        self.outcome
            .as_ref()
            .ok()
            .map(|r| r.thermal_efficiency_percent)
    }
}

fn serialize_outcome<S>(
    outcome: &Result<CycleResult, SolveError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match outcome {
        Ok(result) => serializer.serialize_some(result),
        Err(err) => serializer.serialize_str(&err.to_string()),
    }
}

/// 보일러 압력을 `from`~`to`(Pa) 사이 `steps` 개의 등간격 점으로 바꿔가며 계산한다.
/// `steps` 는 2 이상 [`MAX_SWEEP_STEPS`] 이하.
pub fn boiler_pressure_sweep<L>(
    base: &CycleInputs,
    from: f64,
    to: f64,
    steps: usize,
    lookup: &L,
) -> Result<Vec<SweepPoint>, SweepError>
where
    L: PropertyLookup + ?Sized,
{
    if steps < 2 {
        return Err(SweepError::TooFewSteps(steps));
    }
    if steps > MAX_SWEEP_STEPS {
        return Err(SweepError::TooManySteps {
            steps,
            max: MAX_SWEEP_STEPS,
        });
    }
    if !(from < to) {
        return Err(SweepError::EmptyRange { from, to });
    }
    info!(from, to, steps, "보일러 압력 스윕 시작");
    let increment = (to - from) / (steps - 1) as f64;
    let points = (0..steps)
        .map(|i| {
            let boiler_pressure = if i == steps - 1 {
                to
            } else {
                from + increment * i as f64
            };
            let outcome = solve(&base.with_boiler_pressure(boiler_pressure), lookup);
            if let Err(err) = &outcome {
                debug!(boiler_pressure, %err, "스윕 점 계산 실패");
            }
            SweepPoint {
                boiler_pressure,
                outcome,
            }
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::If97Lookup;

    #[test]
    fn rejects_degenerate_ranges() {
        let base = CycleInputs::water(8.0e6, 773.15, 10.0e3);
        assert_eq!(
            boiler_pressure_sweep(&base, 1.0e6, 2.0e6, 1, &If97Lookup).unwrap_err(),
            SweepError::TooFewSteps(1)
        );
        assert!(matches!(
            boiler_pressure_sweep(&base, 2.0e6, 2.0e6, 5, &If97Lookup).unwrap_err(),
            SweepError::EmptyRange { .. }
        ));
    }

    #[test]
    fn step_count_is_capped_before_any_solve() {
        let base = CycleInputs::water(8.0e6, 773.15, 10.0e3);
        let err = boiler_pressure_sweep(&base, 1.0e6, 2.0e6, usize::MAX, &If97Lookup).unwrap_err();
        assert_eq!(
            err,
            SweepError::TooManySteps {
                steps: usize::MAX,
                max: MAX_SWEEP_STEPS
            }
        );
        let points =
            boiler_pressure_sweep(&base, 1.0e6, 2.0e6, MAX_SWEEP_STEPS, &If97Lookup).unwrap();
        assert_eq!(points.len(), MAX_SWEEP_STEPS);
    }

    #[test]
    fn endpoints_are_exact_and_failures_are_kept() {
        // 첫 점은 복수기 압력보다 낮아 실패해야 한다
        let base = CycleInputs::water(8.0e6, 773.15, 10.0e3);
        let points = boiler_pressure_sweep(&base, 5.0e3, 4.0e6, 4, &If97Lookup).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].boiler_pressure, 5.0e3);
        assert_eq!(points[3].boiler_pressure, 4.0e6);
        assert!(points[0].outcome.is_err());
        assert!(points[1..].iter().all(|p| p.efficiency_percent().is_some()));
    }
}
