use std::fmt::Write;

use serde::Serialize;

use super::DisplayUnits;
use crate::cycle::{CycleResult, StatePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagramKind {
    /// 온도-엔트로피 선도
    TemperatureEntropy,
    /// 엔탈피-엔트로피(몰리에르) 선도
    EnthalpyEntropy,
}

/// 상태점 라벨과 위치.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub position: [f64; 2],
}

/// 사이클 선도 하나. `points` 는 1→2→3→4→1 로 닫힌 5개 점이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub kind: DiagramKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
    pub annotations: Vec<Annotation>,
}

impl Diagram {
    pub fn temperature_entropy(result: &CycleResult, units: &DisplayUnits) -> Self {
        Self::build(
            DiagramKind::TemperatureEntropy,
            "T-s Diagram (Rankine Cycle)",
            format!("Temperature ({})", units.temperature.symbol()),
            result,
            units,
            |s| units.temperature.from_si(s.temperature),
        )
    }

    pub fn enthalpy_entropy(result: &CycleResult, units: &DisplayUnits) -> Self {
        Self::build(
            DiagramKind::EnthalpyEntropy,
            "h-s Diagram (Rankine Cycle)",
            format!("Enthalpy ({})", units.enthalpy.symbol()),
            result,
            units,
            |s| units.enthalpy.from_si(s.enthalpy),
        )
    }

    fn build(
        kind: DiagramKind,
        title: &str,
        y_label: String,
        result: &CycleResult,
        units: &DisplayUnits,
        y_of: impl Fn(&StatePoint) -> f64,
    ) -> Self {
        let annotations: Vec<Annotation> = result
            .states
            .iter()
            .map(|s| Annotation {
                text: s.label.to_string(),
                position: [units.entropy.from_si(s.entropy), y_of(s)],
            })
            .collect();
        let mut points: Vec<[f64; 2]> = annotations.iter().map(|a| a.position).collect();
        points.push(annotations[0].position);
        Self {
            kind,
            title: title.to_string(),
            x_label: format!("Entropy ({})", units.entropy.symbol()),
            y_label,
            points,
            annotations,
        }
    }

    /// 선도 점 열을 CSV 로 쓴다(`x,y,label`). 닫는 점은 라벨이 비어 있다.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.title);
        let _ = writeln!(out, "{},{},state", self.x_label, self.y_label);
        for (i, [x, y]) in self.points.iter().enumerate() {
            let label = self
                .annotations
                .get(i)
                .map(|a| a.text.as_str())
                .unwrap_or("");
            let _ = writeln!(out, "{x},{y},{label}");
        }
        out
    }
}
