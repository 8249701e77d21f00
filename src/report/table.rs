use std::fmt::Write;

use serde::Serialize;

use super::DisplayUnits;
use crate::cycle::{CycleResult, StateLabel};

/// 표 한 행. 값은 표시 단위로 환산되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRow {
    pub label: StateLabel,
    pub pressure: f64,
    pub temperature: f64,
    pub enthalpy: f64,
    pub entropy: f64,
}

/// 4개 상태점 표.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTable {
    pub units: DisplayUnits,
    pub rows: Vec<StateRow>,
}

impl StateTable {
    pub fn new(result: &CycleResult, units: &DisplayUnits) -> Self {
        let rows = result
            .states
            .iter()
            .map(|s| StateRow {
                label: s.label,
                pressure: units.pressure.from_si(s.pressure),
                temperature: units.temperature.from_si(s.temperature),
                enthalpy: units.enthalpy.from_si(s.enthalpy),
                entropy: units.entropy.from_si(s.entropy),
            })
            .collect();
        Self {
            units: *units,
            rows,
        }
    }

    /// 열 제목. 예: `Pressure (MPa)`.
    pub fn headers(&self) -> [String; 5] {
        [
            "State".to_string(),
            format!("Pressure ({})", self.units.pressure.symbol()),
            format!("Temperature ({})", self.units.temperature.symbol()),
            format!("Enthalpy ({})", self.units.enthalpy.symbol()),
            format!("Entropy ({})", self.units.entropy.symbol()),
        ]
    }

    fn cells(&self, precision: usize) -> Vec<[String; 5]> {
        self.rows
            .iter()
            .map(|r| {
                [
                    r.label.to_string(),
                    format!("{:.precision$}", r.pressure),
                    format!("{:.precision$}", r.temperature),
                    format!("{:.precision$}", r.enthalpy),
                    format!("{:.precision$}", r.entropy),
                ]
            })
            .collect()
    }

    /// 열 폭을 맞춘 텍스트 표. 숫자 열은 오른쪽 정렬한다.
    pub fn render_text(&self, precision: usize) -> String {
        let headers = self.headers();
        let cells = self.cells(precision);
        let mut widths = headers.clone().map(|h| h.chars().count());
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let line = |out: &mut String, row: &[String; 5]| {
            for (i, (cell, w)) in row.iter().zip(widths).enumerate() {
                let pad = w - cell.chars().count();
                if i > 0 {
                    out.push_str("  ");
                }
                if i == 0 {
                    out.push_str(cell);
                    out.push_str(&" ".repeat(pad));
                } else {
                    out.push_str(&" ".repeat(pad));
                    out.push_str(cell);
                }
            }
            out.push('\n');
        };
        line(&mut out, &headers);
        let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(total));
        out.push('\n');
        for row in &cells {
            line(&mut out, row);
        }
        out
    }

    /// 쉼표 구분 텍스트. 첫 줄은 열 제목.
    pub fn to_csv(&self, precision: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.headers().join(","));
        for row in self.cells(precision) {
            let _ = writeln!(out, "{}", row.join(","));
        }
        out
    }
}
